// src/dungeons/mod.rs

// Declara o submódulo que contém as definições das structs do Dungeons
pub mod dungeon_structs;
// Declara o submódulo que contém as funções de rota do Dungeons
pub mod dungeon_router;
