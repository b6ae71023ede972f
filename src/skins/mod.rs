// src/skins/mod.rs

// Declara o submódulo que contém as definições das structs de skins
pub mod skin_structs;
// Declara o submódulo que contém as funções de rota relacionadas a skins
pub mod skin_router;
