// src/educacao/mod.rs

// Declara o submódulo que contém as definições das structs do Education
pub mod educacao_structs;
// Declara o submódulo que contém as funções de rota do Education
pub mod educacao_router;
