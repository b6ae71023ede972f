// src/produtos/mod.rs

// Declara o submódulo que contém as definições das structs de produtos
pub mod produtos_structs;
// Declara o submódulo que contém as funções de rota relacionadas a produtos
pub mod produtos_router;
