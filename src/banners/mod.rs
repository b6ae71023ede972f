// src/banners/mod.rs

// Declara o submódulo que contém as definições das structs de banners
pub mod banner_structs;
// Declara o submódulo que contém as funções de rota relacionadas a banners
pub mod banner_router;
