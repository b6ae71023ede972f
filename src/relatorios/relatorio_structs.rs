// src/relatorios/relatorio_structs.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Linha do relatório de itens do Dungeons com o nome da categoria
/// (JOIN entre `itens_d` e `categorias_d`).
#[derive(Serialize, FromRow)]
pub struct RelatorioItem {
    pub id: i32,
    pub nome: String,
    pub poder: i32,
    pub raridade: String,
    pub nome_categoria: String,
}

/// Linha do relatório de downloads de produtos por usuário
/// (JOIN entre `user_downloads`, `users`, `products` e `product_types`).
#[derive(Serialize, FromRow)]
pub struct DownloadUsuario {
    pub user_id: i32,
    pub user_name: String,
    pub user_email: String,
    pub product_id: i32,
    pub product_name: String,
    pub product_type: String,
    pub download_date: NaiveDateTime,
}
