// src/produtos/produtos_structs.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber os dados de um produto nas requisições POST/PUT.
#[derive(Deserialize)]
pub struct NovoProduto {
    pub name: String,
    pub description: String,
    pub type_id: i32,
    pub download_url: String,
}

/// Estrutura da listagem de produtos, já enriquecida com o nome do tipo
/// via JOIN com `product_types`.
#[derive(Serialize, FromRow)]
pub struct ProdutoResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub download_url: String,
    pub created_at: NaiveDateTime,
    pub type_name: String,
}

/// Estrutura da resposta de criação/atualização: o payload ecoado com o id.
#[derive(Serialize)]
pub struct ProdutoCriado {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub type_id: i32,
    pub download_url: String,
}

/// Estrutura que representa um tipo de produto. Somente leitura nesta API.
#[derive(Serialize, FromRow)]
pub struct TipoProduto {
    pub id: i32,
    pub name: String,
}

/// Filtros opcionais da listagem de produtos.
/// `name` é busca por substring; `type` é igualdade exata com o nome do tipo.
#[derive(Deserialize)]
pub struct FiltroProdutos {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tipo: Option<String>,
}

/// Valida os campos obrigatórios de um produto antes de tocar o banco.
pub fn validar_produto(produto: &NovoProduto) -> Option<&'static str> {
    if produto.name.is_empty() || produto.download_url.is_empty() {
        return Some("Nome, tipo e URL de download são obrigatórios.");
    }
    None
}

/// Monta a consulta da listagem de produtos com os filtros fornecidos.
/// Cada filtro presente vira exatamente um predicado, combinado com AND;
/// os valores entram como placeholders posicionais, na ordem de `params`.
pub fn montar_consulta_produtos(filtro: &FiltroProdutos) -> (String, Vec<String>) {
    let mut sql = String::from(
        "SELECT p.id, p.name, p.description, p.download_url, p.created_at, pt.name AS type_name \
         FROM products p JOIN product_types pt ON p.type_id = pt.id",
    );
    let mut clausulas: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(name) = &filtro.name {
        params.push(format!("%{}%", name));
        clausulas.push(format!("p.name LIKE ${}", params.len()));
    }
    if let Some(tipo) = &filtro.tipo {
        params.push(tipo.clone());
        clausulas.push(format!("pt.name = ${}", params.len()));
    }

    if !clausulas.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clausulas.join(" AND "));
    }
    sql.push_str(" ORDER BY p.created_at DESC");

    (sql, params)
}
