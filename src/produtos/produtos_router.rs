// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query, query_as, Row};

// Importa as structs definidas no módulo `produtos_structs`
use super::produtos_structs::{
    montar_consulta_produtos, validar_produto, FiltroProdutos, NovoProduto, ProdutoCriado,
    ProdutoResponse, TipoProduto,
};
use crate::shared::erros::erro_interno;
use crate::shared::shared_structs::MensagemResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para criar um novo produto.
#[post("/api/products")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>,
) -> HttpResponse {
    let item = item.into_inner();

    if let Some(mensagem) = validar_produto(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "INSERT INTO products (name, description, type_id, download_url) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(item.type_id)
    .bind(&item.download_url)
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(ProdutoCriado {
                id,
                name: item.name,
                description: item.description,
                type_id: item.type_id,
                download_url: item.download_url,
            }),
            Err(e) => erro_interno("Erro interno do servidor ao criar produto.", &e),
        },
        Err(e) => erro_interno("Erro interno do servidor ao criar produto.", &e),
    }
}

/// Rota para listar os produtos com os filtros opcionais `name` e `type`.
///
/// A consulta é montada por `montar_consulta_produtos`: um predicado por
/// filtro presente, sempre via placeholder posicional. O JOIN com
/// `product_types` traz o nome do tipo para a resposta.
#[get("/api/products")]
pub async fn buscar_produtos(
    data: web::Data<AppState>,
    filtro: web::Query<FiltroProdutos>,
) -> impl Responder {
    let (sql, params) = montar_consulta_produtos(&filtro);

    let mut consulta = query_as::<_, ProdutoResponse>(&sql);
    for param in &params {
        consulta = consulta.bind(param.as_str());
    }

    match consulta.fetch_all(&data.db_pool).await {
        Ok(produtos) => HttpResponse::Ok().json(produtos),
        Err(e) => erro_interno("Erro interno do servidor ao buscar produtos.", &e),
    }
}

/// Rota para listar os tipos de produto.
#[get("/api/product-types")]
pub async fn buscar_tipos_de_produto(data: web::Data<AppState>) -> impl Responder {
    let tipos_result = query_as::<_, TipoProduto>("SELECT id, name FROM product_types ORDER BY name")
        .fetch_all(&data.db_pool)
        .await;

    match tipos_result {
        Ok(tipos) => HttpResponse::Ok().json(tipos),
        Err(e) => erro_interno("Erro interno do servidor ao buscar tipos de produto.", &e),
    }
}

/// Rota para atualizar um produto existente.
#[put("/api/products/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoProduto>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_produto(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "UPDATE products SET name = $1, description = $2, type_id = $3, download_url = $4 WHERE id = $5",
    )
    .bind(&item.name)
    .bind(&item.description)
    .bind(item.type_id)
    .bind(&item.download_url)
    .bind(id)
    .execute(&data.db_pool)
    .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(ProdutoCriado {
                    id,
                    name: item.name,
                    description: item.description,
                    type_id: item.type_id,
                    download_url: item.download_url,
                })
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Produto não encontrado."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao atualizar produto.", &e),
    }
}

/// Rota para deletar um produto.
#[delete("/api/products/{id}")]
pub async fn deletar_produto(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Produto não encontrado."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao deletar produto.", &e),
    }
}
