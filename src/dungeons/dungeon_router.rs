// src/dungeons/dungeon_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query, query_as, Row};

// Importa as structs definidas no módulo `dungeon_structs`
use super::dungeon_structs::{validar_item, CategoriaDungeon, FiltroItens, ItemDungeon, NovoItem};
use crate::shared::erros::erro_interno;
use crate::shared::shared_structs::MensagemResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para listar todas as categorias do Dungeons.
#[get("/api/categorias")]
pub async fn buscar_categorias_dungeon(data: web::Data<AppState>) -> impl Responder {
    let categorias_result =
        query_as::<_, CategoriaDungeon>("SELECT id, nome FROM categorias_d ORDER BY id")
            .fetch_all(&data.db_pool)
            .await;

    match categorias_result {
        Ok(categorias) => HttpResponse::Ok().json(categorias),
        Err(e) => erro_interno("Erro interno do servidor ao buscar categorias.", &e),
    }
}

/// Rota para listar os itens do Dungeons, com filtro opcional de raridade.
/// O filtro sempre entra como placeholder posicional, nunca interpolado.
#[get("/api/itens")]
pub async fn buscar_itens(
    data: web::Data<AppState>,
    filtro: web::Query<FiltroItens>,
) -> impl Responder {
    let itens_result = match &filtro.raridade {
        Some(raridade) => {
            query_as::<_, ItemDungeon>(
                "SELECT id, nome, poder, raridade, categoria_id FROM itens_d WHERE raridade = $1 ORDER BY id",
            )
            .bind(raridade)
            .fetch_all(&data.db_pool)
            .await
        }
        None => {
            query_as::<_, ItemDungeon>(
                "SELECT id, nome, poder, raridade, categoria_id FROM itens_d ORDER BY id",
            )
            .fetch_all(&data.db_pool)
            .await
        }
    };

    match itens_result {
        Ok(itens) => HttpResponse::Ok().json(itens),
        Err(e) => erro_interno("Erro interno do servidor ao buscar itens.", &e),
    }
}

/// Rota para buscar um item específico por ID.
#[get("/api/itens/{id}")]
pub async fn buscar_item_por_id(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let item_result = query_as::<_, ItemDungeon>(
        "SELECT id, nome, poder, raridade, categoria_id FROM itens_d WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&data.db_pool)
    .await;

    match item_result {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(MensagemResponse::new("Item não encontrado")),
        Err(e) => erro_interno("Erro interno do servidor ao buscar item.", &e),
    }
}

/// Rota para criar um novo item.
/// Devolve 201 com o item criado, incluindo o id gerado pelo banco.
#[post("/api/itens")]
pub async fn cadastrar_item(data: web::Data<AppState>, item: web::Json<NovoItem>) -> HttpResponse {
    let item = item.into_inner();

    if let Some(mensagem) = validar_item(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "INSERT INTO itens_d (nome, poder, raridade, categoria_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&item.nome)
    .bind(item.poder)
    .bind(&item.raridade)
    .bind(item.categoria_id)
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(ItemDungeon {
                id,
                nome: item.nome,
                poder: item.poder,
                raridade: item.raridade,
                categoria_id: item.categoria_id,
            }),
            Err(e) => erro_interno("Erro interno do servidor ao criar item.", &e),
        },
        Err(e) => erro_interno("Erro interno do servidor ao criar item.", &e),
    }
}

/// Rota para atualizar um item existente.
#[put("/api/itens/{id}")]
pub async fn atualizar_item(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoItem>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_item(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "UPDATE itens_d SET nome = $1, poder = $2, raridade = $3, categoria_id = $4 WHERE id = $5",
    )
    .bind(&item.nome)
    .bind(item.poder)
    .bind(&item.raridade)
    .bind(item.categoria_id)
    .bind(id)
    .execute(&data.db_pool)
    .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(ItemDungeon {
                    id,
                    nome: item.nome,
                    poder: item.poder,
                    raridade: item.raridade,
                    categoria_id: item.categoria_id,
                })
            } else {
                HttpResponse::NotFound()
                    .json(MensagemResponse::new("Item não encontrado para atualização."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao atualizar item.", &e),
    }
}

/// Rota para deletar um item.
#[delete("/api/itens/{id}")]
pub async fn deletar_item(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM itens_d WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound()
                    .json(MensagemResponse::new("Item não encontrado para exclusão."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao deletar item.", &e),
    }
}
