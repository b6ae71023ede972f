// src/skins/skin_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query, query_as, Row};

// Importa as structs definidas no módulo `skin_structs`
use super::skin_structs::{validar_skin, NovaSkin, Skin};
use crate::shared::erros::erro_interno;
use crate::shared::shared_structs::MensagemResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para criar uma nova skin.
#[post("/api/skins")]
pub async fn cadastrar_skin(data: web::Data<AppState>, item: web::Json<NovaSkin>) -> HttpResponse {
    let item = item.into_inner();

    if let Some(mensagem) = validar_skin(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        r#"INSERT INTO skins (name, "imageUrl", rarity, price) VALUES ($1, $2, $3, $4) RETURNING id"#,
    )
    .bind(&item.name)
    .bind(&item.image_url)
    .bind(&item.rarity)
    .bind(&item.price)
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(Skin {
                id,
                name: item.name,
                image_url: item.image_url,
                rarity: item.rarity,
                price: item.price,
            }),
            Err(e) => erro_interno("Erro interno do servidor ao criar skin.", &e),
        },
        Err(e) => erro_interno("Erro interno do servidor ao criar skin.", &e),
    }
}

/// Rota para listar todas as skins.
#[get("/api/skins")]
pub async fn buscar_skins(data: web::Data<AppState>) -> impl Responder {
    let skins_result = query_as::<_, Skin>(
        r#"SELECT id, name, "imageUrl" AS image_url, rarity, price FROM skins ORDER BY id"#,
    )
    .fetch_all(&data.db_pool)
    .await;

    match skins_result {
        Ok(skins) => HttpResponse::Ok().json(skins),
        Err(e) => erro_interno("Erro interno do servidor ao buscar skins.", &e),
    }
}

/// Rota para buscar uma skin específica por ID.
#[get("/api/skins/{id}")]
pub async fn buscar_skin_por_id(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let skin_result = query_as::<_, Skin>(
        r#"SELECT id, name, "imageUrl" AS image_url, rarity, price FROM skins WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(&data.db_pool)
    .await;

    match skin_result {
        Ok(Some(skin)) => HttpResponse::Ok().json(skin),
        Ok(None) => HttpResponse::NotFound().json(MensagemResponse::new("Skin não encontrada.")),
        Err(e) => erro_interno("Erro interno do servidor ao buscar skin.", &e),
    }
}

/// Rota para atualizar uma skin existente.
#[put("/api/skins/{id}")]
pub async fn atualizar_skin(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovaSkin>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_skin(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        r#"UPDATE skins SET name = $1, "imageUrl" = $2, rarity = $3, price = $4 WHERE id = $5"#,
    )
    .bind(&item.name)
    .bind(&item.image_url)
    .bind(&item.rarity)
    .bind(&item.price)
    .bind(id)
    .execute(&data.db_pool)
    .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(Skin {
                    id,
                    name: item.name,
                    image_url: item.image_url,
                    rarity: item.rarity,
                    price: item.price,
                })
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Skin não encontrada."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao atualizar skin.", &e),
    }
}

/// Rota para deletar uma skin.
#[delete("/api/skins/{id}")]
pub async fn deletar_skin(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM skins WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Skin não encontrada."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao deletar skin.", &e),
    }
}
