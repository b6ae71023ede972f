// src/banners/banner_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query, query_as, Row};

// Importa as structs definidas no módulo `banner_structs` dentro da mesma pasta `banners`
use super::banner_structs::{validar_banner, BannerResponse, BannerRow, NovoBanner};
// Importa a resposta de erro padrão e a tradução de erros do banco
use crate::shared::erros::erro_interno;
use crate::shared::shared_structs::MensagemResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para criar um novo banner.
///
/// Valida os campos obrigatórios, serializa o array de imagens para uma
/// string JSON (é assim que a coluna `images` é persistida) e devolve o
/// banner criado junto com o id gerado pelo banco.
#[post("/banners")]
pub async fn cadastrar_banner(
    data: web::Data<AppState>,
    item: web::Json<NovoBanner>,
) -> HttpResponse {
    let item = item.into_inner();

    if let Some(mensagem) = validar_banner(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    // Converte o array de imagens para uma string JSON para armazenar no banco
    let images_json = match serde_json::to_string(&item.images) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Erro ao serializar imagens do banner: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(MensagemResponse::new("Erro interno do servidor ao criar banner."));
        }
    };

    let result = query(
        "INSERT INTO banners (type, title, description, images) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(&item.tipo)
    .bind(&item.title)
    .bind(&item.description)
    .bind(&images_json)
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(BannerResponse {
                id,
                tipo: item.tipo,
                title: item.title,
                description: item.description,
                images: item.images,
            }),
            Err(e) => erro_interno("Erro interno do servidor ao criar banner.", &e),
        },
        Err(e) => erro_interno("Erro interno do servidor ao criar banner.", &e),
    }
}

/// Rota para listar todos os banners.
///
/// Cada linha traz `images` como string JSON; a conversão de volta para a
/// sequência de URLs acontece no mapeamento linha -> resposta.
#[get("/banners")]
pub async fn buscar_banners(data: web::Data<AppState>) -> impl Responder {
    let banners_result =
        query_as::<_, BannerRow>("SELECT id, type AS tipo, title, description, images FROM banners ORDER BY id")
            .fetch_all(&data.db_pool)
            .await;

    match banners_result {
        Ok(rows) => {
            let banners: Result<Vec<BannerResponse>, _> =
                rows.into_iter().map(BannerRow::em_resposta).collect();
            match banners {
                Ok(banners) => HttpResponse::Ok().json(banners),
                Err(e) => {
                    log::error!("Erro ao desserializar imagens de banner: {:?}", e);
                    HttpResponse::InternalServerError()
                        .json(MensagemResponse::new("Erro interno do servidor ao buscar banners."))
                }
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao buscar banners.", &e),
    }
}

/// Rota para buscar um banner por ID.
#[get("/banners/{id}")]
pub async fn buscar_banner_por_id(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> HttpResponse {
    let id = path.into_inner();
    let banner_result =
        query_as::<_, BannerRow>("SELECT id, type AS tipo, title, description, images FROM banners WHERE id = $1")
            .bind(id)
            .fetch_optional(&data.db_pool)
            .await;

    match banner_result {
        Ok(Some(row)) => match row.em_resposta() {
            Ok(banner) => HttpResponse::Ok().json(banner),
            Err(e) => {
                log::error!("Erro ao desserializar imagens do banner {}: {:?}", id, e);
                HttpResponse::InternalServerError()
                    .json(MensagemResponse::new("Erro interno do servidor ao buscar banner."))
            }
        },
        Ok(None) => HttpResponse::NotFound().json(MensagemResponse::new("Banner não encontrado.")),
        Err(e) => erro_interno("Erro interno do servidor ao buscar banner.", &e),
    }
}

/// Rota para atualizar um banner existente.
/// Zero linhas afetadas significa que o id não existe (404).
#[put("/banners/{id}")]
pub async fn atualizar_banner(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovoBanner>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_banner(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let images_json = match serde_json::to_string(&item.images) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Erro ao serializar imagens do banner {}: {:?}", id, e);
            return HttpResponse::InternalServerError()
                .json(MensagemResponse::new("Erro interno do servidor ao atualizar banner."));
        }
    };

    let result = query(
        "UPDATE banners SET type = $1, title = $2, description = $3, images = $4 WHERE id = $5",
    )
    .bind(&item.tipo)
    .bind(&item.title)
    .bind(&item.description)
    .bind(&images_json)
    .bind(id)
    .execute(&data.db_pool)
    .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(BannerResponse {
                    id,
                    tipo: item.tipo,
                    title: item.title,
                    description: item.description,
                    images: item.images,
                })
            } else {
                HttpResponse::NotFound()
                    .json(MensagemResponse::new("Banner não encontrado para atualização."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao atualizar banner.", &e),
    }
}

/// Rota para deletar um banner.
#[delete("/banners/{id}")]
pub async fn deletar_banner(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM banners WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                // 204 No Content - sucesso sem corpo de resposta
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound()
                    .json(MensagemResponse::new("Banner não encontrado para exclusão."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao deletar banner.", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::shared::testes::estado_teste;

    #[actix_web::test]
    async fn cadastrar_banner_sem_imagens_retorna_400() {
        let app = test::init_service(
            App::new().app_data(estado_teste()).service(cadastrar_banner),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/banners")
            .set_json(serde_json::json!({
                "type": "promo",
                "title": "Lançamento",
                "images": []
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn atualizar_banner_com_titulo_vazio_retorna_400() {
        let app = test::init_service(
            App::new().app_data(estado_teste()).service(atualizar_banner),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/banners/1")
            .set_json(serde_json::json!({
                "type": "promo",
                "title": "",
                "images": ["a.png"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn cadastrar_banner_sem_campo_images_retorna_400() {
        let app = test::init_service(
            App::new().app_data(estado_teste()).service(cadastrar_banner),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/banners")
            .set_json(serde_json::json!({ "type": "promo", "title": "Lançamento" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
