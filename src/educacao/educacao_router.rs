// src/educacao/educacao_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query, query_as, Row};

// Importa as structs definidas no módulo `educacao_structs`
use super::educacao_structs::{
    montar_consulta_aulas, validar_aula, Aula, FiltroAulas, Materia, NovaAula, RelatorioAula,
};
use crate::shared::erros::erro_interno;
use crate::shared::shared_structs::{Envelope, MensagemResponse};
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para listar todas as matérias.
/// As listagens do Education vão dentro do envelope `{ "data": ... }`.
#[get("/api/education/subjects")]
pub async fn buscar_materias(data: web::Data<AppState>) -> impl Responder {
    let materias_result = query_as::<_, Materia>("SELECT id, name FROM subjects ORDER BY name")
        .fetch_all(&data.db_pool)
        .await;

    match materias_result {
        Ok(materias) => HttpResponse::Ok().json(Envelope { data: materias }),
        Err(e) => erro_interno("Erro interno ao buscar matérias.", &e),
    }
}

/// Rota para listar as aulas, com filtros opcionais de título e matéria.
/// Os binds seguem a mesma ordem dos predicados de `montar_consulta_aulas`.
#[get("/api/education/lessons")]
pub async fn buscar_aulas(
    data: web::Data<AppState>,
    filtro: web::Query<FiltroAulas>,
) -> impl Responder {
    let sql = montar_consulta_aulas(&filtro);

    let mut consulta = query_as::<_, Aula>(&sql);
    if let Some(title) = &filtro.title {
        consulta = consulta.bind(format!("%{}%", title));
    }
    if let Some(subject_id) = filtro.subject_id {
        consulta = consulta.bind(subject_id);
    }

    match consulta.fetch_all(&data.db_pool).await {
        Ok(aulas) => HttpResponse::Ok().json(Envelope { data: aulas }),
        Err(e) => erro_interno("Erro interno ao buscar aulas.", &e),
    }
}

/// Rota para criar uma nova aula.
#[post("/api/education/lessons")]
pub async fn cadastrar_aula(data: web::Data<AppState>, item: web::Json<NovaAula>) -> HttpResponse {
    let item = item.into_inner();

    if let Some(mensagem) = validar_aula(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "INSERT INTO lessons (title, description, subject_id, target_age_group, content_url) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&item.title)
    .bind(&item.description)
    .bind(item.subject_id)
    .bind(&item.target_age_group)
    .bind(&item.content_url)
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(Aula {
                id,
                title: item.title,
                description: item.description,
                subject_id: item.subject_id,
                target_age_group: item.target_age_group,
                content_url: item.content_url,
            }),
            Err(e) => erro_interno("Erro interno ao criar aula.", &e),
        },
        Err(e) => erro_interno("Erro interno ao criar aula.", &e),
    }
}

/// Rota para atualizar uma aula existente.
#[put("/api/education/lessons/{id}")]
pub async fn atualizar_aula(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<NovaAula>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_aula(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query(
        "UPDATE lessons SET title = $1, description = $2, subject_id = $3, \
         target_age_group = $4, content_url = $5 WHERE id = $6",
    )
    .bind(&item.title)
    .bind(&item.description)
    .bind(item.subject_id)
    .bind(&item.target_age_group)
    .bind(&item.content_url)
    .bind(id)
    .execute(&data.db_pool)
    .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(Aula {
                    id,
                    title: item.title,
                    description: item.description,
                    subject_id: item.subject_id,
                    target_age_group: item.target_age_group,
                    content_url: item.content_url,
                })
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Aula não encontrada."))
            }
        }
        Err(e) => erro_interno("Erro interno ao atualizar aula.", &e),
    }
}

/// Rota para deletar uma aula.
#[delete("/api/education/lessons/{id}")]
pub async fn deletar_aula(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM lessons WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Aula não encontrada."))
            }
        }
        Err(e) => erro_interno("Erro ao deletar aula.", &e),
    }
}

/// Rota para gerar o relatório de aulas por matéria.
#[get("/api/education/report")]
pub async fn relatorio_aulas(data: web::Data<AppState>) -> impl Responder {
    let relatorio_result = query_as::<_, RelatorioAula>(
        "SELECT l.id, l.title, l.description, l.target_age_group, s.name AS subject_name \
         FROM lessons AS l INNER JOIN subjects AS s ON l.subject_id = s.id \
         ORDER BY s.name, l.title",
    )
    .fetch_all(&data.db_pool)
    .await;

    match relatorio_result {
        Ok(linhas) => HttpResponse::Ok().json(Envelope { data: linhas }),
        Err(e) => erro_interno("Erro interno ao gerar o relatório.", &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::shared::testes::estado_teste;

    #[actix_web::test]
    async fn cadastrar_aula_sem_titulo_retorna_400() {
        let app =
            test::init_service(App::new().app_data(estado_teste()).service(cadastrar_aula)).await;

        let req = test::TestRequest::post()
            .uri("/api/education/lessons")
            .set_json(serde_json::json!({
                "title": "",
                "description": "Circuitos de redstone",
                "subject_id": 2,
                "target_age_group": "10-12",
                "content_url": "https://example.com/aula"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn cadastrar_aula_sem_materia_retorna_400() {
        // subject_id ausente falha já na desserialização do corpo
        let app =
            test::init_service(App::new().app_data(estado_teste()).service(cadastrar_aula)).await;

        let req = test::TestRequest::post()
            .uri("/api/education/lessons")
            .set_json(serde_json::json!({
                "title": "Redstone",
                "description": "Circuitos de redstone",
                "target_age_group": "10-12",
                "content_url": "https://example.com/aula"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
