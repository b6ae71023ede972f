// src/relatorios/relatorio_router.rs

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::query_as;

// Importa as structs definidas no módulo `relatorio_structs`
use super::relatorio_structs::{DownloadUsuario, RelatorioItem};
use crate::shared::erros::erro_interno;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para o relatório de itens do Dungeons com suas categorias.
#[get("/api/relatorio/itens")]
pub async fn relatorio_itens(data: web::Data<AppState>) -> impl Responder {
    let relatorio_result = query_as::<_, RelatorioItem>(
        "SELECT i.id, i.nome, i.poder, i.raridade, c.nome AS nome_categoria \
         FROM itens_d AS i INNER JOIN categorias_d AS c ON i.categoria_id = c.id \
         ORDER BY i.id",
    )
    .fetch_all(&data.db_pool)
    .await;

    match relatorio_result {
        Ok(linhas) => HttpResponse::Ok().json(linhas),
        Err(e) => erro_interno("Erro interno do servidor ao gerar relatório do Dungeons.", &e),
    }
}

/// Rota para o relatório de downloads de produtos por usuário,
/// do download mais recente para o mais antigo.
#[get("/api/reports/user-downloads")]
pub async fn relatorio_downloads(data: web::Data<AppState>) -> impl Responder {
    let relatorio_result = query_as::<_, DownloadUsuario>(
        "SELECT u.id AS user_id, u.name AS user_name, u.email AS user_email, \
                p.id AS product_id, p.name AS product_name, pt.name AS product_type, \
                ud.download_date \
         FROM user_downloads ud \
         INNER JOIN users u ON ud.user_id = u.id \
         INNER JOIN products p ON ud.product_id = p.id \
         INNER JOIN product_types pt ON p.type_id = pt.id \
         ORDER BY ud.download_date DESC",
    )
    .fetch_all(&data.db_pool)
    .await;

    match relatorio_result {
        Ok(linhas) => HttpResponse::Ok().json(linhas),
        Err(e) => erro_interno("Erro interno do servidor ao gerar relatório de downloads.", &e),
    }
}
