// src/usuarios/usuario_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use bcrypt::{hash, DEFAULT_COST}; // Para hashing de senhas
use sqlx::{query, query_as, Row};

// Importa as structs do módulo de usuários
use super::usuario_structs::{
    validar_atualizacao_usuario, validar_novo_usuario, AtualizarUsuario, NovoUsuario,
    UsuarioCriado, UsuarioResponse,
};
use crate::shared::erros::{erro_interno, violacao_unicidade};
use crate::shared::shared_structs::MensagemResponse;
// Importa o AppState do módulo raiz (main.rs)
use crate::AppState;

/// Rota para cadastrar um novo usuário.
///
/// A senha é transformada em hash bcrypt antes do INSERT. A unicidade do
/// email fica por conta da constraint do banco: a violação (23505) vira 409.
#[post("/api/users")]
pub async fn cadastrar_usuario(
    data: web::Data<AppState>,
    novo_usuario: web::Json<NovoUsuario>,
) -> HttpResponse {
    let novo_usuario = novo_usuario.into_inner();

    if let Some(mensagem) = validar_novo_usuario(&novo_usuario) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let senha_hash = match hash(&novo_usuario.password, DEFAULT_COST) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Erro ao fazer hash da senha: {:?}", e);
            return HttpResponse::InternalServerError()
                .json(MensagemResponse::new("Erro interno do servidor ao criar usuário."));
        }
    };

    let result = query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id")
        .bind(&novo_usuario.name)
        .bind(&novo_usuario.email)
        .bind(&senha_hash)
        .fetch_one(&data.db_pool)
        .await;

    match result {
        Ok(row) => match row.try_get::<i32, &str>("id") {
            Ok(id) => HttpResponse::Created().json(UsuarioCriado {
                id,
                name: novo_usuario.name,
                email: novo_usuario.email,
            }),
            Err(e) => erro_interno("Erro interno do servidor ao criar usuário.", &e),
        },
        Err(e) => {
            if violacao_unicidade(&e) {
                log::error!("Email duplicado no cadastro de usuário: {:?}", e);
                return HttpResponse::Conflict()
                    .json(MensagemResponse::new("O email fornecido já está em uso."));
            }
            erro_interno("Erro interno do servidor ao criar usuário.", &e)
        }
    }
}

/// Rota para listar todos os usuários. A senha nunca aparece na resposta.
#[get("/api/users")]
pub async fn buscar_usuarios(data: web::Data<AppState>) -> impl Responder {
    let usuarios_result = query_as::<_, UsuarioResponse>(
        "SELECT id, name, email, created_at FROM users ORDER BY id",
    )
    .fetch_all(&data.db_pool)
    .await;

    match usuarios_result {
        Ok(usuarios) => HttpResponse::Ok().json(usuarios),
        Err(e) => erro_interno("Erro interno do servidor ao buscar usuários.", &e),
    }
}

/// Rota para atualizar nome e email de um usuário existente.
#[put("/api/users/{id}")]
pub async fn atualizar_usuario(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<AtualizarUsuario>,
) -> HttpResponse {
    let id = path.into_inner();
    let item = item.into_inner();

    if let Some(mensagem) = validar_atualizacao_usuario(&item) {
        return HttpResponse::BadRequest().json(MensagemResponse::new(mensagem));
    }

    let result = query("UPDATE users SET name = $1, email = $2 WHERE id = $3")
        .bind(&item.name)
        .bind(&item.email)
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::Ok().json(UsuarioCriado {
                    id,
                    name: item.name,
                    email: item.email,
                })
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Usuário não encontrado."))
            }
        }
        Err(e) => {
            if violacao_unicidade(&e) {
                log::error!("Email duplicado na atualização do usuário {}: {:?}", id, e);
                return HttpResponse::Conflict().json(MensagemResponse::new(
                    "O email fornecido já está em uso por outro usuário.",
                ));
            }
            erro_interno("Erro interno do servidor ao atualizar usuário.", &e)
        }
    }
}

/// Rota para deletar um usuário.
#[delete("/api/users/{id}")]
pub async fn deletar_usuario(data: web::Data<AppState>, path: web::Path<i32>) -> HttpResponse {
    let id = path.into_inner();
    let result = query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(res) => {
            if res.rows_affected() > 0 {
                HttpResponse::NoContent().finish()
            } else {
                HttpResponse::NotFound().json(MensagemResponse::new("Usuário não encontrado."))
            }
        }
        Err(e) => erro_interno("Erro interno do servidor ao deletar usuário.", &e),
    }
}
