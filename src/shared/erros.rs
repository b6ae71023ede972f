// src/shared/erros.rs

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};

use super::shared_structs::MensagemResponse;

/// Código SQLSTATE do PostgreSQL para violação de restrição de unicidade.
const UNIQUE_VIOLATION: &str = "23505";

/// Verifica se o erro do sqlx é uma violação de unicidade (ex.: email duplicado).
pub fn violacao_unicidade(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
        _ => false,
    }
}

/// Traduz uma falha do banco em uma resposta 500 genérica.
/// O erro completo vai para o log; o cliente recebe apenas a mensagem.
pub fn erro_interno(mensagem: &str, e: &sqlx::Error) -> HttpResponse {
    log::error!("{} {:?}", mensagem, e);
    HttpResponse::InternalServerError().json(MensagemResponse::new(mensagem))
}

/// Configuração do extrator de JSON: corpo malformado vira 400 com o corpo
/// de erro padrão da API em vez da resposta textual do actix.
pub fn config_json() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let mensagem = format!("Corpo da requisição inválido: {}", err);
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(MensagemResponse::new(&mensagem)),
        )
        .into()
    })
}

/// Configuração do extrator de path: um id não numérico na rota vira 400.
/// Sem isso o actix responderia 404 para `/api/itens/abc`.
pub fn config_path() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(MensagemResponse::new("ID inválido na rota.")),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    /// Erro de banco fictício com código SQLSTATE configurável, para exercitar
    /// a tradução sem precisar de um PostgreSQL de pé.
    #[derive(Debug)]
    struct ErroBancoFicticio {
        codigo: &'static str,
    }

    impl fmt::Display for ErroBancoFicticio {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "erro de banco fictício ({})", self.codigo)
        }
    }

    impl StdError for ErroBancoFicticio {}

    impl sqlx::error::DatabaseError for ErroBancoFicticio {
        fn message(&self) -> &str {
            "erro de banco fictício"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.codigo))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn erro_com_codigo(codigo: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(ErroBancoFicticio { codigo }))
    }

    #[test]
    fn codigo_23505_e_violacao_de_unicidade() {
        assert!(violacao_unicidade(&erro_com_codigo("23505")));
    }

    #[test]
    fn outro_codigo_sqlstate_nao_e_violacao_de_unicidade() {
        // 23503 é violação de chave estrangeira
        assert!(!violacao_unicidade(&erro_com_codigo("23503")));
    }

    #[test]
    fn row_not_found_nao_e_violacao_de_unicidade() {
        assert!(!violacao_unicidade(&sqlx::Error::RowNotFound));
    }

    #[test]
    fn pool_timeout_nao_e_violacao_de_unicidade() {
        assert!(!violacao_unicidade(&sqlx::Error::PoolTimedOut));
    }
}
