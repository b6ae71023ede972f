// src/shared/shared_structs.rs

use serde::Serialize;

/// Corpo padrão das respostas de erro da API.
/// Toda falha visível ao cliente é um objeto JSON com apenas o campo `message`;
/// o erro original fica somente no log do servidor.
#[derive(Serialize)]
pub struct MensagemResponse {
    pub message: String,
}

impl MensagemResponse {
    pub fn new(message: &str) -> Self {
        MensagemResponse { message: message.to_string() }
    }
}

/// Envelope `{ "data": ... }` usado pelas rotas de educação.
/// O frontend do Education espera as listagens dentro da chave `data`;
/// as demais rotas retornam o JSON diretamente.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub data: T,
}
