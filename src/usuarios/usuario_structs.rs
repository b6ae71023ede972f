// src/usuarios/usuario_structs.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber os dados de um novo usuário na requisição POST.
/// A senha chega em texto claro e é armazenada como hash bcrypt.
#[derive(Deserialize)]
pub struct NovoUsuario {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Estrutura para receber os dados de atualização de um usuário (PUT).
/// A senha não é atualizável por esta rota.
#[derive(Deserialize)]
pub struct AtualizarUsuario {
    pub name: String,
    pub email: String,
}

/// Estrutura da listagem de usuários. A senha nunca é serializada.
#[derive(Serialize, FromRow)]
pub struct UsuarioResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Estrutura da resposta de criação/atualização de usuário.
#[derive(Serialize)]
pub struct UsuarioCriado {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Valida os campos obrigatórios de um novo usuário.
pub fn validar_novo_usuario(usuario: &NovoUsuario) -> Option<&'static str> {
    if usuario.name.is_empty() || usuario.email.is_empty() || usuario.password.is_empty() {
        return Some("Nome, email e senha são obrigatórios.");
    }
    None
}

/// Valida os campos obrigatórios de uma atualização de usuário.
pub fn validar_atualizacao_usuario(usuario: &AtualizarUsuario) -> Option<&'static str> {
    if usuario.name.is_empty() || usuario.email.is_empty() {
        return Some("Nome e email são obrigatórios.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn novo_usuario_sem_senha_e_invalido() {
        let usuario = NovoUsuario {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password: String::new(),
        };
        assert!(validar_novo_usuario(&usuario).is_some());
    }

    #[test]
    fn novo_usuario_completo_e_valido() {
        let usuario = NovoUsuario {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            password: "segredo".to_string(),
        };
        assert!(validar_novo_usuario(&usuario).is_none());
    }

    #[test]
    fn atualizacao_sem_email_e_invalida() {
        let usuario = AtualizarUsuario {
            name: "Alex".to_string(),
            email: String::new(),
        };
        assert!(validar_atualizacao_usuario(&usuario).is_some());
    }

    #[test]
    fn resposta_de_usuario_nao_contem_senha() {
        let resposta = UsuarioCriado {
            id: 7,
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
        };
        let json = serde_json::to_value(&resposta).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json.get("email").unwrap(), "alex@example.com");
    }
}
