// src/banners/banner_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber os dados de um banner nas requisições POST/PUT.
/// O campo `type` é palavra reservada em Rust, então usamos `tipo` com rename.
#[derive(Deserialize)]
pub struct NovoBanner {
    #[serde(rename = "type")]
    pub tipo: String,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// Estrutura que representa um banner como ele está gravado no banco.
/// A coluna `images` guarda o array de URLs serializado como string JSON;
/// as queries usam `type AS tipo` para casar com o nome do campo.
#[derive(FromRow)]
pub struct BannerRow {
    pub id: i32,
    pub tipo: String,
    pub title: String,
    pub description: Option<String>,
    pub images: String,
}

/// Estrutura para a resposta da API, com `images` já desserializado
/// de volta para a sequência ordenada de URLs.
#[derive(Serialize)]
pub struct BannerResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub tipo: String,
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

impl BannerRow {
    /// Converte a linha do banco em resposta da API, desserializando `images`.
    pub fn em_resposta(self) -> Result<BannerResponse, serde_json::Error> {
        let images: Vec<String> = serde_json::from_str(&self.images)?;
        Ok(BannerResponse {
            id: self.id,
            tipo: self.tipo,
            title: self.title,
            description: self.description,
            images,
        })
    }
}

/// Valida os campos obrigatórios de um banner antes de tocar o banco.
/// Retorna a mensagem de erro quando a validação falha.
pub fn validar_banner(banner: &NovoBanner) -> Option<&'static str> {
    if banner.tipo.is_empty() || banner.title.is_empty() || banner.images.is_empty() {
        return Some("Tipo, título e imagens são obrigatórios e imagens deve ser um array não vazio.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner(tipo: &str, title: &str, images: Vec<&str>) -> NovoBanner {
        NovoBanner {
            tipo: tipo.to_string(),
            title: title.to_string(),
            description: None,
            images: images.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn banner_completo_e_valido() {
        assert!(validar_banner(&banner("promo", "Lançamento", vec!["a.png"])).is_none());
    }

    #[test]
    fn banner_sem_imagens_e_invalido() {
        assert!(validar_banner(&banner("promo", "Lançamento", vec![])).is_some());
    }

    #[test]
    fn banner_com_titulo_vazio_e_invalido() {
        assert!(validar_banner(&banner("promo", "", vec!["a.png"])).is_some());
    }

    #[test]
    fn images_preserva_a_ordem_na_ida_e_na_volta() {
        let urls = vec!["c.png".to_string(), "a.png".to_string(), "b.png".to_string()];
        let serializado = serde_json::to_string(&urls).unwrap();
        let row = BannerRow {
            id: 1,
            tipo: "promo".to_string(),
            title: "t".to_string(),
            description: None,
            images: serializado,
        };
        let resposta = row.em_resposta().unwrap();
        assert_eq!(resposta.images, urls);
    }

    #[test]
    fn images_corrompido_no_banco_vira_erro() {
        let row = BannerRow {
            id: 1,
            tipo: "promo".to_string(),
            title: "t".to_string(),
            description: None,
            images: "nao é json".to_string(),
        };
        assert!(row.em_resposta().is_err());
    }
}
