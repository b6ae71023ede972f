// src/skins/skin_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber os dados de uma skin nas requisições POST/PUT.
/// A API expõe o campo como `imageUrl`; internamente usamos snake_case.
#[derive(Deserialize)]
pub struct NovaSkin {
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub rarity: String,
    pub price: BigDecimal,
}

/// Estrutura que representa uma skin no banco de dados.
/// As queries usam `"imageUrl" AS image_url` para casar com o campo.
#[derive(Serialize, FromRow)]
pub struct Skin {
    pub id: i32,
    pub name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub rarity: String,
    // BigDecimal aceita número ou string na entrada, mas serializa como
    // string JSON ("10") para não perder precisão na saída
    pub price: BigDecimal,
}

/// Valida os campos obrigatórios de uma skin antes de tocar o banco.
pub fn validar_skin(skin: &NovaSkin) -> Option<&'static str> {
    if skin.name.is_empty() || skin.image_url.is_empty() || skin.rarity.is_empty() {
        return Some("Todos os campos (nome, imageUrl, raridade, preço) são obrigatórios.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn skin_completa_e_valida() {
        let skin = NovaSkin {
            name: "Fox".to_string(),
            image_url: "https://example.com/fox.png".to_string(),
            rarity: "Raro".to_string(),
            price: BigDecimal::from_str("10").unwrap(),
        };
        assert!(validar_skin(&skin).is_none());
    }

    #[test]
    fn skin_sem_image_url_e_invalida() {
        let skin = NovaSkin {
            name: "Fox".to_string(),
            image_url: String::new(),
            rarity: "Raro".to_string(),
            price: BigDecimal::from_str("10").unwrap(),
        };
        assert!(validar_skin(&skin).is_some());
    }

    #[test]
    fn preco_serializa_como_string_json() {
        let skin = Skin {
            id: 1,
            name: "Fox".to_string(),
            image_url: "u".to_string(),
            rarity: "Raro".to_string(),
            price: BigDecimal::from_str("10").unwrap(),
        };
        let json = serde_json::to_value(&skin).unwrap();
        assert_eq!(json.get("price").unwrap(), &serde_json::json!("10"));
    }

    #[test]
    fn payload_aceita_preco_numerico_e_expoe_image_url_como_camel_case() {
        let skin: NovaSkin = serde_json::from_value(serde_json::json!({
            "name": "Fox",
            "imageUrl": "u",
            "rarity": "Raro",
            "price": 10
        }))
        .unwrap();
        assert_eq!(skin.image_url, "u");
        assert_eq!(skin.price, BigDecimal::from_str("10").unwrap());
    }
}
