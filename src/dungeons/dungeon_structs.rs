// src/dungeons/dungeon_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raridades aceitas para um item do Dungeons.
pub const RARIDADES: [&str; 3] = ["Comum", "Raro", "Único"];

/// Estrutura que representa uma categoria de itens do Dungeons.
/// Somente leitura nesta API.
#[derive(Serialize, FromRow)]
pub struct CategoriaDungeon {
    pub id: i32,
    pub nome: String,
}

/// Estrutura que representa um item do Dungeons no banco de dados.
#[derive(Serialize, FromRow)]
pub struct ItemDungeon {
    pub id: i32,
    pub nome: String,
    pub poder: i32,
    pub raridade: String,
    pub categoria_id: i32,
}

/// Estrutura para receber os dados de um item nas requisições POST/PUT.
#[derive(Deserialize)]
pub struct NovoItem {
    pub nome: String,
    pub poder: i32,
    pub raridade: String,
    pub categoria_id: i32,
}

/// Filtro opcional da listagem de itens (igualdade exata de raridade).
#[derive(Deserialize)]
pub struct FiltroItens {
    pub raridade: Option<String>,
}

/// Valida os campos obrigatórios de um item antes de tocar o banco.
pub fn validar_item(item: &NovoItem) -> Option<&'static str> {
    if item.nome.is_empty() {
        return Some("Nome do item é obrigatório.");
    }
    if !RARIDADES.contains(&item.raridade.as_str()) {
        return Some("Raridade inválida. Use Comum, Raro ou Único.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(nome: &str, raridade: &str) -> NovoItem {
        NovoItem {
            nome: nome.to_string(),
            poder: 42,
            raridade: raridade.to_string(),
            categoria_id: 1,
        }
    }

    #[test]
    fn item_com_raridade_conhecida_e_valido() {
        assert!(validar_item(&item("Espada", "Comum")).is_none());
        assert!(validar_item(&item("Arco", "Raro")).is_none());
        assert!(validar_item(&item("Martelo", "Único")).is_none());
    }

    #[test]
    fn raridade_desconhecida_e_rejeitada() {
        assert!(validar_item(&item("Espada", "Lendário")).is_some());
    }

    #[test]
    fn raridade_compara_caso_sensivel() {
        assert!(validar_item(&item("Espada", "comum")).is_some());
    }

    #[test]
    fn nome_vazio_e_rejeitado() {
        assert!(validar_item(&item("", "Comum")).is_some());
    }
}
