// src/educacao/educacao_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura que representa uma matéria. Somente leitura nesta API.
#[derive(Serialize, FromRow)]
pub struct Materia {
    pub id: i32,
    pub name: String,
}

/// Estrutura que representa uma aula no banco de dados.
/// Também serve de resposta para criação/atualização (payload ecoado com id).
#[derive(Serialize, FromRow)]
pub struct Aula {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub subject_id: i32,
    pub target_age_group: String,
    pub content_url: String,
}

/// Estrutura para receber os dados de uma aula nas requisições POST/PUT.
#[derive(Deserialize)]
pub struct NovaAula {
    pub title: String,
    pub description: String,
    pub subject_id: i32,
    pub target_age_group: String,
    pub content_url: String,
}

/// Filtros opcionais da listagem de aulas.
#[derive(Deserialize)]
pub struct FiltroAulas {
    pub title: Option<String>,
    pub subject_id: Option<i32>,
}

/// Linha do relatório de aulas por matéria (JOIN com `subjects`).
#[derive(Serialize, FromRow)]
pub struct RelatorioAula {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub target_age_group: String,
    pub subject_name: String,
}

/// Valida os campos obrigatórios de uma aula antes de tocar o banco.
pub fn validar_aula(aula: &NovaAula) -> Option<&'static str> {
    if aula.title.is_empty() {
        return Some("Título e matéria são obrigatórios.");
    }
    None
}

/// Monta a consulta da listagem de aulas. Os valores dos filtros são
/// bindados depois, na mesma ordem em que os predicados são acrescentados
/// aqui (primeiro `title`, depois `subject_id`).
pub fn montar_consulta_aulas(filtro: &FiltroAulas) -> String {
    let mut sql = String::from(
        "SELECT id, title, description, subject_id, target_age_group, content_url FROM lessons",
    );
    let mut clausulas: Vec<String> = Vec::new();

    if filtro.title.is_some() {
        clausulas.push(format!("title LIKE ${}", clausulas.len() + 1));
    }
    if filtro.subject_id.is_some() {
        clausulas.push(format!("subject_id = ${}", clausulas.len() + 1));
    }

    if !clausulas.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clausulas.join(" AND "));
    }
    sql.push_str(" ORDER BY title");

    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtro(title: Option<&str>, subject_id: Option<i32>) -> FiltroAulas {
        FiltroAulas {
            title: title.map(String::from),
            subject_id,
        }
    }

    #[test]
    fn sem_filtros_lista_tudo_ordenado_por_titulo() {
        let sql = montar_consulta_aulas(&filtro(None, None));
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY title"));
    }

    #[test]
    fn filtro_de_titulo_vira_like() {
        let sql = montar_consulta_aulas(&filtro(Some("redstone"), None));
        assert!(sql.contains("WHERE title LIKE $1"));
    }

    #[test]
    fn filtro_de_materia_vira_igualdade() {
        let sql = montar_consulta_aulas(&filtro(None, Some(2)));
        assert!(sql.contains("WHERE subject_id = $1"));
    }

    #[test]
    fn filtros_combinados_mantem_a_ordem_dos_placeholders() {
        let sql = montar_consulta_aulas(&filtro(Some("redstone"), Some(2)));
        assert!(sql.contains("WHERE title LIKE $1 AND subject_id = $2"));
    }

    #[test]
    fn aula_sem_titulo_e_invalida() {
        let aula = NovaAula {
            title: String::new(),
            description: "Circuitos básicos".to_string(),
            subject_id: 2,
            target_age_group: "10-12".to_string(),
            content_url: "https://example.com/aula".to_string(),
        };
        assert!(validar_aula(&aula).is_some());
    }
}
