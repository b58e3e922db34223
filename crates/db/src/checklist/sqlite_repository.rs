use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::checklist::models::{CategoriaChecklist, ChecklistItem};
use crate::checklist::repositories::ChecklistRepository;
use financeiro_common::error::{FinanceiroError, FinanceiroResult};

#[derive(Clone)]
pub struct SqliteChecklistRepository {
    pool: SqlitePool,
}

impl SqliteChecklistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_item_row(row: SqliteRow) -> FinanceiroResult<ChecklistItem> {
        let categoria_raw: String = row.get("categoria");
        let categoria =
            CategoriaChecklist::from_str(&categoria_raw).map_err(FinanceiroError::Internal)?;

        Ok(ChecklistItem {
            id: row.get("id"),
            titulo: row.get("titulo"),
            descricao: row.get("descricao"),
            categoria,
            ordem: row.get("ordem"),
            ativo: row.get("ativo"),
        })
    }
}

#[async_trait]
impl ChecklistRepository for SqliteChecklistRepository {
    async fn list_active(&self) -> FinanceiroResult<Vec<ChecklistItem>> {
        let rows = sqlx::query(
            "select id, titulo, descricao, categoria, ordem, ativo
             from checklist_items
             where ativo = 1
             order by ordem",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        rows.into_iter().map(Self::map_item_row).collect()
    }
}
