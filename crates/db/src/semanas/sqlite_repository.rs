use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::semanas::models::{NewSemanaFinanceira, SemanaFinanceira, StatusSemana};
use crate::semanas::repositories::SemanaRepository;
use financeiro_common::error::{FinanceiroError, FinanceiroResult};

#[derive(Clone)]
pub struct SqliteSemanaRepository {
    pool: SqlitePool,
}

impl SqliteSemanaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_semana_row(row: SqliteRow) -> FinanceiroResult<SemanaFinanceira> {
        let status_raw: String = row.get("status");
        let status = StatusSemana::from_str(&status_raw).map_err(FinanceiroError::Internal)?;

        Ok(SemanaFinanceira {
            id: row.get("id"),
            data_inicio: row.get("data_inicio"),
            data_fim: row.get("data_fim"),
            limite_lazer: row.get("limite_lazer"),
            limite_compras: row.get("limite_compras"),
            meta_economia: row.get("meta_economia"),
            status,
        })
    }
}

#[async_trait]
impl SemanaRepository for SqliteSemanaRepository {
    async fn add(&self, semana: NewSemanaFinanceira) -> FinanceiroResult<String> {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "insert into semanas_financeiras
             (id, data_inicio, data_fim, limite_lazer, limite_compras, meta_economia, status)
             values (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(semana.data_inicio)
        .bind(semana.data_fim)
        .bind(semana.limite_lazer)
        .bind(semana.limite_compras)
        .bind(semana.meta_economia)
        .bind(semana.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn get_ativa(&self) -> FinanceiroResult<Option<SemanaFinanceira>> {
        let row = sqlx::query(
            "select id, data_inicio, data_fim, limite_lazer, limite_compras, meta_economia, status
             from semanas_financeiras
             where status = 'ativa'
             order by data_inicio desc
             limit 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        row.map(Self::map_semana_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::NaiveDate;

    async fn test_repo() -> SqliteSemanaRepository {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        run_migrations(&pool).await.expect("migrations");
        SqliteSemanaRepository::new(pool)
    }

    fn make_semana(inicio: &str, status: StatusSemana) -> NewSemanaFinanceira {
        let data_inicio: NaiveDate = inicio.parse().expect("valid date");
        NewSemanaFinanceira {
            data_inicio,
            data_fim: data_inicio + chrono::Days::new(6),
            limite_lazer: 150.0,
            limite_compras: 300.0,
            meta_economia: 200.0,
            status,
        }
    }

    #[tokio::test]
    async fn get_ativa_returns_none_on_an_empty_table() {
        let repo = test_repo().await;
        assert!(repo.get_ativa().await.expect("query").is_none());
    }

    #[tokio::test]
    async fn get_ativa_picks_the_most_recent_active_week() {
        let repo = test_repo().await;

        repo.add(make_semana("2024-01-01", StatusSemana::Ativa))
            .await
            .expect("add");
        let recente = repo
            .add(make_semana("2024-02-05", StatusSemana::Ativa))
            .await
            .expect("add");
        repo.add(make_semana("2024-02-12", StatusSemana::Concluida))
            .await
            .expect("add");

        let ativa = repo.get_ativa().await.expect("query").expect("some row");
        assert_eq!(ativa.id, recente);
        assert_eq!(ativa.status, StatusSemana::Ativa);
        assert_eq!(ativa.limite_lazer, 150.0);
    }
}
