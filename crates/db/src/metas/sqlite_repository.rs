use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::metas::models::{Meta, NewMeta, TipoMeta};
use crate::metas::repositories::MetaRepository;
use financeiro_common::error::{FinanceiroError, FinanceiroResult};

#[derive(Clone)]
pub struct SqliteMetaRepository {
    pool: SqlitePool,
}

impl SqliteMetaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_meta_row(row: SqliteRow) -> FinanceiroResult<Meta> {
        let tipo_raw: String = row.get("tipo");
        let tipo = TipoMeta::from_str(&tipo_raw).map_err(FinanceiroError::Internal)?;

        Ok(Meta {
            id: row.get("id"),
            titulo: row.get("titulo"),
            valor_objetivo: row.get("valor_objetivo"),
            valor_atual: row.get("valor_atual"),
            tipo,
            data_criacao: row.get("data_criacao"),
            data_objetivo: row.get("data_objetivo"),
        })
    }
}

#[async_trait]
impl MetaRepository for SqliteMetaRepository {
    async fn add(&self, meta: NewMeta) -> FinanceiroResult<String> {
        let id = Uuid::new_v4().to_string();
        // Creation defaults are owned here: the balance starts at zero and
        // data_criacao is the insert-time UTC date.
        sqlx::query(
            "insert into metas
             (id, titulo, valor_objetivo, valor_atual, tipo, data_criacao, data_objetivo)
             values (?, ?, ?, 0, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&meta.titulo)
        .bind(meta.valor_objetivo)
        .bind(meta.tipo.as_str())
        .bind(Utc::now().date_naive())
        .bind(meta.data_objetivo)
        .execute(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn list(&self) -> FinanceiroResult<Vec<Meta>> {
        let rows = sqlx::query(
            "select id, titulo, valor_objetivo, valor_atual, tipo, data_criacao, data_objetivo
             from metas
             order by data_criacao desc",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        rows.into_iter().map(Self::map_meta_row).collect()
    }

    async fn update_progresso(&self, id: &str, valor_atual: f64) -> FinanceiroResult<()> {
        sqlx::query("update metas set valor_atual = ? where id = ?")
            .bind(valor_atual)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::NaiveDate;

    async fn test_repo() -> (SqliteMetaRepository, SqlitePool) {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        run_migrations(&pool).await.expect("migrations");
        (SqliteMetaRepository::new(pool.clone()), pool)
    }

    fn make_meta(titulo: &str) -> NewMeta {
        NewMeta {
            titulo: titulo.to_string(),
            valor_objetivo: 1000.0,
            tipo: TipoMeta::ReservaEmergencia,
            data_objetivo: None,
        }
    }

    async fn insert_meta_on(pool: &SqlitePool, titulo: &str, data_criacao: &str) {
        sqlx::query(
            "insert into metas (id, titulo, valor_objetivo, valor_atual, tipo, data_criacao)
             values (?, ?, 500, 0, 'outro', ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(titulo)
        .bind(data_criacao)
        .execute(pool)
        .await
        .expect("insert meta");
    }

    #[tokio::test]
    async fn add_forces_zero_balance_and_todays_creation_date() {
        let (repo, _pool) = test_repo().await;

        let id = repo.add(make_meta("Reserva")).await.expect("add");

        let metas = repo.list().await.expect("list");
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].id, id);
        assert_eq!(metas[0].valor_atual, 0.0);
        assert_eq!(metas[0].data_criacao, Utc::now().date_naive());
        assert_eq!(metas[0].data_objetivo, None);
    }

    #[tokio::test]
    async fn list_returns_newest_creation_first() {
        let (repo, pool) = test_repo().await;

        insert_meta_on(&pool, "antiga", "2023-06-01").await;
        insert_meta_on(&pool, "recente", "2024-02-01").await;
        insert_meta_on(&pool, "intermediária", "2023-11-20").await;

        let titulos: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|m| m.titulo)
            .collect();
        assert_eq!(titulos, vec!["recente", "intermediária", "antiga"]);
    }

    #[tokio::test]
    async fn update_progresso_overwrites_rather_than_accumulates() {
        let (repo, _pool) = test_repo().await;

        let id = repo.add(make_meta("Viagem")).await.expect("add");
        repo.update_progresso(&id, 200.0).await.expect("first");
        repo.update_progresso(&id, 150.0).await.expect("second");

        let metas = repo.list().await.expect("list");
        assert_eq!(metas[0].valor_atual, 150.0);
    }

    #[tokio::test]
    async fn update_progresso_of_an_unknown_id_is_a_no_op() {
        let (repo, _pool) = test_repo().await;

        repo.add(make_meta("Reserva")).await.expect("add");
        repo.update_progresso("não-existe", 300.0)
            .await
            .expect("update");

        let metas = repo.list().await.expect("list");
        assert_eq!(metas[0].valor_atual, 0.0);
    }

    #[tokio::test]
    async fn add_keeps_the_optional_target_date() {
        let (repo, _pool) = test_repo().await;

        let mut meta = make_meta("Viagem");
        meta.tipo = TipoMeta::Viagem;
        meta.data_objetivo = NaiveDate::from_ymd_opt(2025, 7, 1);
        repo.add(meta).await.expect("add");

        let metas = repo.list().await.expect("list");
        assert_eq!(metas[0].tipo, TipoMeta::Viagem);
        assert_eq!(metas[0].data_objetivo, NaiveDate::from_ymd_opt(2025, 7, 1));
    }
}
