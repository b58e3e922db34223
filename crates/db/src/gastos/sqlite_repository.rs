use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::gastos::models::{Gasto, NewGasto};
use crate::gastos::repositories::GastoRepository;
use financeiro_common::error::{FinanceiroError, FinanceiroResult};

#[derive(Clone)]
pub struct SqliteGastoRepository {
    pool: SqlitePool,
}

impl SqliteGastoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_gasto_row(row: SqliteRow) -> Gasto {
        Gasto {
            id: row.get("id"),
            descricao: row.get("descricao"),
            valor: row.get("valor"),
            categoria: row.get("categoria"),
            data: row.get("data"),
            semana: row.get("semana"),
            observacoes: row.get("observacoes"),
        }
    }
}

#[async_trait]
impl GastoRepository for SqliteGastoRepository {
    async fn add(&self, gasto: NewGasto) -> FinanceiroResult<String> {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "insert into gastos (id, descricao, valor, categoria, data, semana, observacoes)
             values (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&gasto.descricao)
        .bind(gasto.valor)
        .bind(&gasto.categoria)
        .bind(gasto.data)
        .bind(&gasto.semana)
        .bind(&gasto.observacoes)
        .execute(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn list_by_semana(&self, semana: &str) -> FinanceiroResult<Vec<Gasto>> {
        let rows = sqlx::query(
            "select id, descricao, valor, categoria, data, semana, observacoes
             from gastos
             where semana = ?
             order by data desc",
        )
        .bind(semana)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_gasto_row).collect())
    }

    async fn list_by_categoria(&self, categoria: &str) -> FinanceiroResult<Vec<Gasto>> {
        let rows = sqlx::query(
            "select id, descricao, valor, categoria, data, semana, observacoes
             from gastos
             where categoria = ?
             order by data desc",
        )
        .bind(categoria)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Self::map_gasto_row).collect())
    }
}
