use async_trait::async_trait;

use crate::gastos::models::{Gasto, NewGasto};
use financeiro_common::error::FinanceiroResult;

#[async_trait]
pub trait GastoRepository: Send + Sync {
    /// Insert a gasto and return its generated id.
    async fn add(&self, gasto: NewGasto) -> FinanceiroResult<String>;

    /// Gastos whose semana label equals `semana` exactly, newest date first.
    async fn list_by_semana(&self, semana: &str) -> FinanceiroResult<Vec<Gasto>>;

    /// Gastos in a categoria, newest date first.
    async fn list_by_categoria(&self, categoria: &str) -> FinanceiroResult<Vec<Gasto>>;
}
