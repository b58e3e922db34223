use async_trait::async_trait;

use crate::semanas::models::{NewSemanaFinanceira, SemanaFinanceira};
use financeiro_common::error::FinanceiroResult;

#[async_trait]
pub trait SemanaRepository: Send + Sync {
    /// Insert a semana financeira and return its generated id.
    async fn add(&self, semana: NewSemanaFinanceira) -> FinanceiroResult<String>;

    /// The most recently started semana still marked ativa, if any.
    async fn get_ativa(&self) -> FinanceiroResult<Option<SemanaFinanceira>>;
}
