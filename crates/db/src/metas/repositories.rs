use async_trait::async_trait;

use crate::metas::models::{Meta, NewMeta};
use financeiro_common::error::FinanceiroResult;

#[async_trait]
pub trait MetaRepository: Send + Sync {
    /// Insert a meta with `valor_atual` 0 and `data_criacao` set to today,
    /// whatever the caller intended. Returns the generated id.
    async fn add(&self, meta: NewMeta) -> FinanceiroResult<String>;

    /// All metas, newest creation date first.
    async fn list(&self) -> FinanceiroResult<Vec<Meta>>;

    /// Overwrite the stored balance. Ids that match no row are not an
    /// error; nothing changes.
    async fn update_progresso(&self, id: &str, valor_atual: f64) -> FinanceiroResult<()>;
}
