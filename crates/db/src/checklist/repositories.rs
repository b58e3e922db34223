use async_trait::async_trait;

use crate::checklist::models::ChecklistItem;
use financeiro_common::error::FinanceiroResult;

#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Active items, ordered by their manual sequence number ascending.
    async fn list_active(&self) -> FinanceiroResult<Vec<ChecklistItem>>;
}
