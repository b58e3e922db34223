use financeiro_db::checklist::models::ChecklistItem;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub success: bool,
    pub data: Vec<ChecklistItem>,
    pub message: String,
}
