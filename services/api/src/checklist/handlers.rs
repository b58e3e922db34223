use axum::extract::State;
use axum::Json;
use financeiro_db::checklist::repositories::ChecklistRepository;

use crate::checklist::responses::ChecklistResponse;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    let data = state.checklist_repo.list_active().await?;

    Ok(Json(ChecklistResponse {
        success: true,
        data,
        message: "Checklist carregado com sucesso!".to_string(),
    }))
}
