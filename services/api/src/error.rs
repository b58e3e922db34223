use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use financeiro_common::error::FinanceiroError;

pub struct ApiError(pub FinanceiroError);

impl From<FinanceiroError> for ApiError {
    fn from(err: FinanceiroError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FinanceiroError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => {
                tracing::error!(error = %other, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno do servidor".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "success": false, "message": message });
        (status, Json(body)).into_response()
    }
}
