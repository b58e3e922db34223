use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use financeiro_common::error::FinanceiroError;
use financeiro_db::gastos::models::{Gasto, NewGasto};
use financeiro_db::gastos::repositories::GastoRepository;

use crate::error::ApiError;
use crate::gastos::requests::CreateGastoRequest;
use crate::gastos::responses::{GastoCreated, GastoCreatedResponse, GastosData, GastosResponse};
use crate::AppState;

fn campos_obrigatorios() -> FinanceiroError {
    FinanceiroError::Validation(
        "Todos os campos obrigatórios devem ser preenchidos".to_string(),
    )
}

fn validate_create(body: CreateGastoRequest) -> Result<NewGasto, FinanceiroError> {
    let descricao = body
        .descricao
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(campos_obrigatorios)?;
    let valor = body.valor.ok_or_else(campos_obrigatorios)?;
    let categoria = body
        .categoria
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(campos_obrigatorios)?;
    let data = body.data.ok_or_else(campos_obrigatorios)?;
    let semana = body
        .semana
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(campos_obrigatorios)?;

    Ok(NewGasto {
        descricao,
        valor,
        categoria,
        data,
        semana,
        observacoes: body.observacoes,
    })
}

fn gastos_payload(gastos: Vec<Gasto>) -> GastosData {
    let total = gastos.iter().map(|g| g.valor).sum();
    let quantidade = gastos.len();
    GastosData {
        gastos,
        total,
        quantidade,
    }
}

pub async fn list_by_semana(
    State(state): State<AppState>,
    Path(semana): Path<String>,
) -> Result<Json<GastosResponse>, ApiError> {
    let gastos = state.gasto_repo.list_by_semana(&semana).await?;

    Ok(Json(GastosResponse {
        success: true,
        data: gastos_payload(gastos),
        message: format!("Gastos da semana {semana} carregados com sucesso!"),
    }))
}

pub async fn list_by_categoria(
    State(state): State<AppState>,
    Path(categoria): Path<String>,
) -> Result<Json<GastosResponse>, ApiError> {
    let gastos = state.gasto_repo.list_by_categoria(&categoria).await?;

    Ok(Json(GastosResponse {
        success: true,
        data: gastos_payload(gastos),
        message: format!("Gastos da categoria {categoria} carregados com sucesso!"),
    }))
}

pub async fn create_gasto(
    State(state): State<AppState>,
    Json(body): Json<CreateGastoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let gasto = validate_create(body)?;
    let id = state.gasto_repo.add(gasto).await?;

    Ok((
        StatusCode::CREATED,
        Json(GastoCreatedResponse {
            success: true,
            data: GastoCreated { id },
            message: "Gasto adicionado com sucesso!".to_string(),
        }),
    ))
}
