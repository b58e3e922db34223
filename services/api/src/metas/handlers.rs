use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use financeiro_common::error::FinanceiroError;
use financeiro_db::metas::models::NewMeta;
use financeiro_db::metas::repositories::MetaRepository;

use crate::error::ApiError;
use crate::metas::requests::{CreateMetaRequest, UpdateProgressoRequest};
use crate::metas::responses::{
    MetaCreated, MetaCreatedResponse, MetasResponse, ProgressoUpdatedResponse,
};
use crate::AppState;

fn validate_create(body: CreateMetaRequest) -> Result<NewMeta, FinanceiroError> {
    let obrigatorios = || {
        FinanceiroError::Validation("Título, valor objetivo e tipo são obrigatórios".to_string())
    };

    let titulo = body
        .titulo
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(obrigatorios)?;
    let valor_objetivo = body.valor_objetivo.ok_or_else(obrigatorios)?;
    let tipo = body.tipo.ok_or_else(obrigatorios)?;

    Ok(NewMeta {
        titulo,
        valor_objetivo,
        tipo,
        data_objetivo: body.data_objetivo,
    })
}

pub async fn list_metas(State(state): State<AppState>) -> Result<Json<MetasResponse>, ApiError> {
    let data = state.meta_repo.list().await?;

    Ok(Json(MetasResponse {
        success: true,
        data,
        message: "Metas carregadas com sucesso!".to_string(),
    }))
}

pub async fn create_meta(
    State(state): State<AppState>,
    Json(body): Json<CreateMetaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let meta = validate_create(body)?;
    let id = state.meta_repo.add(meta).await?;

    Ok((
        StatusCode::CREATED,
        Json(MetaCreatedResponse {
            success: true,
            data: MetaCreated { id },
            message: "Meta criada com sucesso!".to_string(),
        }),
    ))
}

pub async fn update_progresso(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateProgressoRequest>,
) -> Result<Json<ProgressoUpdatedResponse>, ApiError> {
    let valor_atual = body
        .valor_atual
        .ok_or_else(|| FinanceiroError::Validation("Valor atual é obrigatório".to_string()))?;

    state.meta_repo.update_progresso(&id, valor_atual).await?;

    Ok(Json(ProgressoUpdatedResponse {
        success: true,
        message: "Progresso da meta atualizado com sucesso!".to_string(),
    }))
}
