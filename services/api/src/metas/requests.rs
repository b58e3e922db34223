use chrono::NaiveDate;
use financeiro_db::metas::models::TipoMeta;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMetaRequest {
    pub titulo: Option<String>,
    pub valor_objetivo: Option<f64>,
    pub tipo: Option<TipoMeta>,
    pub data_objetivo: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressoRequest {
    pub valor_atual: Option<f64>,
}
