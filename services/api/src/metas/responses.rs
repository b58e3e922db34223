use financeiro_db::metas::models::Meta;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MetasResponse {
    pub success: bool,
    pub data: Vec<Meta>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MetaCreatedResponse {
    pub success: bool,
    pub data: MetaCreated,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MetaCreated {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ProgressoUpdatedResponse {
    pub success: bool,
    pub message: String,
}
