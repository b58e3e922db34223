use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated spending record. `semana` is a free-text label chosen by
/// the client ("2024-W05", "Semana 1", ...) and is only ever compared by
/// exact string match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gasto {
    pub id: String,
    pub descricao: String,
    pub valor: f64,
    pub categoria: String,
    pub data: NaiveDate,
    pub semana: String,
    pub observacoes: Option<String>,
}

/// Fields supplied by the client when logging a gasto; the id is assigned
/// at insert time.
#[derive(Debug, Clone)]
pub struct NewGasto {
    pub descricao: String,
    pub valor: f64,
    pub categoria: String,
    pub data: NaiveDate,
    pub semana: String,
    pub observacoes: Option<String>,
}
