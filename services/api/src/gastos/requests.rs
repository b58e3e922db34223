use chrono::NaiveDate;
use serde::Deserialize;

/// Every field is optional at the deserialization layer so that a missing
/// one produces the envelope's 400, not a rejected request body.
#[derive(Debug, Deserialize)]
pub struct CreateGastoRequest {
    pub descricao: Option<String>,
    pub valor: Option<f64>,
    pub categoria: Option<String>,
    pub data: Option<NaiveDate>,
    pub semana: Option<String>,
    pub observacoes: Option<String>,
}
