use financeiro_db::gastos::models::Gasto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GastosResponse {
    pub success: bool,
    pub data: GastosData,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GastosData {
    pub gastos: Vec<Gasto>,
    pub total: f64,
    pub quantidade: usize,
}

#[derive(Debug, Serialize)]
pub struct GastoCreatedResponse {
    pub success: bool,
    pub data: GastoCreated,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GastoCreated {
    pub id: String,
}
