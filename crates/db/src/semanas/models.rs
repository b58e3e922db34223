use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusSemana {
    Ativa,
    Concluida,
}

impl StatusSemana {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ativa => "ativa",
            Self::Concluida => "concluida",
        }
    }
}

impl FromStr for StatusSemana {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ativa" => Ok(Self::Ativa),
            "concluida" => Ok(Self::Concluida),
            _ => Err(format!("unknown semana status: {value}")),
        }
    }
}

/// Per-week spending limits and savings target. Persisted but reached by
/// no route; the web client tracks weeks with free-text labels instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanaFinanceira {
    pub id: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub limite_lazer: f64,
    pub limite_compras: f64,
    pub meta_economia: f64,
    pub status: StatusSemana,
}

#[derive(Debug, Clone)]
pub struct NewSemanaFinanceira {
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub limite_lazer: f64,
    pub limite_compras: f64,
    pub meta_economia: f64,
    pub status: StatusSemana,
}
