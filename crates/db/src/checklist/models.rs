use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoriaChecklist {
    Revisao,
    Planejamento,
}

impl CategoriaChecklist {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revisao => "revisao",
            Self::Planejamento => "planejamento",
        }
    }
}

impl FromStr for CategoriaChecklist {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "revisao" => Ok(Self::Revisao),
            "planejamento" => Ok(Self::Planejamento),
            _ => Err(format!("unknown checklist categoria: {value}")),
        }
    }
}

/// A weekly reflection prompt. Completion state lives in the client only;
/// the server never stores a "done" flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub titulo: String,
    pub descricao: String,
    pub categoria: CategoriaChecklist,
    pub ordem: i64,
    pub ativo: bool,
}
