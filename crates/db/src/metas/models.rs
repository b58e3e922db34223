use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipoMeta {
    ReservaEmergencia,
    Viagem,
    Outro,
}

impl TipoMeta {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReservaEmergencia => "reserva_emergencia",
            Self::Viagem => "viagem",
            Self::Outro => "outro",
        }
    }
}

impl FromStr for TipoMeta {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "reserva_emergencia" => Ok(Self::ReservaEmergencia),
            "viagem" => Ok(Self::Viagem),
            "outro" => Ok(Self::Outro),
            _ => Err(format!("unknown meta tipo: {value}")),
        }
    }
}

/// A savings target with a running balance. `valor_atual` is only ever
/// overwritten wholesale, never incremented.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    pub id: String,
    pub titulo: String,
    pub valor_objetivo: f64,
    pub valor_atual: f64,
    pub tipo: TipoMeta,
    pub data_criacao: NaiveDate,
    pub data_objetivo: Option<NaiveDate>,
}

impl Meta {
    /// Fraction of the target reached, as a percentage capped at 100.
    ///
    /// A zero target is not rejected anywhere upstream; the division then
    /// yields NaN or infinity and `f64::min` maps both to the cap.
    pub fn progresso_pct(&self) -> f64 {
        (self.valor_atual / self.valor_objetivo * 100.0).min(100.0)
    }
}

/// Client-supplied fields for a new meta. The balance always starts at
/// zero and the creation date is stamped at insert time.
#[derive(Debug, Clone)]
pub struct NewMeta {
    pub titulo: String,
    pub valor_objetivo: f64,
    pub tipo: TipoMeta,
    pub data_objetivo: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_meta(valor_atual: f64, valor_objetivo: f64) -> Meta {
        Meta {
            id: "meta-1".to_string(),
            titulo: "Reserva".to_string(),
            valor_objetivo,
            valor_atual,
            tipo: TipoMeta::ReservaEmergencia,
            data_criacao: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            data_objetivo: None,
        }
    }

    #[test]
    fn progresso_is_the_plain_percentage_below_target() {
        assert_eq!(make_meta(50.0, 100.0).progresso_pct(), 50.0);
    }

    #[test]
    fn progresso_caps_at_one_hundred_past_target() {
        assert_eq!(make_meta(150.0, 100.0).progresso_pct(), 100.0);
    }

    #[test]
    fn progresso_with_a_zero_target_caps_at_one_hundred() {
        // 0/0 is NaN and x/0 is infinite; min() collapses both to the cap.
        assert_eq!(make_meta(0.0, 0.0).progresso_pct(), 100.0);
        assert_eq!(make_meta(10.0, 0.0).progresso_pct(), 100.0);
    }

    #[test]
    fn tipo_round_trips_through_strings() {
        assert_eq!(
            TipoMeta::from_str("reserva_emergencia"),
            Ok(TipoMeta::ReservaEmergencia)
        );
        assert_eq!(TipoMeta::Viagem.as_str(), "viagem");
        assert!(TipoMeta::from_str("aposentadoria").is_err());
    }
}
