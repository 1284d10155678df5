use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use super::monthly::{Metric, MonthlyRecord};

/// One energy-balance measurement for a subsystem. Generation fields are
/// nullable in the source data; load and interchange are always present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyRecord {
    pub id_subsistema: String,
    #[serde(default)]
    pub subsistema_nome: Option<String>,
    pub data: NaiveDate,
    #[serde(default)]
    pub hora: Option<NaiveTime>,
    #[serde(default)]
    pub geracao_eolica: Option<f64>,
    #[serde(default)]
    pub geracao_termica: Option<f64>,
    #[serde(default)]
    pub geracao_solar: Option<f64>,
    #[serde(default)]
    pub geracao_hidraulica: Option<f64>,
    pub valor_carga: f64,
    pub valor_intercambio: f64,
}

impl MonthlyRecord for EnergyRecord {
    const METRICS: &'static [Metric<Self>] = &[
        Metric {
            label: "Geração Eólica",
            color: "#8884d8",
            value: |r| r.geracao_eolica.unwrap_or(f64::NAN),
        },
        Metric {
            label: "Geração Térmica",
            color: "#82ca9d",
            value: |r| r.geracao_termica.unwrap_or(f64::NAN),
        },
        Metric {
            label: "Geração Solar",
            color: "#ffc658",
            value: |r| r.geracao_solar.unwrap_or(f64::NAN),
        },
        Metric {
            label: "Geração Hidráulica",
            color: "#a4de6c",
            value: |r| r.geracao_hidraulica.unwrap_or(f64::NAN),
        },
    ];

    fn date(&self) -> NaiveDate {
        self.data
    }
}

/// One full response from `/balanco-energia/horario`, replaced wholesale on
/// every fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyPage {
    pub total_registros: u32,
    pub data_inicial: NaiveDate,
    pub data_final: NaiveDate,
    pub dados: Vec<EnergyRecord>,
}
