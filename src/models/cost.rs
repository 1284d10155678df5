use chrono::NaiveDate;
use serde::Deserialize;

use super::monthly::{Metric, MonthlyRecord};

/// One marginal-operating-cost measurement for a subsystem. The weekly and
/// half-hourly endpoints share this shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CostRecord {
    pub id_subsistema: String,
    #[serde(default)]
    pub subsistema_nome: Option<String>,
    pub data: NaiveDate,
    pub custo_marginal_operacao_semanal: f64,
    pub custo_marginal_operacao_semanal_carga_leve: f64,
    pub custo_marginal_operacao_semanal_carga_media: f64,
    pub custo_marginal_operacao_semanal_carga_pesada: f64,
}

impl MonthlyRecord for CostRecord {
    const METRICS: &'static [Metric<Self>] = &[
        Metric {
            label: "Custo Total",
            color: "#8884d8",
            value: |r| r.custo_marginal_operacao_semanal,
        },
        Metric {
            label: "Carga Leve",
            color: "#82ca9d",
            value: |r| r.custo_marginal_operacao_semanal_carga_leve,
        },
        Metric {
            label: "Carga Média",
            color: "#ffc658",
            value: |r| r.custo_marginal_operacao_semanal_carga_media,
        },
        Metric {
            label: "Carga Pesada",
            color: "#a4de6c",
            value: |r| r.custo_marginal_operacao_semanal_carga_pesada,
        },
    ];

    fn date(&self) -> NaiveDate {
        self.data
    }
}

/// One full response from the `/cmo` endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CostPage {
    pub total_registros: u32,
    pub data_inicial: NaiveDate,
    pub data_final: NaiveDate,
    pub dados: Vec<CostRecord>,
}
