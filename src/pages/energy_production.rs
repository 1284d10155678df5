use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;

use crate::components::{CircularProgress, MonthlyChart, Pager, QueryForm};
use crate::config::Config;
use crate::hooks::use_energy_data::use_energy_data;
use crate::hooks::use_theme::{Theme, use_theme};
use crate::models::energy::EnergyRecord;
use crate::models::monthly::{chart_series, month_labels, monthly_means};
use crate::models::query::DateRangeQuery;

/// Default filter: 1 January of the current year through today.
fn default_query() -> DateRangeQuery {
    let today = Local::now().date_naive();
    let january_first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

    DateRangeQuery {
        data_inicial: january_first,
        data_final: today,
        limite: Config::DEFAULT_LIMIT,
    }
}

/// Hourly energy-balance dashboard: filter form, monthly generation-mix
/// chart and pager.
#[function_component(EnergyProductionPage)]
pub fn energy_production_page() -> Html {
    let energy = use_energy_data();
    let theme = use_theme();
    let initial = use_memo((), |_| default_query());

    // Initial fetch with the default filter
    {
        let submit = energy.submit.clone();
        let initial = initial.clone();

        use_effect_with((), move |_| {
            submit.emit((*initial).clone());
            || ()
        });
    }

    let buckets = use_memo(energy.data.clone(), |data| {
        data.as_ref()
            .map(|page| monthly_means(&page.dados))
            .unwrap_or_default()
    });

    let dark_mode = theme.effective == Theme::Dark;

    let body = if energy.loading {
        html! { <CircularProgress /> }
    } else if let Some(page) = energy.data.clone() {
        html! {
            <div class="dashboard">
                <MonthlyChart
                    id="energy-chart"
                    title="Balanço de energia por matriz"
                    y_label="Produção média (MegaWatt Médio)"
                    months={month_labels(&buckets)}
                    series={chart_series::<EnergyRecord>(&buckets)}
                    {dark_mode}
                />
                <Pager
                    cursor={energy.cursor}
                    total={page.total_registros}
                    on_navigate={energy.paginate.clone()}
                />
            </div>
        }
    } else if energy.attempted {
        html! { <p class="empty-message">{"Nenhum registro encontrado"}</p> }
    } else {
        html! {}
    };

    html! {
        <main class="page">
            <h1>{"Dashboards do Balanço geral de energia"}</h1>
            <div class="page-intro">
                <p>
                    {"Nesta página você pode filtrar por uma data específica para visualizar \
                      os gráficos do balanço de energia medido de hora em hora agrupados por \
                      cada matriz energética."}
                </p>
                <p>{"Os dados medidos de hora em hora estão presentes desde 01/01/2000 até 13/03/2025."}</p>
                <p>
                    {"Os dados medidos de meia em meia hora, por sua vez, estão presentes de \
                      15/08/2023 até 03/03/2024."}
                </p>
            </div>
            <QueryForm initial={(*initial).clone()} on_submit={energy.submit.clone()} />
            { body }
        </main>
    }
}
