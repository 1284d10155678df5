use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::{CircularProgress, MonthlyChart, Pager, QueryForm};
use crate::config::Config;
use crate::hooks::use_cost_data::{CostDataHandle, use_cost_data};
use crate::hooks::use_theme::{Theme, use_theme};
use crate::models::cost::CostRecord;
use crate::models::monthly::{chart_series, month_labels, monthly_means};
use crate::models::query::DateRangeQuery;
use crate::services::api::CostFrequency;

/// Default filter: the first weeks of 2024, where both series have data.
fn default_query() -> DateRangeQuery {
    DateRangeQuery {
        data_inicial: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        data_final: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap_or_default(),
        limite: Config::DEFAULT_LIMIT,
    }
}

/// Marginal-operating-cost dashboard. One filter form drives both cadences;
/// each gets its own chart and pager since the two series page through
/// different record counts.
#[function_component(MarginalCostPage)]
pub fn marginal_cost_page() -> Html {
    let weekly = use_cost_data(CostFrequency::Weekly);
    let half_hourly = use_cost_data(CostFrequency::HalfHourly);
    let theme = use_theme();
    let initial = use_memo((), |_| default_query());

    // Initial fetch of both series with the default filter
    {
        let weekly_submit = weekly.submit.clone();
        let half_hourly_submit = half_hourly.submit.clone();
        let initial = initial.clone();

        use_effect_with((), move |_| {
            weekly_submit.emit((*initial).clone());
            half_hourly_submit.emit((*initial).clone());
            || ()
        });
    }

    let on_submit = {
        let weekly_submit = weekly.submit.clone();
        let half_hourly_submit = half_hourly.submit.clone();

        Callback::from(move |query: DateRangeQuery| {
            weekly_submit.emit(query.clone());
            half_hourly_submit.emit(query);
        })
    };

    let dark_mode = theme.effective == Theme::Dark;

    html! {
        <main class="page">
            <h1>{"Dashboards do Custo Marginal de Operação (CMO)"}</h1>
            <div class="page-intro">
                <p>
                    {"Nesta página você pode filtrar por uma data específica para visualizar \
                      os gráficos do CMO medido semanalmente e também no formato de meia em \
                      meia hora."}
                </p>
                <p>{"Os dados medidos semanalmente estão presentes de 07/01/2005 até 08/03/2024."}</p>
                <p>
                    {"Os dados medidos de meia em meia hora, por sua vez, estão presentes de \
                      01/01/2020 até 03/03/2024."}
                </p>
            </div>
            <QueryForm initial={(*initial).clone()} on_submit={on_submit} />
            <CostSection
                id="weekly-costs-chart"
                title="CMO semanal"
                handle={weekly}
                {dark_mode}
            />
            <CostSection
                id="half-hourly-costs-chart"
                title="CMO semi-horário"
                handle={half_hourly}
                {dark_mode}
            />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct CostSectionProps {
    id: AttrValue,
    title: AttrValue,
    handle: CostDataHandle,
    dark_mode: bool,
}

/// Chart plus pager for one cost cadence.
#[function_component(CostSection)]
fn cost_section(props: &CostSectionProps) -> Html {
    let handle = &props.handle;

    let buckets = use_memo(handle.data.clone(), |data| {
        data.as_ref()
            .map(|page| monthly_means(&page.dados))
            .unwrap_or_default()
    });

    let body = if handle.loading {
        html! { <CircularProgress /> }
    } else if let Some(page) = handle.data.clone() {
        html! {
            <div class="dashboard">
                <MonthlyChart
                    id={props.id.clone()}
                    title={props.title.clone()}
                    y_label="Valor médio do CMO"
                    months={month_labels(&buckets)}
                    series={chart_series::<CostRecord>(&buckets)}
                    dark_mode={props.dark_mode}
                />
                <Pager
                    cursor={handle.cursor}
                    total={page.total_registros}
                    on_navigate={handle.paginate.clone()}
                />
            </div>
        }
    } else if handle.attempted {
        html! { <p class="empty-message">{"Nenhum registro encontrado"}</p> }
    } else {
        html! {}
    };

    html! {
        <section class="cost-section">
            { body }
        </section>
    }
}
