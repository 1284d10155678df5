use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Landing page: what the dashboards cover and where to find them.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page">
            <h1>{"Dashboards Sistema Interligado Nacional (SIN)"}</h1>
            <p>
                {"Bem vindo aos dashboards do SIN, uma Prova de Conceito (POC) dos dados \
                  disponibilizados pelo Operador Nacional do Sistema Elétrico (ONS). Você \
                  pode encontrar detalhes do balanço de energia com diferentes matrizes para \
                  cada subsistema e também detalhes sobre o custo marginal de operação (CMO) \
                  nesses subsistemas ao longo do tempo."}
            </p>
            <p>
                {"Os dados do balanço de energia estão divididos em medições realizadas a \
                  cada hora e outras medições realizadas a cada meia hora, segundo o Modelo \
                  de Despacho Hidrotérmico de Curtíssimo Prazo implementado em 2020. Os \
                  dados do CMO estão divididos em agregados calculados semanalmente e \
                  medidas calculadas a cada meia hora."}
            </p>
            <nav class="dashboard-links">
                <Link<Route> to={Route::EnergyProduction} classes="dashboard-link">
                    {"Balanço de energia →"}
                </Link<Route>>
                <Link<Route> to={Route::MarginalCosts} classes="dashboard-link">
                    {"Custo marginal de operação →"}
                </Link<Route>>
            </nav>
        </main>
    }
}
