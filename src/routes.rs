use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PageMeta, RequireAuth};
use crate::pages::{EnergyProductionPage, HomePage, MarginalCostPage};

/// Client-side routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/geracao-energia")]
    EnergyProduction,
    #[at("/custos-energia")]
    MarginalCosts,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a route to its page, document metadata and, for the dashboards, the
/// authentication gate.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <>
                <PageMeta
                    title="Dashboards SIN"
                    description="Página inicial dos dashboards do SIN"
                />
                <HomePage />
            </>
        },
        Route::EnergyProduction => html! {
            <>
                <PageMeta
                    title="Balanço de Energia"
                    description="Informações sobre o balanço de energia nos subsistemas nos \
                                 diferentes modais energéticos"
                />
                <RequireAuth>
                    <EnergyProductionPage />
                </RequireAuth>
            </>
        },
        Route::MarginalCosts => html! {
            <>
                <PageMeta
                    title="Custos de Energia"
                    description="Informações sobre o custo marginal de operação (CMO) nos \
                                 subsistemas do SIN"
                />
                <RequireAuth>
                    <MarginalCostPage />
                </RequireAuth>
            </>
        },
        Route::NotFound => html! {
            <Redirect<Route> to={Route::Home} />
        },
    }
}
