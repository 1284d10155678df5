use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;
mod models;
mod pages;
mod routes;
mod services;
mod utils;

use components::Header;
use hooks::use_auth::AuthProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <div class="app-container">
                    <Header />
                    <Switch<Route> render={switch} />

                    <style>
                        {include_str!("style.css")}
                    </style>
                </div>
            </AuthProvider>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
