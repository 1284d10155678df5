use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::login_button::LoginButton;
use crate::components::logout_button::LogoutButton;
use crate::components::theme_toggle::ThemeToggle;
use crate::hooks::use_auth::{AuthStatus, use_auth};
use crate::routes::Route;

/// Top navigation bar: home link, theme toggle and the session control.
#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();

    html! {
        <header class="app-header">
            <nav class="app-nav">
                <Link<Route> to={Route::Home} classes="nav-link">
                    {"Dashboards"}
                </Link<Route>>
            </nav>
            <div class="header-controls">
                <ThemeToggle />
                {
                    match auth.status {
                        AuthStatus::Authenticated(_) => html! { <LogoutButton /> },
                        AuthStatus::Anonymous => html! { <LoginButton /> },
                        AuthStatus::Resolving => html! {},
                    }
                }
            </div>
        </header>
    }
}
