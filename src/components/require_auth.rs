use yew::prelude::*;

use crate::components::progress::CircularProgress;
use crate::hooks::use_auth::{AuthStatus, use_auth};

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Html,
}

/// Gate for routes that need a session. Anonymous visitors are sent off to
/// log in; until the redirect or the session resolution completes, a spinner
/// stands in for the page.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    {
        let status = auth.status.clone();
        let login = auth.login.clone();

        use_effect_with(status, move |status| {
            if matches!(status, AuthStatus::Anonymous) {
                login.emit(());
            }
            || ()
        });
    }

    match auth.status {
        AuthStatus::Authenticated(_) => props.children.clone(),
        AuthStatus::Resolving | AuthStatus::Anonymous => html! { <CircularProgress /> },
    }
}
