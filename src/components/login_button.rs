use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

/// Button starting the login redirect.
#[function_component(LoginButton)]
pub fn login_button() -> Html {
    let auth = use_auth();

    let onclick = {
        let login = auth.login;
        Callback::from(move |_| login.emit(()))
    };

    html! {
        <button class="auth-button" {onclick}>{"Entrar"}</button>
    }
}
