use yew::prelude::*;

use crate::hooks::use_auth::use_auth;

/// Button dropping the session and leaving for the provider's logout page.
#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let auth = use_auth();

    let onclick = {
        let logout = auth.logout;
        Callback::from(move |_| logout.emit(()))
    };

    html! {
        <button class="auth-button" {onclick}>{"Sair"}</button>
    }
}
