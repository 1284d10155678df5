use yew::prelude::*;

use crate::hooks::use_theme::{Theme, use_theme};

/// Light/dark toggle shown in the header.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let (icon, label) = match theme.effective {
        Theme::Dark => ("☀️", "Mudar para o tema claro"),
        _ => ("🌙", "Mudar para o tema escuro"),
    };

    let onclick = {
        let toggle = theme.toggle;
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" {onclick} aria-label={label} title={label}>
            {icon}
        </button>
    }
}
