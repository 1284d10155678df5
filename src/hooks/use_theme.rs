use gloo::events::EventListener;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

const THEME_KEY: &str = "sin-dashboard.theme";

/// Colour-scheme preference.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system preference.
    Auto,
}

/// Handle returned by [`use_theme`].
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    /// Stored preference, possibly `Auto`.
    pub preference: Theme,
    /// Preference with `Auto` resolved against the system.
    pub effective: Theme,
    /// Switches between light and dark.
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let preference = use_state(|| stored_theme().unwrap_or(Theme::Auto));
    let system = use_state(system_theme);

    let effective = match *preference {
        Theme::Auto => *system,
        chosen => chosen,
    };

    // Effect: reflect the effective theme on <html data-theme="...">
    use_effect_with(effective, |theme| {
        apply_document_theme(*theme);
        || ()
    });

    // Effect: track system preference changes while mounted
    {
        let system = system.clone();
        use_effect_with((), move |_| {
            let listener = watch_system_theme(system.setter());
            move || drop(listener)
        });
    }

    // Effect: persist the preference
    {
        let chosen = *preference;
        use_effect_with(chosen, |theme| {
            persist_theme(*theme);
            || ()
        });
    }

    let toggle = {
        let preference = preference.clone();
        Callback::from(move |()| {
            let next = match *preference {
                Theme::Dark => Theme::Light,
                _ => Theme::Dark,
            };
            preference.set(next);
        })
    };

    ThemeHandle {
        preference: *preference,
        effective,
        toggle,
    }
}

/// Current system colour scheme, light when detection fails.
fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches());

    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Sets the `data-theme` attribute the stylesheet keys its variables off.
fn apply_document_theme(theme: Theme) {
    let value = match theme {
        Theme::Dark => "dark",
        // Auto arrives here already resolved
        Theme::Light | Theme::Auto => "light",
    };

    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = html.set_attribute("data-theme", value);
    }
}

fn stored_theme() -> Option<Theme> {
    LocalStorage::get(THEME_KEY).ok()
}

fn persist_theme(theme: Theme) {
    if let Err(e) = LocalStorage::set(THEME_KEY, theme) {
        web_sys::console::warn_1(&format!("Failed to persist theme: {e:?}").into());
    }
}

/// Listens for system colour-scheme changes for as long as the returned
/// listener is held.
fn watch_system_theme(setter: UseStateSetter<Theme>) -> Option<EventListener> {
    let media = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())?;

    Some(EventListener::new(&media, "change", move |_| {
        setter.set(system_theme());
    }))
}
