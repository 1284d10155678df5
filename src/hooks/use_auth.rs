use std::rc::Rc;

use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use web_sys::wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::models::error::AppError;
use crate::services::auth::{AuthClient, PkcePair, Session, random_token};

const SESSION_KEY: &str = "sin-dashboard.session";
const VERIFIER_KEY: &str = "sin-dashboard.verifier";
const STATE_KEY: &str = "sin-dashboard.state";

/// Where the current visitor stands with the identity provider.
#[derive(Clone, PartialEq, Debug)]
pub enum AuthStatus {
    /// Still resuming a stored session or finishing a login redirect.
    Resolving,
    Anonymous,
    Authenticated(Rc<Session>),
}

/// Handle exposed through the auth context.
#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    pub status: AuthStatus,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

impl AuthHandle {
    /// Returns true once a session is established.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, AuthStatus::Authenticated(_))
    }

    /// Returns the bearer token if a session is established.
    pub fn access_token(&self) -> Option<String> {
        match &self.status {
            AuthStatus::Authenticated(session) => Some(session.access_token.clone()),
            _ => None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

/// Owns the session state and exposes it to the component tree. Everything
/// below the provider reads the session through [`use_auth`] rather than a
/// crate-level global, so tests can mount subtrees with a fabricated handle.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let status = use_state(|| AuthStatus::Resolving);

    // Resume a stored session or finish a login redirect on mount
    {
        let status = status.clone();
        use_effect_with((), move |_| {
            resolve_initial_auth(status);
            || ()
        });
    }

    let login = Callback::from(|()| {
        if let Err(e) = begin_login() {
            web_sys::console::warn_1(&format!("Failed to start login: {e}").into());
        }
    });

    let logout = {
        let status = status.clone();
        Callback::from(move |()| {
            status.set(AuthStatus::Anonymous);
            if let Err(e) = begin_logout() {
                web_sys::console::warn_1(&format!("Failed to complete logout: {e}").into());
            }
        })
    };

    let handle = AuthHandle {
        status: (*status).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}

/// Reads the auth context provided by [`AuthProvider`].
#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be called under an AuthProvider")
}

/// Settles the initial [`AuthStatus`]: a stored session wins, then a login
/// callback in the URL, otherwise the visitor is anonymous.
fn resolve_initial_auth(status: UseStateHandle<AuthStatus>) {
    if let Some(session) = stored_session() {
        status.set(AuthStatus::Authenticated(Rc::new(session)));
        return;
    }

    let Some((code, returned_state)) = callback_params() else {
        status.set(AuthStatus::Anonymous);
        return;
    };

    let expected_state: Option<String> = SessionStorage::get(STATE_KEY).ok();
    let verifier: Option<String> = SessionStorage::get(VERIFIER_KEY).ok();
    SessionStorage::delete(STATE_KEY);
    SessionStorage::delete(VERIFIER_KEY);
    clear_callback_url();

    let (Some(expected), Some(verifier)) = (expected_state, verifier) else {
        web_sys::console::warn_1(&"Login callback without a pending attempt".into());
        status.set(AuthStatus::Anonymous);
        return;
    };

    if expected != returned_state {
        web_sys::console::warn_1(&"Login callback state mismatch, discarding".into());
        status.set(AuthStatus::Anonymous);
        return;
    }

    spawn_local(async move {
        match complete_login(&code, &verifier).await {
            Ok(session) => status.set(AuthStatus::Authenticated(Rc::new(session))),
            Err(e) => {
                web_sys::console::warn_1(&format!("Login failed: {e}").into());
                status.set(AuthStatus::Anonymous);
            }
        }
    });
}

/// Exchanges the authorization code and persists the resulting session.
async fn complete_login(code: &str, verifier: &str) -> Result<Session, AppError> {
    let client = AuthClient::new()?;
    let session = client.exchange_code(code, verifier, &window_origin()?).await?;

    if let Err(e) = SessionStorage::set(SESSION_KEY, &session) {
        web_sys::console::warn_1(&format!("Failed to persist session: {e:?}").into());
    }

    Ok(session)
}

/// Starts a fresh authorization attempt and leaves the page.
fn begin_login() -> Result<(), AppError> {
    let pkce = PkcePair::generate()?;
    let state = random_token()?;

    SessionStorage::set(VERIFIER_KEY, &pkce.verifier)
        .map_err(|e| AppError::AuthError(format!("Failed to stash login attempt: {e:?}")))?;
    SessionStorage::set(STATE_KEY, &state)
        .map_err(|e| AppError::AuthError(format!("Failed to stash login attempt: {e:?}")))?;

    let url = AuthClient::new()?.authorize_url(&window_origin()?, &state, &pkce.challenge);
    redirect_to(&url)
}

/// Drops the stored session and leaves for the provider's logout endpoint.
fn begin_logout() -> Result<(), AppError> {
    SessionStorage::delete(SESSION_KEY);
    let url = AuthClient::new()?.logout_url(&window_origin()?);
    redirect_to(&url)
}

/// Loads a stored session, discarding it if expired.
fn stored_session() -> Option<Session> {
    let session: Session = SessionStorage::get(SESSION_KEY).ok()?;
    if session.is_valid() {
        Some(session)
    } else {
        SessionStorage::delete(SESSION_KEY);
        None
    }
}

/// Extracts `code` and `state` from the current URL, if both are present.
fn callback_params() -> Option<(String, String)> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    Some((params.get("code")?, params.get("state")?))
}

/// Replaces the callback URL with the bare path so a reload does not replay
/// the authorization code.
fn clear_callback_url() {
    let cleared = web_sys::window()
        .and_then(|w| {
            let path = w.location().pathname().ok()?;
            let history = w.history().ok()?;
            history
                .replace_state_with_url(&JsValue::NULL, "", Some(&path))
                .ok()
        })
        .is_some();

    if !cleared {
        web_sys::console::warn_1(&"Failed to clear the login callback URL".into());
    }
}

fn window_origin() -> Result<String, AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::ConfigError("No window object".to_string()))?
        .location()
        .origin()
        .map_err(|_| AppError::ConfigError("Window origin unavailable".to_string()))
}

fn redirect_to(url: &str) -> Result<(), AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::ConfigError("No window object".to_string()))?
        .location()
        .set_href(url)
        .map_err(|_| AppError::ConfigError("Redirect failed".to_string()))
}
