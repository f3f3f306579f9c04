use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsValue;

use peta_boundary::Session;
use peta_frontend_api as api;

use api::{AuthApi, AuthEvent, BackendConfig, DataApi, GateState, RecoveryToken, SessionGate};

mod pages;
use pages::*;

mod components;
use components::*;

const SESSION_STORAGE_KEY: &str = "peta-session";

/// Globals defined by the host page (`index.html`).
const BACKEND_URL_GLOBAL: &str = "PETA_BACKEND_URL";
const ANON_KEY_GLOBAL: &str = "PETA_ANON_KEY";

const NOT_CONFIGURED_WARNING: &str = "CONFIGURATION REQUIRED\n\n\
    The backend URL in index.html is still the placeholder, so the \
    application is running in a limited mode: the map works, but nothing \
    can be stored.\n\n\
    Fill in the backend URL and the anonymous key in index.html.";

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- backend configuration -- //

    let config = config_from_host_page();
    let auth_api = config
        .valid_url()
        .map(|url| AuthApi::new(&url, config.anon_key.clone().unwrap_or_default()));
    let data_api = DataApi::new(api::connect(&config));

    if !config.is_configured() {
        log::error!("The backend configuration of the host page is incomplete");
        _ = window().alert_with_message(NOT_CONFIGURED_WARNING);
    }

    // -- signals -- //

    let gate = RwSignal::new(SessionGate::new());
    let gate_state = Signal::derive(move || gate.with(SessionGate::state));
    let session = Signal::derive(move || gate.with(|gate| gate.session().cloned()));
    let recovery_token = RwSignal::new(None::<RecoveryToken>);

    // -- actions -- //

    let validate_session = {
        let auth_api = auth_api.clone();
        Action::new(move |stored: &Session| {
            let auth_api = auth_api.clone();
            let stored = stored.clone();
            async move {
                let Some(auth_api) = auth_api else {
                    return;
                };
                match auth_api.user(&stored.access_token).await {
                    Ok(user) => {
                        log::debug!("Restored the session of {}", user.email);
                    }
                    Err(err) => {
                        log::warn!("Discarding the stored session: {err}");
                        gate.update(|gate| gate.handle_event(AuthEvent::SignedOut, None));
                    }
                }
            }
        })
    };

    let logout = {
        let auth_api = auth_api.clone();
        Action::new(move |()| {
            let auth_api = auth_api.clone();
            async move {
                if let (Some(auth_api), Some(session)) = (auth_api, session.get_untracked()) {
                    if let Err(err) = auth_api.sign_out(&session).await {
                        log::error!("Unable to sign out: {err}");
                    }
                }
                gate.update(SessionGate::sign_out);
            }
        })
    };

    // -- callbacks -- //

    let on_logout = move || {
        logout.dispatch(());
    };

    // -- startup session check -- //

    let fragment = window().location().hash().unwrap_or_default();
    if let Some(token) = api::recovery_from_fragment(&fragment) {
        log::info!("Password recovery link detected");
        recovery_token.update(|t| *t = Some(token));
        gate.update(|gate| gate.handle_event(AuthEvent::PasswordRecovery, None));
    } else {
        let stored: Option<Session> = LocalStorage::get(SESSION_STORAGE_KEY).ok();
        gate.update(|gate| gate.resolve_initial(stored.clone()));
        if let Some(stored) = stored {
            validate_session.dispatch(stored);
        }
    }

    // -- effects -- //

    Effect::new(move |_| match session.get() {
        Some(session) => {
            LocalStorage::set(SESSION_STORAGE_KEY, &session).expect("LocalStorage::set");
        }
        None => {
            LocalStorage::delete(SESSION_STORAGE_KEY);
        }
    });

    view! {
      {move || match gate_state.get() {
        GateState::Loading => view! {
          <p class="text-center text-gray-500 py-24">"Loading…"</p>
        }.into_view(),
        GateState::Recovery => {
          let auth_api = auth_api.clone();
          view! {
            <ResetPassword
              auth_api
              token = recovery_token.into()
              on_success = move || {
                  gate.update(SessionGate::complete_recovery);
              }
            />
          }.into_view()
        }
        GateState::Anonymous | GateState::Authenticated => {
          let auth_api = auth_api.clone();
          let data_api = data_api.clone();
          view! {
            <Router>
              <NavBar gate_state on_logout />
              <main class="flex-1">
                <Routes>
                  <Route
                    path=Page::Home.path()
                    view={
                      let data_api = data_api.clone();
                      move || view! { <PublicMap data_api=data_api.clone() /> }
                    }
                  />
                  <Route
                    path=Page::Admin.path()
                    view={
                      let data_api = data_api.clone();
                      let auth_api = auth_api.clone();
                      move || {
                        let data_api = data_api.clone();
                        let auth_api = auth_api.clone();
                        match gate_state.get() {
                          GateState::Authenticated => view! {
                            <AdminPanel data_api />
                          }.into_view(),
                          _ => view! {
                            <Login
                              auth_api
                              on_success = move |session| {
                                  log::info!("Successfully logged in");
                                  gate.update(|gate| {
                                      gate.handle_event(AuthEvent::SignedIn, Some(session));
                                  });
                              }
                            />
                          }.into_view(),
                        }
                      }
                    }
                  />
                </Routes>
              </main>
            </Router>
          }.into_view()
        }
      }}
    }
}

/// Reads the backend coordinates from globals of the host page.
///
/// Validation happens in [`BackendConfig`]; here every missing or
/// non-string global simply maps to `None`.
fn config_from_host_page() -> BackendConfig {
    let global = |key: &str| {
        js_sys::Reflect::get(&window(), &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
    };
    BackendConfig {
        url: global(BACKEND_URL_GLOBAL),
        anon_key: global(ANON_KEY_GLOBAL),
    }
}
