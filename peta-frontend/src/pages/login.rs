use leptos::*;

use peta_boundary::{Credentials, Session};
use peta_frontend_api::AuthApi;

use crate::components::{ConfirmationModal, CredentialsForm, ModalKind};

#[component]
pub fn Login<F>(auth_api: Option<AuthApi>, on_success: F) -> impl IntoView
where
    F: Fn(Session) + 'static + Copy,
{
    let (login_error, set_login_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);
    let pending_session = RwSignal::new(None::<Session>);
    let (reset_email, set_reset_email) = create_signal(String::new());
    let (reset_requested, set_reset_requested) = create_signal(false);

    let login_action = {
        let auth_api = auth_api.clone();
        create_action(move |credentials: &Credentials| {
            let auth_api = auth_api.clone();
            let credentials = credentials.to_owned();
            async move {
                let Some(auth_api) = auth_api else {
                    set_login_error.update(|e| *e = Some("The backend is not configured.".into()));
                    return;
                };
                set_wait_for_response.update(|w| *w = true);
                let result = auth_api.sign_in(&credentials).await;
                set_wait_for_response.update(|w| *w = false);
                match result {
                    Ok(session) => {
                        set_login_error.update(|e| *e = None);
                        pending_session.update(|s| *s = Some(session));
                    }
                    Err(err) => {
                        // The message must not reveal whether the email exists.
                        log::error!("Unable to login with {}: {err}", credentials.email);
                        set_login_error.update(|e| *e = Some("Invalid email or password.".into()));
                    }
                }
            }
        })
    };

    let request_reset = {
        let auth_api = auth_api.clone();
        create_action(move |(): &()| {
            let auth_api = auth_api.clone();
            let email = reset_email.get_untracked();
            async move {
                let Some(auth_api) = auth_api else {
                    return;
                };
                log::info!("Request password reset for {email}");
                match auth_api.request_password_reset(email).await {
                    Ok(()) => set_reset_requested.update(|v| *v = true),
                    Err(err) => log::warn!("Unable to request a password reset: {err}"),
                }
            }
        })
    };

    let disabled = Signal::derive(move || wait_for_response.get());

    let confirm_login = move || {
        if let Some(session) = pending_session.get_untracked() {
            pending_session.update(|s| *s = None);
            on_success(session);
        }
    };

    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="xl:w-6/12">
              <div class="block bg-white shadow-lg rounded-lg">
                <div class="px-4 md:px-0 mx-auto">
                  <div class="md:p-12 md:mx-6">
                    <CredentialsForm
                        title = "Admin login"
                        description = "Please login to manage the map"
                        submit_credentials_label = "Log in"
                        initial_credentials = Credentials::default()
                        submit_credentials_action = login_action
                        error = login_error.into()
                        disabled
                    />
                    <div class="text-center pt-1 mb-6 pb-1">
                      <p class="mb-2 text-gray-600">"Forgot password?"</p>
                      {move || if reset_requested.get() {
                        view! {
                          <p class="text-green-700">
                            "Check your inbox for the password-recovery email."
                          </p>
                        }.into_view()
                      } else {
                        view! {
                          <div class="flex space-x-2">
                            <input
                              type="email"
                              placeholder="Email address"
                              class="flex-1 border border-gray-300 rounded px-3 py-1.5"
                              on:input = move |ev| {
                                set_reset_email.update(|v| *v = event_target_value(&ev));
                              }
                            />
                            <button
                              class="px-4 py-1.5 rounded border border-gray-300 hover:bg-gray-100"
                              prop:disabled = move || reset_email.get().trim().is_empty()
                              on:click = move |_| request_reset.dispatch(())
                            >
                              "Send reset link"
                            </button>
                          </div>
                        }.into_view()
                      }}
                    </div>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
        <ConfirmationModal
          open = Signal::derive(move || pending_session.get().is_some())
          kind = ModalKind::Login
          title = "Login successful"
          message = "You are now signed in as an administrator."
          confirm_label = "Continue"
          cancel_label = "Close"
          on_confirm = confirm_login
          on_close = confirm_login
        />
      </section>
    }
}
