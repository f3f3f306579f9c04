use leptos::*;

use peta_frontend_api::{AuthApi, RecoveryToken};

/// The only page rendered while a password recovery is in progress.
#[component]
pub fn ResetPassword<F>(
    auth_api: Option<AuthApi>,
    token: Signal<Option<RecoveryToken>>,
    on_success: F,
) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (password, set_password) = create_signal(String::new());
    let (repeated, set_repeated) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    let update_action = {
        let auth_api = auth_api.clone();
        create_action(move |(): &()| {
            let auth_api = auth_api.clone();
            async move {
                let Some(auth_api) = auth_api else {
                    set_error.update(|e| *e = Some("The backend is not configured.".into()));
                    return;
                };
                let Some(token) = token.get_untracked() else {
                    set_error.update(|e| {
                        *e = Some("The recovery link is invalid or expired.".into());
                    });
                    return;
                };
                set_wait_for_response.update(|w| *w = true);
                let result = auth_api
                    .update_password(&token.access_token, password.get_untracked())
                    .await;
                set_wait_for_response.update(|w| *w = false);
                match result {
                    Ok(()) => {
                        log::info!("Password successfully updated");
                        on_success();
                    }
                    Err(err) => {
                        log::error!("Unable to update the password: {err}");
                        set_error.update(|e| {
                            *e = Some("The new password was rejected. Please try again.".into());
                        });
                    }
                }
            }
        })
    };

    let passwords_match =
        Signal::derive(move || password.with(|p| !p.is_empty() && repeated.with(|r| p == r)));
    let submit_disabled =
        Signal::derive(move || wait_for_response.get() || !passwords_match.get());

    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="xl:w-6/12">
              <div class="block bg-white shadow-lg rounded-lg">
                <div class="md:p-12 md:mx-6">
                  <div class="text-center">
                    <h4 class="text-xl font-semibold mt-1 mb-12 pb-1">"Set a new password"</h4>
                  </div>
                  <form on:submit=|ev| ev.prevent_default()>
                    <p class="mb-4 text-gray-600">
                      "Please choose a new password for your admin account."
                    </p>
                    {move || error.get().map(|err| view!{
                      <p class="mb-4 text-red-700">{ err }</p>
                    })}
                    <div class="mb-4">
                      <input
                        type="password"
                        required
                        placeholder="New password"
                        class="form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-green-600 focus:outline-none"
                        on:input = move |ev| set_password.update(|v| *v = event_target_value(&ev))
                      />
                    </div>
                    <div class="mb-4">
                      <input
                        type="password"
                        required
                        placeholder="Repeat the new password"
                        class="form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white border border-solid border-gray-300 rounded focus:border-green-600 focus:outline-none"
                        on:input = move |ev| set_repeated.update(|v| *v = event_target_value(&ev))
                      />
                    </div>
                    {move || {
                      (!repeated.get().is_empty() && !passwords_match.get()).then(|| view! {
                        <p class="mb-4 text-red-700">"The passwords do not match."</p>
                      })
                    }}
                    <div class="text-center pt-1 mb-12 pb-1">
                      <button
                        type="button"
                        class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:bg-green-700 hover:text-white focus:outline-none transition duration-150 ease-in-out w-full mb-3 bg-green-100"
                        prop:disabled = move || submit_disabled.get()
                        on:click = move |_| update_action.dispatch(())
                      >
                        "Save new password"
                      </button>
                    </div>
                  </form>
                </div>
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
