use leptos::*;
use leptos_router::*;

use peta_frontend_api::GateState;

use crate::{
    components::{ConfirmationModal, ModalKind},
    Page,
};

#[component]
pub fn NavBar<F>(gate_state: Signal<GateState>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (confirm_logout, set_confirm_logout) = create_signal(false);

    view! {
      <nav class="container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Home.path()>"PetaPintar"</A>
          </div>

          // Menu items
          <div class="flex space-x-6">
            <MenuItem page = Page::Home label = "Map" />
            <MenuItem page = Page::Admin label = "Admin" />
            {move || (gate_state.get() == GateState::Authenticated).then(|| view! {
              <a
                href="#"
                class="hover:text-gray-600"
                on:click = move |ev| {
                  ev.prevent_default();
                  set_confirm_logout.update(|v| *v = true);
                }
              >
                "Logout"
              </a>
            })}
          </div>
        </div>
      </nav>
      <ConfirmationModal
        open = confirm_logout.into()
        kind = ModalKind::Logout
        title = "Confirm logout"
        message = "Do you really want to end the admin session?"
        confirm_label = "Logout"
        on_confirm = move || {
            set_confirm_logout.update(|v| *v = false);
            on_logout();
        }
        on_close = move || set_confirm_logout.update(|v| *v = false)
      />
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-gray-600".to_string()>{ label }</A>
    }
}
