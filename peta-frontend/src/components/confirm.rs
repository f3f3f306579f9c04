use leptos::*;

/// Visual flavor of the [`ConfirmationModal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Logout,
    Danger,
    Info,
}

impl ModalKind {
    const fn icon(self) -> &'static str {
        match self {
            Self::Login => "→",
            Self::Logout => "←",
            Self::Danger => "!",
            Self::Info => "✓",
        }
    }

    const fn badge(self) -> &'static str {
        match self {
            Self::Login | Self::Info => "bg-green-100 text-green-700",
            Self::Logout => "bg-gray-100 text-gray-700",
            Self::Danger => "bg-red-100 text-red-700",
        }
    }

    const fn confirm_button(self) -> &'static str {
        match self {
            Self::Login | Self::Info => "bg-green-600 hover:bg-green-700",
            Self::Logout => "bg-gray-600 hover:bg-gray-700",
            Self::Danger => "bg-red-600 hover:bg-red-700",
        }
    }
}

#[component]
pub fn ConfirmationModal<C, F>(
    open: Signal<bool>,
    kind: ModalKind,
    title: &'static str,
    message: &'static str,
    #[prop(default = "Yes, continue")] confirm_label: &'static str,
    #[prop(default = "Cancel")] cancel_label: &'static str,
    on_confirm: C,
    on_close: F,
) -> impl IntoView
where
    C: Fn() + 'static + Copy,
    F: Fn() + 'static + Copy,
{
    view! {
      <Show when=move || open.get()>
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50">
          <div class="bg-white rounded-lg shadow-lg max-w-sm w-full p-6 text-center">
            <div class={format!(
                "mx-auto mb-4 flex h-12 w-12 items-center justify-center rounded-full {}",
                kind.badge())}
            >
              <span class="text-xl font-bold">{ kind.icon() }</span>
            </div>
            <h4 class="text-lg font-semibold mb-2">{ title }</h4>
            <p class="mb-6 text-gray-600">{ message }</p>
            <div class="flex justify-center space-x-4">
              <button
                class="px-6 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100"
                on:click=move |_| on_close()
              >
                { cancel_label }
              </button>
              <button
                class={format!("px-6 py-2 rounded text-white {}", kind.confirm_button())}
                on:click=move |_| on_confirm()
              >
                { confirm_label }
              </button>
            </div>
          </div>
        </div>
      </Show>
    }
}
