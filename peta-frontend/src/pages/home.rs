use leptos::*;

use peta_boundary::MapPoint;
use peta_entities::{id::Id, pin::PinLocation, report::LocationReport, time::Timestamp};
use peta_frontend_api::DataApi;

use crate::components::{ConfirmationModal, Map, ModalKind};

// Jakarta
const DEFAULT_CENTER: MapPoint = MapPoint {
    lat: -6.175,
    lng: 106.827,
};

#[component]
pub fn PublicMap(data_api: DataApi) -> impl IntoView {
    let pins = RwSignal::new(Vec::<PinLocation>::new());
    let selected = RwSignal::new(None::<PinLocation>);
    let changes = RwSignal::new(String::new());
    let report_sent = RwSignal::new(false);
    let report_error = RwSignal::new(None::<String>);

    let load_pins = {
        let data_api = data_api.clone();
        Action::new(move |()| {
            let data_api = data_api.clone();
            async move {
                // Pending pins stay invisible until an admin activates them.
                let active: Vec<_> = data_api
                    .list_pins()
                    .await
                    .into_iter()
                    .filter(PinLocation::is_active)
                    .collect();
                pins.update(|p| *p = active);
            }
        })
    };
    load_pins.dispatch(());

    let submit_report = Action::new(move |report: &LocationReport| {
        let data_api = data_api.clone();
        let report = report.clone();
        async move {
            match data_api.create_report(&report).await {
                Ok(()) => {
                    report_sent.update(|v| *v = true);
                    selected.update(|v| *v = None);
                    changes.update(String::clear);
                }
                Err(err) => {
                    log::error!("Unable to submit report: {err}");
                    report_error.update(|e| {
                        *e = Some("The report could not be submitted. Please try again later.".into());
                    });
                }
            }
        }
    });

    let submit = move || {
        let Some(pin) = selected.get() else {
            return;
        };
        let text = changes.get();
        if text.trim().is_empty() {
            return;
        }
        let report = LocationReport {
            report_id: Id::new(),
            pin_id: pin.id.clone(),
            pin_name: pin.name.clone(),
            changes: text.trim().to_owned(),
            reported_at: Timestamp::now(),
        };
        submit_report.dispatch(report);
    };

    view! {
      <section class="flex flex-col h-screen">
        <div class="flex-1 min-h-0">
          <Map center=DEFAULT_CENTER pins=pins.into() />
        </div>
        <div class="container mx-auto p-6 overflow-y-auto max-h-64">
          <h3 class="text-lg font-semibold mb-4">"Locations"</h3>
          <ul class="grid gap-2 md:grid-cols-2">
            <For
              each=move || pins.get()
              key=|pin| pin.id.clone()
              children=move |pin: PinLocation| {
                let select = pin.clone();
                view! {
                  <li class="flex items-center justify-between border rounded px-3 py-2">
                    <div>
                      <span class="font-medium">{ pin.name.clone() }</span>
                      <span class="ml-2 text-sm text-gray-500">
                        { String::from(pin.category.clone()) }
                      </span>
                    </div>
                    <button
                      class="text-sm text-red-600 hover:underline"
                      on:click=move |_| {
                        report_error.update(|e| *e = None);
                        changes.update(String::clear);
                        selected.update(|v| *v = Some(select.clone()));
                      }
                    >
                      "Report a change"
                    </button>
                  </li>
                }
              }
            />
          </ul>
        </div>

        // Report form for the selected pin
        {move || selected.get().map(|pin| view! {
          <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-50">
            <div class="bg-white rounded-lg shadow-lg max-w-md w-full p-6">
              <h4 class="text-lg font-semibold mb-2">
                { format!("Report a change for {}", pin.name) }
              </h4>
              {move || report_error.get().map(|err| view! {
                <p class="mb-2 text-red-700">{ err }</p>
              })}
              <textarea
                class="w-full border rounded p-2 mb-4"
                rows=4
                placeholder="What has changed at this location?"
                prop:value=move || changes.get()
                on:input=move |ev| changes.update(|v| *v = event_target_value(&ev))
              ></textarea>
              <div class="flex justify-end space-x-4">
                <button
                  class="px-4 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100"
                  on:click=move |_| selected.update(|v| *v = None)
                >
                  "Cancel"
                </button>
                <button
                  class="px-4 py-2 rounded bg-red-600 text-white hover:bg-red-700"
                  on:click=move |_| submit()
                >
                  "Submit report"
                </button>
              </div>
            </div>
          </div>
        })}

        <ConfirmationModal
          open = report_sent.into()
          kind = ModalKind::Info
          title = "Report submitted"
          message = "Thank you! An administrator will review the reported change."
          confirm_label = "OK"
          on_confirm = move || report_sent.update(|v| *v = false)
          on_close = move || report_sent.update(|v| *v = false)
        />
      </section>
    }
}
