use leptos::*;
use strum::IntoEnumIterator;

use peta_boundary::PinRecord;
use peta_entities::{
    category::PinCategory,
    id::Id,
    pin::{PinLocation, PinStatus},
    report::LocationReport,
    time::Timestamp,
};
use peta_frontend_api::DataApi;

use crate::components::{ConfirmationModal, ModalKind};

#[allow(clippy::too_many_lines)]
#[component]
pub fn AdminPanel(data_api: DataApi) -> impl IntoView {
    let pins = RwSignal::new(Vec::<PinLocation>::new());
    let reports = RwSignal::new(Vec::<LocationReport>::new());
    let editing = RwSignal::new(None::<PinLocation>);
    let delete_pin_id = RwSignal::new(None::<Id>);
    let delete_report_id = RwSignal::new(None::<Id>);
    let import_open = RwSignal::new(false);
    let import_text = RwSignal::new(String::new());
    let import_error = RwSignal::new(None::<String>);
    let action_error = RwSignal::new(None::<String>);

    // -- actions -- //

    let refresh = {
        let data_api = data_api.clone();
        Action::new(move |()| {
            let data_api = data_api.clone();
            async move {
                pins.update(|p| *p = Vec::new());
                let loaded = data_api.list_pins().await;
                pins.update(|p| *p = loaded);
                let loaded = data_api.list_reports().await;
                reports.update(|r| *r = loaded);
            }
        })
    };
    refresh.dispatch(());

    let save_pin = {
        let data_api = data_api.clone();
        Action::new(move |pin: &PinLocation| {
            let data_api = data_api.clone();
            let pin = pin.clone();
            async move {
                let exists = pins
                    .get_untracked()
                    .iter()
                    .any(|existing| existing.id == pin.id);
                let result = if exists {
                    data_api.update_pin(&pin).await
                } else {
                    data_api.create_pin(&pin).await
                };
                match result {
                    Ok(()) => {
                        action_error.update(|e| *e = None);
                        editing.update(|e| *e = None);
                        refresh.dispatch(());
                    }
                    Err(err) => {
                        log::error!("Unable to save location: {err}");
                        action_error.update(|e| {
                            *e = Some("The location could not be saved.".into());
                        });
                    }
                }
            }
        })
    };

    let remove_pin = {
        let data_api = data_api.clone();
        Action::new(move |id: &Id| {
            let data_api = data_api.clone();
            let id = id.clone();
            async move {
                match data_api.delete_pin(&id).await {
                    Ok(()) => {
                        action_error.update(|e| *e = None);
                        refresh.dispatch(());
                    }
                    Err(err) => {
                        log::error!("Unable to delete location: {err}");
                        action_error.update(|e| {
                            *e = Some("The location could not be deleted.".into());
                        });
                    }
                }
            }
        })
    };

    let remove_report = {
        let data_api = data_api.clone();
        Action::new(move |report_id: &Id| {
            let data_api = data_api.clone();
            let report_id = report_id.clone();
            async move {
                match data_api.delete_report(&report_id).await {
                    Ok(()) => {
                        action_error.update(|e| *e = None);
                        refresh.dispatch(());
                    }
                    Err(err) => {
                        log::error!("Unable to delete report: {err}");
                        action_error.update(|e| {
                            *e = Some("The report could not be deleted.".into());
                        });
                    }
                }
            }
        })
    };

    let import_pins = {
        let data_api = data_api.clone();
        Action::new(move |pins: &Vec<PinLocation>| {
            let data_api = data_api.clone();
            let pins = pins.clone();
            async move {
                match data_api.import_pins(&pins).await {
                    Ok(()) => {
                        import_error.update(|e| *e = None);
                        import_open.update(|v| *v = false);
                        import_text.update(String::clear);
                        refresh.dispatch(());
                    }
                    Err(err) => {
                        log::error!("Unable to import locations: {err}");
                        import_error.update(|e| {
                            *e = Some("The locations could not be imported.".into());
                        });
                    }
                }
            }
        })
    };

    // -- callbacks -- //

    let submit_import = move || {
        let text = import_text.get_untracked();
        let records: Vec<PinRecord> = match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(err) => {
                import_error.update(|e| *e = Some(format!("Invalid JSON: {err}")));
                return;
            }
        };
        let parsed: Result<Vec<PinLocation>, _> =
            records.into_iter().map(PinLocation::try_from).collect();
        match parsed {
            Ok(pins) => import_pins.dispatch(pins),
            Err(err) => {
                import_error.update(|e| *e = Some(format!("Invalid record: {err}")));
            }
        }
    };

    let confirm_pin_delete = move || {
        if let Some(id) = delete_pin_id.get_untracked() {
            delete_pin_id.update(|v| *v = None);
            remove_pin.dispatch(id);
        }
    };

    let confirm_report_delete = move || {
        if let Some(report_id) = delete_report_id.get_untracked() {
            delete_report_id.update(|v| *v = None);
            remove_report.dispatch(report_id);
        }
    };

    view! {
      <section class="container mx-auto p-6">
        <div class="flex items-center justify-between mb-6">
          <h2 class="text-2xl font-semibold">"Manage locations"</h2>
          <div class="space-x-4">
            <button
              class="px-4 py-2 rounded border border-gray-300 hover:bg-gray-100"
              on:click=move |_| {
                import_error.update(|e| *e = None);
                import_open.update(|v| *v = true);
              }
            >
              "Import JSON"
            </button>
            <button
              class="px-4 py-2 rounded bg-green-600 text-white hover:bg-green-700"
              on:click=move |_| editing.update(|e| *e = Some(empty_pin()))
            >
              "New location"
            </button>
          </div>
        </div>

        {move || action_error.get().map(|err| view! {
          <p class="mb-4 text-red-700">{ err }</p>
        })}

        <table class="w-full mb-12 text-left">
          <thead>
            <tr class="border-b">
              <th class="py-2">"Name"</th>
              <th class="py-2">"Category"</th>
              <th class="py-2">"Status"</th>
              <th class="py-2">"Created"</th>
              <th class="py-2"></th>
            </tr>
          </thead>
          <tbody>
            <For
              each=move || pins.get()
              key=|pin| pin.id.clone()
              children=move |pin: PinLocation| {
                let edit = pin.clone();
                let id = pin.id.clone();
                view! {
                  <tr class="border-b">
                    <td class="py-2">{ pin.name.clone() }</td>
                    <td class="py-2">{ String::from(pin.category.clone()) }</td>
                    <td class="py-2">{ pin.status.to_string() }</td>
                    <td class="py-2 text-sm text-gray-500">{ pin.created_at.to_string() }</td>
                    <td class="py-2 text-right space-x-4">
                      <button
                        class="text-sm hover:underline"
                        on:click=move |_| editing.update(|e| *e = Some(edit.clone()))
                      >
                        "Edit"
                      </button>
                      <button
                        class="text-sm text-red-600 hover:underline"
                        on:click=move |_| delete_pin_id.update(|v| *v = Some(id.clone()))
                      >
                        "Delete"
                      </button>
                    </td>
                  </tr>
                }
              }
            />
          </tbody>
        </table>

        <h2 class="text-2xl font-semibold mb-6">"Reported changes"</h2>
        <ul class="space-y-2 mb-12">
          <For
            each=move || reports.get()
            key=|report| report.report_id.clone()
            children=move |report: LocationReport| {
              let report_id = report.report_id.clone();
              view! {
                <li class="flex items-center justify-between border rounded px-3 py-2">
                  <div>
                    <span class="font-medium">{ report.pin_name.clone() }</span>
                    <span class="ml-2">{ report.changes.clone() }</span>
                    <span class="ml-2 text-sm text-gray-500">
                      { report.reported_at.to_string() }
                    </span>
                  </div>
                  <button
                    class="text-sm text-red-600 hover:underline"
                    on:click=move |_| delete_report_id.update(|v| *v = Some(report_id.clone()))
                  >
                    "Delete"
                  </button>
                </li>
              }
            }
          />
        </ul>

        // Location form
        {move || editing.get().map(|initial| {
          let data_api = data_api.clone();
          view! {
            <PinForm
              data_api
              initial
              on_save = move |pin| save_pin.dispatch(pin)
              on_cancel = move || editing.update(|e| *e = None)
            />
          }
        })}

        // JSON import
        <Show when=move || import_open.get()>
          <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-50">
            <div class="bg-white rounded-lg shadow-lg max-w-lg w-full p-6">
              <h4 class="text-lg font-semibold mb-2">"Import locations"</h4>
              <p class="mb-2 text-gray-600">
                "Paste an array of location records in the storage format."
              </p>
              {move || import_error.get().map(|err| view! {
                <p class="mb-2 text-red-700">{ err }</p>
              })}
              <textarea
                class="w-full border rounded p-2 mb-4 font-mono text-sm"
                rows=10
                prop:value=move || import_text.get()
                on:input=move |ev| import_text.update(|v| *v = event_target_value(&ev))
              ></textarea>
              <div class="flex justify-end space-x-4">
                <button
                  class="px-4 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100"
                  on:click=move |_| import_open.update(|v| *v = false)
                >
                  "Cancel"
                </button>
                <button
                  class="px-4 py-2 rounded bg-green-600 text-white hover:bg-green-700"
                  on:click=move |_| submit_import()
                >
                  "Import"
                </button>
              </div>
            </div>
          </div>
        </Show>

        <ConfirmationModal
          open = Signal::derive(move || delete_pin_id.get().is_some())
          kind = ModalKind::Danger
          title = "Delete location"
          message = "The location will be removed permanently. This cannot be undone."
          confirm_label = "Delete"
          on_confirm = confirm_pin_delete
          on_close = move || delete_pin_id.update(|v| *v = None)
        />
        <ConfirmationModal
          open = Signal::derive(move || delete_report_id.get().is_some())
          kind = ModalKind::Danger
          title = "Delete report"
          message = "The report will be removed permanently. This cannot be undone."
          confirm_label = "Delete"
          on_confirm = confirm_report_delete
          on_close = move || delete_report_id.update(|v| *v = None)
        />
      </section>
    }
}

fn empty_pin() -> PinLocation {
    PinLocation {
        id: Id::new(),
        name: String::new(),
        description: String::new(),
        category: PinCategory::Cafe,
        lat: 0.0,
        lng: 0.0,
        image_url: None,
        address: String::new(),
        phone: String::new(),
        owner_name: String::new(),
        email: String::new(),
        whatsapp: String::new(),
        operating_hours: String::new(),
        status: PinStatus::default(),
        created_at: Timestamp::now(),
    }
}

#[allow(clippy::too_many_lines)]
#[component]
fn PinForm<S, C>(
    data_api: DataApi,
    initial: PinLocation,
    on_save: S,
    on_cancel: C,
) -> impl IntoView
where
    S: Fn(PinLocation) + 'static + Copy,
    C: Fn() + 'static + Copy,
{
    let id = initial.id.clone();
    let created_at = initial.created_at;

    let (name, set_name) = create_signal(initial.name);
    let (description, set_description) = create_signal(initial.description);
    let (category, set_category) = create_signal(String::from(initial.category));
    let (lat, set_lat) = create_signal(initial.lat.to_string());
    let (lng, set_lng) = create_signal(initial.lng.to_string());
    let (address, set_address) = create_signal(initial.address);
    let (phone, set_phone) = create_signal(initial.phone);
    let (owner_name, set_owner_name) = create_signal(initial.owner_name);
    let (email, set_email) = create_signal(initial.email);
    let (whatsapp, set_whatsapp) = create_signal(initial.whatsapp);
    let (operating_hours, set_operating_hours) = create_signal(initial.operating_hours);
    let (status, set_status) = create_signal(initial.status.to_string());
    let (image_url, set_image_url) = create_signal(initial.image_url);
    let (uploading, set_uploading) = create_signal(false);
    let (form_error, set_form_error) = create_signal(None::<String>);

    let upload = Action::new(move |file: &web_sys::File| {
        let data_api = data_api.clone();
        let file = file.clone();
        async move {
            set_uploading.update(|v| *v = true);
            match data_api.upload_image(&file).await {
                Ok(url) => {
                    set_form_error.update(|e| *e = None);
                    set_image_url.update(|v| *v = Some(url));
                }
                Err(err) => {
                    log::error!("Unable to upload image: {err}");
                    set_form_error.update(|e| *e = Some("The image could not be uploaded.".into()));
                }
            }
            set_uploading.update(|v| *v = false);
        }
    });

    let submit = move || {
        let name = name.get_untracked().trim().to_owned();
        if name.is_empty() {
            set_form_error.update(|e| *e = Some("A name is required.".into()));
            return;
        }
        let (Ok(lat), Ok(lng)) = (
            lat.get_untracked().trim().parse::<f64>(),
            lng.get_untracked().trim().parse::<f64>(),
        ) else {
            set_form_error.update(|e| {
                *e = Some("Latitude and longitude must be numbers.".into());
            });
            return;
        };
        let pin = PinLocation {
            id: id.clone(),
            name,
            description: description.get_untracked(),
            category: PinCategory::from(category.get_untracked()),
            lat,
            lng,
            image_url: image_url.get_untracked(),
            address: address.get_untracked(),
            phone: phone.get_untracked(),
            owner_name: owner_name.get_untracked(),
            email: email.get_untracked(),
            whatsapp: whatsapp.get_untracked(),
            operating_hours: operating_hours.get_untracked(),
            status: status
                .get_untracked()
                .parse()
                .unwrap_or(PinStatus::default()),
            created_at,
        };
        on_save(pin);
    };

    let text_input = move |placeholder: &'static str,
                           value: ReadSignal<String>,
                           setter: WriteSignal<String>| {
        view! {
          <input
            type="text"
            placeholder=placeholder
            class="w-full border border-gray-300 rounded px-3 py-1.5"
            prop:value=move || value.get()
            on:input=move |ev| setter.update(|v| *v = event_target_value(&ev))
          />
        }
    };

    view! {
      <div class="fixed inset-0 z-40 flex items-center justify-center bg-black bg-opacity-50 overflow-y-auto">
        <div class="bg-white rounded-lg shadow-lg max-w-lg w-full p-6 my-8">
          <h4 class="text-lg font-semibold mb-4">"Location details"</h4>
          {move || form_error.get().map(|err| view! {
            <p class="mb-2 text-red-700">{ err }</p>
          })}
          <form class="space-y-3" on:submit=|ev| ev.prevent_default()>
            { text_input("Name", name, set_name) }
            <textarea
              class="w-full border border-gray-300 rounded px-3 py-1.5"
              rows=3
              placeholder="Description"
              prop:value=move || description.get()
              on:input=move |ev| set_description.update(|v| *v = event_target_value(&ev))
            ></textarea>
            <select
              class="w-full border border-gray-300 rounded px-3 py-1.5"
              prop:value=move || category.get()
              on:change=move |ev| set_category.update(|v| *v = event_target_value(&ev))
            >
              {PinCategory::iter()
                  .filter(|category| !matches!(category, PinCategory::Other(_)))
                  .map(|category| {
                      let tag = String::from(category);
                      view! { <option value=tag.clone()>{ tag }</option> }
                  })
                  .collect_view()}
            </select>
            <div class="flex space-x-2">
              { text_input("Latitude", lat, set_lat) }
              { text_input("Longitude", lng, set_lng) }
            </div>
            { text_input("Address", address, set_address) }
            { text_input("Phone", phone, set_phone) }
            { text_input("Owner", owner_name, set_owner_name) }
            { text_input("Email", email, set_email) }
            { text_input("WhatsApp", whatsapp, set_whatsapp) }
            { text_input("Operating hours", operating_hours, set_operating_hours) }
            <select
              class="w-full border border-gray-300 rounded px-3 py-1.5"
              prop:value=move || status.get()
              on:change=move |ev| set_status.update(|v| *v = event_target_value(&ev))
            >
              <option value="pending">"Pending"</option>
              <option value="active">"Active"</option>
            </select>
            <div>
              <input
                type="file"
                accept="image/*"
                prop:disabled=move || uploading.get()
                on:change=move |ev| {
                  let input = event_target::<web_sys::HtmlInputElement>(&ev);
                  if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    upload.dispatch(file);
                  }
                }
              />
              {move || uploading.get().then(|| view! {
                <p class="text-sm text-gray-500">"Uploading…"</p>
              })}
              {move || image_url.get().map(|url| view! {
                <img src=url class="mt-2 max-h-32 rounded" />
              })}
            </div>
          </form>
          <div class="flex justify-end space-x-4 mt-6">
            <button
              class="px-4 py-2 rounded border border-gray-300 text-gray-700 hover:bg-gray-100"
              on:click=move |_| on_cancel()
            >
              "Cancel"
            </button>
            <button
              class="px-4 py-2 rounded bg-green-600 text-white hover:bg-green-700"
              prop:disabled=move || uploading.get()
              on:click=move |_| submit()
            >
              "Save"
            </button>
          </div>
        </div>
      </div>
    }
}
