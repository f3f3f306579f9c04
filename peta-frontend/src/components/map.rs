use leptos::*;
use leptos_leaflet::{position, MapContainer, Marker, Popup, Position, TileLayer};

use peta_boundary::MapPoint;
use peta_entities::pin::PinLocation;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[component]
pub fn Map(center: MapPoint, pins: Signal<Vec<PinLocation>>) -> impl IntoView {
    let center = Position::new(center.lat, center.lng);

    view! {
      <MapContainer
        class="h-full w-full"
        center
        zoom=13.0
        set_view=true
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <For
          each=move || pins.get()
          key=|pin| pin.id.clone()
          children=|pin: PinLocation| {
            let PinLocation {
                name,
                category,
                lat,
                lng,
                address,
                operating_hours,
                ..
            } = pin;
            view! {
              <Marker position=position!(lat, lng)>
                <Popup>
                  <strong>{ name }</strong>
                  <p>{ address }</p>
                  <p class="text-sm">{ String::from(category) }</p>
                  <p class="text-sm">{ operating_hours }</p>
                </Popup>
              </Marker>
            }
          }
        />
      </MapContainer>
    }
}
