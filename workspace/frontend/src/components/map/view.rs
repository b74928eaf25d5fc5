use super::markers::markers_for;
use common::Forecast;
use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const MAP_CONTAINER_ID: &str = "envhealth-map";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

// Initial view over Jaipur.
const DEFAULT_CENTER: (f64, f64) = (26.9124, 75.7873);
const DEFAULT_ZOOM: f64 = 10.0;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn leaflet_map(id: &str) -> LeafletMap;
    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    pub type TileLayer;
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;
    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type LayerGroup;
    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;
    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_map(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;
    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup);

    pub type CircleMarker;
    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    fn circle_marker(latlng: &Array, options: &JsValue) -> CircleMarker;
    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &CircleMarker, html: &str) -> CircleMarker;
    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to_group(this: &CircleMarker, group: &LayerGroup) -> CircleMarker;
}

#[derive(Serialize)]
struct CircleMarkerOptions {
    color: &'static str,
    radius: f64,
    #[serde(rename = "fillOpacity")]
    fill_opacity: f64,
}

#[derive(Serialize)]
struct TileLayerOptions {
    attribution: &'static str,
}

fn latlng(lat: f64, lon: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon))
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast: Option<Forecast>,
}

/// Leaflet-backed map of monitored locations. The map instance is created
/// once and kept in a ref; marker layers are rebuilt whenever the forecast
/// prop changes, so stable iteration over the locations is all that drives
/// the draw order.
#[function_component(MapView)]
pub fn map_view(props: &Props) -> Html {
    let map_handle = use_mut_ref(|| None::<(LeafletMap, LayerGroup)>);

    use_effect_with(props.forecast.clone(), {
        let map_handle = map_handle.clone();
        move |forecast: &Option<Forecast>| {
            let mut slot = map_handle.borrow_mut();
            if slot.is_none() {
                log::debug!("Initializing Leaflet map");
                let map = leaflet_map(MAP_CONTAINER_ID);
                let _ = map.set_view(
                    &latlng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                    DEFAULT_ZOOM,
                );
                let tile_options = serde_wasm_bindgen::to_value(&TileLayerOptions {
                    attribution: TILE_ATTRIBUTION,
                })
                .unwrap_or(JsValue::NULL);
                let _ = tile_layer(TILE_URL, &tile_options).add_to(&map);
                let group = layer_group();
                let _ = group.add_to_map(&map);
                *slot = Some((map, group));
            }

            if let Some((_, group)) = slot.as_ref() {
                group.clear_layers();
                let markers = markers_for(forecast.as_ref());
                log::debug!("Drawing {} map markers", markers.len());
                for spec in markers {
                    let options = serde_wasm_bindgen::to_value(&CircleMarkerOptions {
                        color: spec.color,
                        radius: spec.radius,
                        fill_opacity: 0.4,
                    })
                    .unwrap_or(JsValue::NULL);
                    let _ = circle_marker(&latlng(spec.lat, spec.lon), &options)
                        .bind_popup(&spec.popup_html())
                        .add_to_group(group);
                }
            }

            || ()
        }
    });

    html! {
        <div id={MAP_CONTAINER_ID} class="rounded" style="height: 24rem;"></div>
    }
}
