//! Project Map
//!
//! Leaflet bindings and the single map instance shown on the summary tab.
//! The map is created once; each summary load swaps the marker set.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::{MAP_CENTER, MAP_FIT_PADDING, MAP_ZOOM, TILE_ATTRIBUTION, TILE_MAX_ZOOM, TILE_URL};
use crate::error::js_error_message;
use crate::models::Location;
use crate::tables::location_popup_html;

pub const MAP_ELEMENT_ID: &str = "map";

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn create_map(element_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &LeafletMap, layer: &Marker);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker, catch)]
    fn create_marker(lat_lng: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    type FeatureGroup;

    #[wasm_bindgen(js_namespace = L, js_name = featureGroup)]
    fn feature_group(layers: &js_sys::Array) -> FeatureGroup;

    #[wasm_bindgen(method, js_name = getBounds)]
    fn get_bounds(this: &FeatureGroup) -> JsValue;
}

fn lat_lng(lat: f64, lng: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng)).into()
}

/// Locations that can be placed: both coordinates present and non-zero
pub fn located(locations: &[Location]) -> Vec<(f64, f64, &Location)> {
    locations
        .iter()
        .filter_map(|loc| match (loc.lat, loc.lng) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 && lat.is_finite() && lng.is_finite() => {
                Some((lat, lng, loc))
            }
            _ => None,
        })
        .collect()
}

pub struct MapView {
    map: LeafletMap,
    markers: Vec<Marker>,
}

impl MapView {
    /// Create the map centered on Indonesia with OpenStreetMap tiles
    pub fn init(element_id: &str) -> Result<Self, String> {
        let map = create_map(element_id).map_err(|e| js_error_message(&e))?;
        map.set_view(&lat_lng(MAP_CENTER.0, MAP_CENTER.1), MAP_ZOOM);

        let tile_options = serde_json::json!({
            "attribution": TILE_ATTRIBUTION,
            "maxZoom": TILE_MAX_ZOOM,
        });
        let tile_options = tile_options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        tile_layer(TILE_URL, &tile_options).add_tiles_to(&map);

        log::info!("[map] initialized");
        Ok(Self {
            map,
            markers: Vec::new(),
        })
    }

    /// Remove every marker, add one per located entry, fit bounds if any
    pub fn replace_markers(&mut self, locations: &[Location]) {
        for marker in self.markers.drain(..) {
            self.map.remove_layer(&marker);
        }

        for (lat, lng, location) in located(locations) {
            match create_marker(&lat_lng(lat, lng)) {
                Ok(marker) => {
                    marker.add_marker_to(&self.map);
                    marker.bind_popup(&location_popup_html(location));
                    self.markers.push(marker);
                }
                Err(e) => log::error!("[map] marker failed: {}", js_error_message(&e)),
            }
        }

        if !self.markers.is_empty() {
            let layers: js_sys::Array = self.markers.iter().map(|m| AsRef::<JsValue>::as_ref(m).clone()).collect();
            let bounds = feature_group(&layers).get_bounds();
            let padding = lat_lng(MAP_FIT_PADDING as f64, MAP_FIT_PADDING as f64);
            let options = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&options, &JsValue::from_str("padding"), &padding);
            self.map.fit_bounds(&bounds, &options);
        }
    }

    /// Recompute size after the container was hidden
    pub fn refresh_size(&self) {
        self.map.invalidate_size();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(name: &str, lat: Option<f64>, lng: Option<f64>) -> Location {
        Location {
            name: Some(name.to_string()),
            lat,
            lng,
            ..Default::default()
        }
    }

    #[test]
    fn test_located_requires_both_coordinates() {
        let locations = vec![
            loc("Jakarta", Some(-6.2), Some(106.8)),
            loc("No lng", Some(-6.2), None),
            loc("No lat", None, Some(106.8)),
            loc("Zero", Some(0.0), Some(106.8)),
            loc("Makassar", Some(-5.14), Some(119.43)),
        ];
        let names: Vec<&str> = located(&locations)
            .into_iter()
            .filter_map(|(_, _, l)| l.name.as_deref())
            .collect();
        assert_eq!(names, vec!["Jakarta", "Makassar"]);
    }

    #[test]
    fn test_located_empty() {
        assert!(located(&[]).is_empty());
    }
}
