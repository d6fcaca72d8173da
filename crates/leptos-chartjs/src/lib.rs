//! Leptos Chart.js Utilities
//!
//! Bindings to the `Chart` global provided by the host page, plus a keyed
//! registry that owns every live chart. Charts are never mutated in place:
//! replacing a key destroys the previous instance before the new one is built.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Chart.js chart instance
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resize(this: &Chart) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn update(this: &Chart, mode: &str) -> Result<(), JsValue>;
}

/// Errors raised while building or redrawing a chart
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("canvas #{0} not found")]
    MissingCanvas(String),
    #[error("invalid chart config: {0}")]
    Config(String),
    #[error("Chart.js: {0}")]
    Js(String),
}

/// Best-effort text for a thrown JS value
fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

type JsCallback = Closure<dyn Fn(JsValue) -> JsValue>;

// ========================
// Chart Spec
// ========================

/// JSON chart configuration plus the JS callbacks Chart.js needs
/// (tick formatters, tooltip labels) that JSON cannot express.
pub struct ChartSpec {
    config: serde_json::Value,
    callbacks: Vec<(Vec<&'static str>, JsCallback)>,
}

impl ChartSpec {
    pub fn new(config: serde_json::Value) -> Self {
        Self {
            config,
            callbacks: Vec::new(),
        }
    }

    /// Attach a callback at `path` inside the config,
    /// e.g. `["options", "scales", "y", "ticks", "callback"]`.
    pub fn with_callback<F>(mut self, path: &[&'static str], callback: F) -> Self
    where
        F: Fn(JsValue) -> JsValue + 'static,
    {
        self.callbacks.push((path.to_vec(), Closure::new(callback)));
        self
    }

    fn into_js(self) -> Result<(JsValue, Vec<JsCallback>), ChartError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let config = self
            .config
            .serialize(&serializer)
            .map_err(|e| ChartError::Config(e.to_string()))?;

        let mut kept = Vec::with_capacity(self.callbacks.len());
        for (path, callback) in self.callbacks {
            set_path(&config, &path, callback.as_ref())?;
            kept.push(callback);
        }
        Ok((config, kept))
    }
}

/// Set `value` at a nested object path, creating intermediate objects
fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), ChartError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };

    let mut node = root.clone();
    for key in parents {
        let key = JsValue::from_str(key);
        let child = js_sys::Reflect::get(&node, &key).map_err(|e| ChartError::Config(js_error_message(&e)))?;
        node = if child.is_object() {
            child
        } else {
            let created: JsValue = js_sys::Object::new().into();
            js_sys::Reflect::set(&node, &key, &created).map_err(|e| ChartError::Config(js_error_message(&e)))?;
            created
        };
    }

    js_sys::Reflect::set(&node, &JsValue::from_str(last), value)
        .map_err(|e| ChartError::Config(js_error_message(&e)))?;
    Ok(())
}

// ========================
// Chart Handle
// ========================

/// Something the registry can dispose of and redraw
pub trait ChartInstance {
    fn destroy(&self) -> Result<(), ChartError>;
    fn redraw(&self) -> Result<(), ChartError>;
}

/// A live Chart.js chart together with the callbacks it references
pub struct ChartHandle {
    chart: Chart,
    _callbacks: Vec<JsCallback>,
}

impl ChartHandle {
    /// Build a chart on the canvas with the given element id
    pub fn create(canvas_id: &str, spec: ChartSpec) -> Result<Self, ChartError> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::MissingCanvas(canvas_id.to_string()))?;

        let (config, callbacks) = spec.into_js()?;
        let chart = Chart::new(&canvas, &config).map_err(|e| ChartError::Js(js_error_message(&e)))?;

        Ok(Self {
            chart,
            _callbacks: callbacks,
        })
    }
}

impl ChartInstance for ChartHandle {
    fn destroy(&self) -> Result<(), ChartError> {
        self.chart.destroy().map_err(|e| ChartError::Js(js_error_message(&e)))
    }

    fn redraw(&self) -> Result<(), ChartError> {
        self.chart.resize().map_err(|e| ChartError::Js(js_error_message(&e)))?;
        self.chart.update("none").map_err(|e| ChartError::Js(js_error_message(&e)))
    }
}

// ========================
// Registry
// ========================

/// Live charts keyed by `K`. Owns every handle it holds.
pub struct ChartRegistry<K, H = ChartHandle> {
    charts: HashMap<K, H>,
}

/// Registry handle shareable across Leptos closures (main thread only)
pub type SharedChartRegistry<K> = StoredValue<ChartRegistry<K>, LocalStorage>;

impl<K, H> Default for ChartRegistry<K, H> {
    fn default() -> Self {
        Self {
            charts: HashMap::new(),
        }
    }
}

impl<K, H> ChartRegistry<K, H>
where
    K: Eq + Hash + Copy + Debug,
    H: ChartInstance,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy whatever is registered under `key`, then build and register
    /// a fresh chart. On build failure the key stays empty.
    pub fn replace<F>(&mut self, key: K, build: F) -> Result<(), ChartError>
    where
        F: FnOnce() -> Result<H, ChartError>,
    {
        self.destroy(key);
        let chart = build()?;
        self.charts.insert(key, chart);
        Ok(())
    }

    /// Destroy and forget the chart under `key`. Returns whether one existed.
    pub fn destroy(&mut self, key: K) -> bool {
        match self.charts.remove(&key) {
            Some(chart) => {
                if let Err(e) = chart.destroy() {
                    log::warn!("[charts] destroy {:?} failed: {}", key, e);
                }
                true
            }
            None => false,
        }
    }

    /// Resize and redraw every chart. A failing chart does not stop the
    /// others; failures are returned per key.
    pub fn redraw_all(&self) -> Vec<(K, ChartError)> {
        self.charts
            .iter()
            .filter_map(|(key, chart)| chart.redraw().err().map(|e| (*key, e)))
            .collect()
    }

    /// Destroy every chart, e.g. when the page unmounts
    pub fn clear(&mut self) {
        let keys: Vec<K> = self.charts.keys().copied().collect();
        for key in keys {
            self.destroy(key);
        }
    }
}

impl<K: 'static> ChartRegistry<K, ChartHandle> {
    /// New registry stored in the reactive arena
    pub fn shared() -> SharedChartRegistry<K> {
        StoredValue::new_local(ChartRegistry {
            charts: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    struct FakeChart {
        name: &'static str,
        fail_redraw: bool,
        log: EventLog,
    }

    impl ChartInstance for FakeChart {
        fn destroy(&self) -> Result<(), ChartError> {
            self.log.borrow_mut().push(format!("destroy {}", self.name));
            Ok(())
        }

        fn redraw(&self) -> Result<(), ChartError> {
            self.log.borrow_mut().push(format!("redraw {}", self.name));
            if self.fail_redraw {
                Err(ChartError::Js("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn fake(name: &'static str, log: &EventLog) -> FakeChart {
        FakeChart {
            name,
            fail_redraw: false,
            log: log.clone(),
        }
    }

    #[test]
    fn test_replace_destroys_previous_before_building() {
        let log: EventLog = Rc::default();
        let mut registry: ChartRegistry<&str, FakeChart> = ChartRegistry::new();

        registry.replace("s-curve", || Ok(fake("first", &log))).unwrap();
        let build_log = log.clone();
        registry
            .replace("s-curve", || {
                build_log.borrow_mut().push("build second".to_string());
                Ok(fake("second", &build_log))
            })
            .unwrap();

        assert_eq!(registry.charts.len(), 1);
        assert_eq!(*log.borrow(), vec!["destroy first", "build second"]);
    }

    #[test]
    fn test_failed_build_leaves_key_empty() {
        let log: EventLog = Rc::default();
        let mut registry: ChartRegistry<&str, FakeChart> = ChartRegistry::new();

        registry.replace("workload", || Ok(fake("old", &log))).unwrap();
        let result = registry.replace("workload", || Err(ChartError::MissingCanvas("workload".into())));

        assert_eq!(result, Err(ChartError::MissingCanvas("workload".into())));
        assert!(!registry.charts.contains_key("workload"));
        assert_eq!(*log.borrow(), vec!["destroy old"]);
    }

    #[test]
    fn test_redraw_all_isolates_failures() {
        let log: EventLog = Rc::default();
        let mut registry: ChartRegistry<&str, FakeChart> = ChartRegistry::new();

        registry.replace("ok-1", || Ok(fake("ok-1", &log))).unwrap();
        registry
            .replace("bad", || {
                Ok(FakeChart {
                    name: "bad",
                    fail_redraw: true,
                    log: log.clone(),
                })
            })
            .unwrap();
        registry.replace("ok-2", || Ok(fake("ok-2", &log))).unwrap();

        let failures = registry.redraw_all();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "bad");
        let redraws = log.borrow().iter().filter(|e| e.starts_with("redraw")).count();
        assert_eq!(redraws, 3);
    }

    #[test]
    fn test_destroy_and_clear() {
        let log: EventLog = Rc::default();
        let mut registry: ChartRegistry<&str, FakeChart> = ChartRegistry::new();

        assert!(!registry.destroy("missing"));

        registry.replace("a", || Ok(fake("a", &log))).unwrap();
        registry.replace("b", || Ok(fake("b", &log))).unwrap();
        assert!(registry.destroy("a"));
        assert!(!registry.charts.contains_key("a"));

        registry.clear();
        assert!(registry.charts.is_empty());
        assert_eq!(*log.borrow(), vec!["destroy a", "destroy b"]);
        assert!(registry.redraw_all().is_empty());
        assert_eq!(log.borrow().len(), 2);
    }
}
