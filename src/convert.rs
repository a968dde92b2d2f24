//! JsValue <-> core type conversions. Structured values travel as JSON text
//! so the core types only need their serde derives.

use serde::Serialize;
use viewer_core::{PoseInput, SignalValue, ViewerConfig};
use wasm_bindgen::JsValue;

fn js_err(msg: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&msg.to_string())
}

fn stringify(value: &JsValue) -> Result<String, JsValue> {
    js_sys::JSON::stringify(value)?
        .as_string()
        .ok_or_else(|| js_err("value is not JSON serialisable"))
}

pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value).map_err(js_err)?;
    js_sys::JSON::parse(&text)
}

/// Signals arrive as whatever the host had at hand: booleans, numbers,
/// strings or nothing.
pub fn signal_value(value: &JsValue) -> SignalValue {
    if let Some(b) = value.as_bool() {
        SignalValue::Bool(b)
    } else if let Some(n) = value.as_f64() {
        SignalValue::Number(n)
    } else if let Some(s) = value.as_string() {
        SignalValue::Text(s)
    } else if value.is_null() || value.is_undefined() {
        SignalValue::Null
    } else {
        // Objects and the like are not numbers and not flags.
        SignalValue::Text(stringify(value).unwrap_or_default())
    }
}

/// `null`/`undefined` means "use the live camera".
pub fn pose_input(value: &JsValue) -> Result<Option<PoseInput>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let text = stringify(value)?;
    serde_json::from_str(&text).map(Some).map_err(js_err)
}

pub fn viewer_config(value: &JsValue) -> Result<ViewerConfig, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(ViewerConfig::default());
    }
    let text = stringify(value)?;
    ViewerConfig::from_json(&text).map_err(js_err)
}
