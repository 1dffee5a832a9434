use serde::Serialize;
use wasm_bindgen::prelude::*;

use fretlog::{FretlogError, Note, NoteName};

#[derive(Serialize, Debug)]
struct BindingError {
    message: String,
    kind: &'static str,
}

impl From<FretlogError> for BindingError {
    fn from(e: FretlogError) -> Self {
        let kind = match &e {
            FretlogError::ConfigError(_) => "config",
            FretlogError::InvalidNote(_) => "note",
            FretlogError::InvalidInterval { .. } => "interval",
            FretlogError::Json(_) => "json",
            FretlogError::Io { .. } => "io",
            FretlogError::Usage(_) => "usage",
        };
        BindingError {
            message: e.to_string(),
            kind,
        }
    }
}

fn to_js_error(e: BindingError) -> JsValue {
    JsValue::from_str(&serde_json::to_string(&e).unwrap_or_else(|_| e.message.clone()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BindingError> {
    serde_json::to_string(value).map_err(|e| BindingError::from(FretlogError::Json(e)))
}

fn label_hierarchy_json(labels_json: &str, durations_json: Option<&str>) -> Result<String, BindingError> {
    let labels = fretlog::labels_from_json(labels_json, durations_json)?;
    to_json(&labels)
}

fn scale_json(definition: &str) -> Result<String, BindingError> {
    to_json(&fretlog::scale_from_yaml(definition)?)
}

fn fretboard_json(definition: &str) -> Result<String, BindingError> {
    to_json(&fretlog::fretboard_from_yaml(definition)?)
}

fn normalized_root(note: &str) -> Result<Note, BindingError> {
    Ok(note.parse::<Note>()?.normalize_root())
}

fn parse_letter(letter: &str) -> Result<NoteName, BindingError> {
    let note: Note = letter.parse()?;
    Ok(note.name)
}

/// Rebuild `children` on a label listing response. Returns the labels as a JSON array.
#[wasm_bindgen]
pub fn build_label_hierarchy(labels_json: &str) -> Result<String, JsValue> {
    label_hierarchy_json(labels_json, None).map_err(to_js_error)
}

/// Rebuild `children` and merge the duration endpoint's minutes into the labels.
#[wasm_bindgen]
pub fn merge_label_durations(labels_json: &str, durations_json: &str) -> Result<String, JsValue> {
    label_hierarchy_json(labels_json, Some(durations_json)).map_err(to_js_error)
}

/// Normalize a root picked in the selector, e.g. "B#" becomes `{name: "C", accidental: "natural"}`.
#[wasm_bindgen]
pub fn normalize_root(note: &str) -> Result<JsValue, JsValue> {
    let root = normalized_root(note).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&root).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Accidentals the selector offers for a root letter.
#[wasm_bindgen]
pub fn allowed_accidentals(letter: &str) -> Result<JsValue, JsValue> {
    let name = parse_letter(letter).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&name.allowed_accidentals().to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Derive the scale for a YAML definition. Returns JSON.
#[wasm_bindgen]
pub fn derive_scale(definition: &str) -> Result<String, JsValue> {
    scale_json(definition).map_err(to_js_error)
}

/// Derive the scale for a YAML definition and lay it out on the neck. Returns JSON.
#[wasm_bindgen]
pub fn fretboard(definition: &str) -> Result<String, JsValue> {
    fretboard_json(definition).map_err(to_js_error)
}
