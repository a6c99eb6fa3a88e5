//! JavaScript entry points.

use basepath_core::{DEFAULT_FIELD, ProfileTable};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::page;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Profile (`{ base, assets, games }`) for the current page.
///
/// # Errors
/// Throws if `window.location` cannot be read.
#[wasm_bindgen(js_name = getEnvironmentProfile)]
pub fn get_environment_profile() -> Result<JsValue, JsValue> {
    to_js(page::current_profile()?)
}

/// Name of the environment the current page is served from.
///
/// # Errors
/// Throws if `window.location` cannot be read.
#[wasm_bindgen(js_name = currentEnvironment)]
pub fn current_environment() -> Result<String, JsValue> {
    Ok(page::current_environment()?.as_str().to_string())
}

/// Replace the page's `<base>` element. An override path skips detection.
///
/// # Errors
/// Throws if the document head cannot be modified.
#[wasm_bindgen(js_name = applyBasePath)]
pub fn apply_base_path(override_path: Option<String>) -> Result<JsValue, JsValue> {
    let profile = page::patch_document(override_path.as_deref())?;
    to_js(&profile)
}

/// Join `relative` onto the current profile's `field` prefix (`assets` by default).
///
/// # Errors
/// Throws if `window.location` cannot be read.
#[wasm_bindgen(js_name = buildAssetPath)]
pub fn build_asset_path(relative: &str, field: Option<String>) -> Result<String, JsValue> {
    Ok(page::asset_url(
        relative,
        field.as_deref().unwrap_or(DEFAULT_FIELD),
    )?)
}

/// All four built-in profiles keyed by environment name.
///
/// # Errors
/// Throws if the table cannot be converted to a JS object.
#[wasm_bindgen(js_name = profileTable)]
pub fn profile_table() -> Result<JsValue, JsValue> {
    to_js(ProfileTable::builtin())
}
