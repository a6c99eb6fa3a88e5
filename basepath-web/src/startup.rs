use basepath_core::StartupOptions;
use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::DomError;
use crate::page;

/// Window property that can turn off applying the base path on load.
pub const AUTO_APPLY_FLAG: &str = "AUTO_SET_BASE_PATH";

/// Read the auto-apply flag from `window`.
///
/// An undefined property counts as unset; anything else is judged by JS truthiness.
#[must_use]
pub fn startup_options(window: &Window) -> StartupOptions {
    let flag = Reflect::get(window, &JsValue::from_str(AUTO_APPLY_FLAG))
        .ok()
        .filter(|value| !value.is_undefined())
        .map(|value| value.is_truthy());
    StartupOptions::from_flag(flag)
}

/// Apply the detected base path once the document is ready.
///
/// Applies immediately when the DOM has already been parsed, otherwise waits
/// for `DOMContentLoaded`.
///
/// # Errors
/// Returns an error if the listener cannot be registered or the immediate patch fails.
pub fn schedule_auto_apply(document: &Document, options: StartupOptions) -> Result<(), DomError> {
    if !options.auto_apply {
        log::debug!("{AUTO_APPLY_FLAG} is off; leaving <base> untouched");
        return Ok(());
    }

    if document.ready_state() != "loading" {
        page::patch_document(None)?;
        return Ok(());
    }

    let on_ready = Closure::once_into_js(|| {
        if let Err(err) = page::patch_document(None) {
            log::error!("Failed to apply base path: {err}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}
