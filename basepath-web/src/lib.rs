#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod dom;
pub mod page;
pub mod startup;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A logger may already be installed by the host page's own wasm module.
    let _ = console_log::init_with_level(log::Level::Info);

    let scheduled = dom::window().and_then(|window| {
        let options = startup::startup_options(&window);
        let document = window.document().ok_or(dom::DomError::MissingDocument)?;
        startup::schedule_auto_apply(&document, options)
    });
    if let Err(err) = scheduled {
        log::error!("Failed to schedule base path: {err}");
    }
}
