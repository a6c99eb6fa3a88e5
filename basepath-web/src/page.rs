//! Base path operations against the live page.
//!
//! These read the hostname and protocol from `window.location` and use the
//! built-in profile table.

use basepath_core::{Environment, Profile, ProfileTable, apply_base_path, build_asset_path};

use crate::dom::{self, DomError, WebDocumentHead};

/// Environment the current page is served from.
///
/// # Errors
/// Returns an error if `window.location` cannot be read.
pub fn current_environment() -> Result<Environment, DomError> {
    let signal = dom::runtime_signal(&dom::window()?)?;
    Ok(basepath_core::resolve_environment(&signal))
}

/// Profile for the current page.
///
/// # Errors
/// Returns an error if `window.location` cannot be read.
pub fn current_profile() -> Result<&'static Profile, DomError> {
    Ok(ProfileTable::builtin().get(current_environment()?))
}

/// Replace the page's `<base>` element and return the profile applied.
///
/// # Errors
/// Returns an error if the document head cannot be read or modified.
pub fn patch_document(override_path: Option<&str>) -> Result<Profile, DomError> {
    let window = dom::window()?;
    let signal = dom::runtime_signal(&window)?;
    let mut head = WebDocumentHead::current()?;
    apply_base_path(&mut head, ProfileTable::builtin(), &signal, override_path)
}

/// URL for `relative` under the current profile's `field` prefix.
///
/// # Errors
/// Returns an error if `window.location` cannot be read.
pub fn asset_url(relative: &str, field: &str) -> Result<String, DomError> {
    let signal = dom::runtime_signal(&dom::window()?)?;
    Ok(build_asset_path(
        ProfileTable::builtin(),
        &signal,
        relative,
        field,
    ))
}
