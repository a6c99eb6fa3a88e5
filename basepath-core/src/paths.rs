//! Helpers for constructing asset and game URLs against the resolved deployment profile.

use crate::environment::RuntimeSignal;
use crate::profile::ProfileTable;

/// Selector used when callers don't name a profile field.
pub const DEFAULT_FIELD: &str = "assets";

/// Build a URL for `relative` under the resolved profile's `field` prefix.
///
/// Unknown selectors, and fields the profile doesn't carry, fall back to the
/// profile's `base`.
#[must_use]
pub fn build_asset_path(
    table: &ProfileTable,
    signal: &RuntimeSignal,
    relative: &str,
    field: &str,
) -> String {
    join_path(table.resolve(signal).select(field), relative)
}

/// Join a prefix and a relative path with exactly one separating slash.
///
/// Only one leading slash is stripped from `relative`.
#[must_use]
pub fn join_path(prefix: &str, relative: &str) -> String {
    let rel = relative.strip_prefix('/').unwrap_or(relative);
    if prefix.ends_with('/') {
        format!("{prefix}{rel}")
    } else {
        format!("{prefix}/{rel}")
    }
}
