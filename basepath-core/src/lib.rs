//! Base path resolution
//!
//! Platform-agnostic detection of the deployment environment a page is served
//! from, and the URL prefixes that environment uses for assets and games.
//! Browser bindings live in `basepath-web`.

#![forbid(unsafe_code)]

pub mod environment;
pub mod head;
pub mod paths;
pub mod profile;
pub mod startup;

pub use environment::{Environment, RuntimeSignal, resolve_environment};
pub use head::{DocumentHead, HeadChild, MemoryHead, apply_base_path, install_profile};
pub use paths::{DEFAULT_FIELD, build_asset_path, join_path};
pub use profile::{ConfigError, PathField, Profile, ProfileTable};
pub use startup::StartupOptions;
