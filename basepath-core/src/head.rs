//! Installing the page's `<base>` directive through an injected document head.

use std::convert::Infallible;

use crate::environment::RuntimeSignal;
use crate::profile::{Profile, ProfileTable};

/// Access to the document head the base directive lives in.
/// Platform-specific implementations should provide this.
pub trait DocumentHead {
    type Node;
    type Error: std::error::Error + 'static;

    /// Locate the current base directive, if the page has one.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be queried.
    fn find_existing(&self) -> Result<Option<Self::Node>, Self::Error>;

    /// Detach a directive previously returned by [`DocumentHead::find_existing`].
    ///
    /// # Errors
    ///
    /// Returns an error if the node cannot be removed.
    fn remove(&mut self, node: Self::Node) -> Result<(), Self::Error>;

    /// Insert a new base directive with `href` as the head's first child.
    ///
    /// Runs after the old directive is removed. Implementations should resolve
    /// the head itself before that point.
    ///
    /// # Errors
    ///
    /// Returns an error if the directive cannot be created or inserted.
    fn insert_first(&mut self, href: &str) -> Result<(), Self::Error>;
}

/// Replace the page's base directive and return the profile it reflects.
///
/// A non-empty `override_path` is used verbatim as the only field of the
/// returned profile; otherwise the environment is detected from `signal`.
///
/// # Errors
///
/// Propagates any failure from the document head.
pub fn apply_base_path<H: DocumentHead>(
    head: &mut H,
    table: &ProfileTable,
    signal: &RuntimeSignal,
    override_path: Option<&str>,
) -> Result<Profile, H::Error> {
    let profile = match override_path.filter(|path| !path.is_empty()) {
        Some(path) => Profile::with_base(path),
        None => table.resolve(signal).clone(),
    };
    install_profile(head, profile)
}

/// Replace the page's base directive with `profile.base`, skipping detection.
///
/// # Errors
///
/// Propagates any failure from the document head.
pub fn install_profile<H: DocumentHead>(
    head: &mut H,
    profile: Profile,
) -> Result<Profile, H::Error> {
    if let Some(existing) = head.find_existing()? {
        head.remove(existing)?;
    }
    head.insert_first(&profile.base)?;

    log::info!("base path set to {}", profile.base);
    Ok(profile)
}

/// A child element of an in-memory head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadChild {
    Base { href: String },
    Other(String),
}

/// Document head kept in memory, for previews and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    children: Vec<HeadChild>,
}

impl MemoryHead {
    #[must_use]
    pub const fn new(children: Vec<HeadChild>) -> Self {
        Self { children }
    }

    #[must_use]
    pub fn children(&self) -> &[HeadChild] {
        &self.children
    }

    /// `href` of every base directive, in document order.
    #[must_use]
    pub fn base_hrefs(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|child| match child {
                HeadChild::Base { href } => Some(href.as_str()),
                HeadChild::Other(_) => None,
            })
            .collect()
    }
}

impl DocumentHead for MemoryHead {
    type Node = usize;
    type Error = Infallible;

    fn find_existing(&self) -> Result<Option<usize>, Infallible> {
        Ok(self
            .children
            .iter()
            .position(|child| matches!(child, HeadChild::Base { .. })))
    }

    fn remove(&mut self, node: usize) -> Result<(), Infallible> {
        if node < self.children.len() {
            self.children.remove(node);
        }
        Ok(())
    }

    fn insert_first(&mut self, href: &str) -> Result<(), Infallible> {
        self.children.insert(
            0,
            HeadChild::Base {
                href: href.to_string(),
            },
        );
        Ok(())
    }
}
