/// Options read once when the page starts up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupOptions {
    /// Apply the detected base path once the document is ready.
    pub auto_apply: bool,
}

impl Default for StartupOptions {
    fn default() -> Self {
        Self { auto_apply: true }
    }
}

impl StartupOptions {
    /// Build options from the page's auto-apply flag.
    ///
    /// `None` means the flag was never set. Only an explicit falsy value
    /// turns auto-apply off.
    #[must_use]
    pub fn from_flag(flag: Option<bool>) -> Self {
        Self {
            auto_apply: flag.unwrap_or(true),
        }
    }
}
