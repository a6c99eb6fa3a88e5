use basepath_core::{DocumentHead, RuntimeSignal};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlHeadElement, Window};

/// Failures surfaced by browser DOM calls.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("`window` is unavailable outside a browser context")]
    MissingWindow,
    #[error("`document` is unavailable in this browser context")]
    MissingDocument,
    #[error("document has no <head>")]
    MissingHead,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`DomError::MissingWindow`] outside a browser context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::MissingWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when the window or its document cannot be accessed.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::MissingDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Read the hostname and protocol from `window.location`.
///
/// # Errors
/// Returns an error if the location cannot be read.
pub fn runtime_signal(window: &Window) -> Result<RuntimeSignal, DomError> {
    let location = window.location();
    Ok(RuntimeSignal::new(location.hostname()?, location.protocol()?))
}

/// The live document's `<head>`, as seen by the base path patcher.
///
/// The `<head>` is looked up on construction, so a page without one is
/// rejected before its existing `<base>` can be removed.
pub struct WebDocumentHead {
    document: Document,
    head: HtmlHeadElement,
}

impl WebDocumentHead {
    /// Wrap `document`, which must already have a `<head>`.
    ///
    /// # Errors
    /// Returns [`DomError::MissingHead`] when the document has no `<head>`.
    pub fn new(document: Document) -> Result<Self, DomError> {
        let head = document.head().ok_or(DomError::MissingHead)?;
        Ok(Self { document, head })
    }

    /// Head of the current page.
    ///
    /// # Errors
    /// Returns an error when no document or `<head>` is available.
    pub fn current() -> Result<Self, DomError> {
        Self::new(document()?)
    }
}

impl DocumentHead for WebDocumentHead {
    type Node = Element;
    type Error = DomError;

    fn find_existing(&self) -> Result<Option<Element>, DomError> {
        Ok(self.document.query_selector("base")?)
    }

    fn remove(&mut self, node: Element) -> Result<(), DomError> {
        node.remove();
        Ok(())
    }

    fn insert_first(&mut self, href: &str) -> Result<(), DomError> {
        let base = self.document.create_element("base")?;
        base.set_attribute("href", href)?;
        self.head
            .insert_before(&base, self.head.first_child().as_ref())?;
        Ok(())
    }
}
