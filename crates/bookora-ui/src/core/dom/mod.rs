//! DOM abstraction the components are written against.
//!
//! # Design
//! - Every lookup returns an `Option`; components skip work when a binding is
//!   absent instead of failing.
//! - Event wiring is explicit observer registration on the document, so the
//!   same component code runs against the browser and against
//!   [`memory::MemoryDocument`].
//! - Mutations are infallible at this layer; host implementations log and
//!   absorb rejected writes.

pub mod memory;
mod selector;

/// Whether a click continues to bubble after an element-level handler ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Let ancestors and document-level handlers see the click.
    Continue,
    /// Stop the click at the current element.
    Stop,
}

/// Element-level click handler. Receives the original event target.
pub type ClickHandler<E> = Box<dyn Fn(Option<&E>) -> Propagation>;
/// Document-level click handler. Receives the original event target.
pub type DocumentClickHandler<E> = Box<dyn Fn(Option<&E>)>;
/// Change handler for form inputs.
pub type ChangeHandler = Box<dyn Fn()>;

/// Handle to a live element.
pub trait DomElement: Clone + 'static {
    /// Attribute value, if set.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Set an attribute value.
    fn set_attribute(&self, name: &str, value: &str);
    /// Whether the class list contains `class`.
    fn has_class(&self, class: &str) -> bool;
    /// Add `class` to the class list.
    fn add_class(&self, class: &str);
    /// Remove `class` from the class list.
    fn remove_class(&self, class: &str);
    /// Flip `class`, returning whether it is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self>;
    /// Current form value (empty for non-inputs).
    fn value(&self) -> String;
}

/// Handle to the page hosting the elements.
pub trait DomDocument: Clone + 'static {
    /// Element type produced by lookups.
    type Element: DomElement;

    /// The document root element (`<html>`).
    fn root(&self) -> Option<Self::Element>;
    /// Element carrying `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// First element matching `selector` in document order.
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
    /// Every element matching `selector` in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;
    /// Register a click handler on `element`.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler<Self::Element>);
    /// Register a click handler on the document itself.
    fn on_document_click(&self, handler: DocumentClickHandler<Self::Element>);
    /// Register a change handler on `element`.
    fn on_change(&self, element: &Self::Element, handler: ChangeHandler);
}
