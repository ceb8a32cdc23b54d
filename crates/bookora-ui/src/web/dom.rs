//! `web-sys` implementations of the DOM traits.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

use crate::core::dom::{
    ChangeHandler, ClickHandler, DocumentClickHandler, DomDocument, DomElement, Propagation,
};
use crate::core::error::UiError;

/// Live browser element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(Element);

impl WebElement {
    /// Wrap a `web-sys` element.
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }
}

impl DomElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log_dom_error("set_attribute", &err);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log_dom_error("add_class", &err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log_dom_error("remove_class", &err);
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log_dom_error("toggle_class", &err);
                self.has_class(class)
            }
        }
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(Self)
    }

    fn value(&self) -> String {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }
}

/// Live browser document. Listeners stay registered until [`WebDocument::persist`]
/// hands them to the page or the document handle is dropped.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
    listeners: Rc<RefCell<Vec<EventListener>>>,
}

impl WebDocument {
    /// Wrap a `web-sys` document.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Keep every registered listener alive for the lifetime of the page.
    pub fn persist(&self) {
        for listener in self.listeners.borrow_mut().drain(..) {
            listener.forget();
        }
    }

    fn keep(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl DomDocument for WebDocument {
    type Element = WebElement;

    fn root(&self) -> Option<WebElement> {
        self.document.document_element().map(WebElement)
    }

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.document.get_element_by_id(id).map(WebElement)
    }

    fn query_selector(&self, selector: &str) -> Option<WebElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<WebElement> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|idx| nodes.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn on_click(&self, element: &WebElement, handler: ClickHandler<WebElement>) {
        let listener = EventListener::new(&element.0, "click", move |event| {
            let target = event_target(event);
            if handler(target.as_ref()) == Propagation::Stop {
                event.stop_propagation();
            }
        });
        self.keep(listener);
    }

    fn on_document_click(&self, handler: DocumentClickHandler<WebElement>) {
        let listener = EventListener::new(&self.document, "click", move |event| {
            handler(event_target(event).as_ref());
        });
        self.keep(listener);
    }

    fn on_change(&self, element: &WebElement, handler: ChangeHandler) {
        let listener = EventListener::new(&element.0, "change", move |_event| handler());
        self.keep(listener);
    }
}

fn event_target(event: &web_sys::Event) -> Option<WebElement> {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .map(WebElement)
}

fn log_dom_error(operation: &'static str, err: &JsValue) {
    let err = UiError::dom(operation, format!("{err:?}"));
    warn!(error = %err, detail = ?err, "dom mutation rejected");
}
