//! Mobile navigation panel toggled by the menu button.

use std::rc::Rc;

use tracing::debug;

use crate::core::config::UiConfig;
use crate::core::dom::{DomDocument, DomElement, Propagation};

/// Navigation panel plus the button that opens it.
pub struct ResponsiveNav<E> {
    toggle: E,
    panel: E,
    open_class: String,
}

impl<E: DomElement> ResponsiveNav<E> {
    /// Build without registering any listener.
    pub fn new(toggle: E, panel: E, open_class: impl Into<String>) -> Self {
        Self {
            toggle,
            panel,
            open_class: open_class.into(),
        }
    }

    /// Wire the toggle button and the outside-click close. Returns `None`
    /// when either element is missing.
    pub fn attach<D>(document: &D, config: &UiConfig) -> Option<Rc<Self>>
    where
        D: DomDocument<Element = E>,
    {
        let (Some(toggle), Some(panel)) = (
            document.element_by_id(&config.menu_toggle_id),
            document.element_by_id(&config.navbar_id),
        ) else {
            debug!(
                toggle = %config.menu_toggle_id,
                panel = %config.navbar_id,
                "responsive nav bindings absent; skipping"
            );
            return None;
        };

        let nav = Rc::new(Self::new(toggle, panel, config.open_class.clone()));
        {
            let handle = Rc::clone(&nav);
            document.on_click(
                &nav.toggle,
                Box::new(move |_| {
                    handle.toggle();
                    Propagation::Continue
                }),
            );
        }
        {
            let handle = Rc::clone(&nav);
            document.on_document_click(Box::new(move |target| {
                if !target.is_some_and(|target| handle.owns(target)) {
                    handle.close();
                }
            }));
        }
        Some(nav)
    }

    /// Flip the panel, returning whether it is now open.
    pub fn toggle(&self) -> bool {
        self.panel.toggle_class(&self.open_class)
    }

    /// Collapse the panel.
    pub fn close(&self) {
        if self.is_open() {
            self.panel.remove_class(&self.open_class);
        }
    }

    /// Whether the panel is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.has_class(&self.open_class)
    }

    fn owns(&self, target: &E) -> bool {
        self.panel.contains(target) || self.toggle.contains(target)
    }
}
