//! Account dropdown with `aria-expanded` kept in step with its open class.
//!
//! # Design
//! - The toggle click stops propagation so the document-level close handler
//!   never sees the click that opened the menu.
//! - Outside clicks are any click whose target is not within the toggle.

use std::rc::Rc;

use tracing::debug;

use crate::core::config::UiConfig;
use crate::core::dom::{DomDocument, DomElement, Propagation};

/// Accessibility attribute mirrored onto the toggle button.
pub const ARIA_EXPANDED: &str = "aria-expanded";

/// Dropdown container and its toggle button.
pub struct UserMenu<E> {
    container: E,
    button: E,
    open_class: String,
}

impl<E: DomElement> UserMenu<E> {
    /// Build without registering any listener.
    pub fn new(container: E, button: E, open_class: impl Into<String>) -> Self {
        Self {
            container,
            button,
            open_class: open_class.into(),
        }
    }

    /// Wire the dropdown. Returns `None` when the container or its button is
    /// missing.
    pub fn attach<D>(document: &D, config: &UiConfig) -> Option<Rc<Self>>
    where
        D: DomDocument<Element = E>,
    {
        let Some(container) = document.element_by_id(&config.user_dropdown_id) else {
            debug!(id = %config.user_dropdown_id, "user dropdown absent; skipping");
            return None;
        };
        let Some(button) = container.query_selector(&config.dropdown_button_selector) else {
            debug!(
                selector = %config.dropdown_button_selector,
                "user dropdown has no toggle button; skipping"
            );
            return None;
        };

        let menu = Rc::new(Self::new(container, button, config.open_class.clone()));
        {
            let handle = Rc::clone(&menu);
            document.on_click(
                &menu.button,
                Box::new(move |_| {
                    handle.toggle();
                    Propagation::Stop
                }),
            );
        }
        {
            let handle = Rc::clone(&menu);
            document.on_document_click(Box::new(move |target| {
                if !target.is_some_and(|target| handle.button.contains(target)) {
                    handle.close();
                }
            }));
        }
        Some(menu)
    }

    /// Flip the dropdown and sync `aria-expanded`. Returns the new state.
    pub fn toggle(&self) -> bool {
        let open = self.container.toggle_class(&self.open_class);
        self.sync_expanded(open);
        open
    }

    /// Collapse the dropdown and mark the button collapsed.
    pub fn close(&self) {
        if self.container.has_class(&self.open_class) {
            self.container.remove_class(&self.open_class);
        }
        self.sync_expanded(false);
    }

    /// Whether the dropdown is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.container.has_class(&self.open_class)
    }

    /// Current `aria-expanded` value on the toggle button.
    #[must_use]
    pub fn expanded(&self) -> Option<String> {
        self.button.attribute(ARIA_EXPANDED)
    }

    fn sync_expanded(&self, open: bool) {
        self.button
            .set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" });
    }
}
