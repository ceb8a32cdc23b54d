//! Show/hide buttons for password inputs.
//!
//! Each button names its input through the toggle attribute (a CSS selector).
//! The input is resolved on every click, so a selector that matches nothing
//! leaves the button inert.

use std::rc::Rc;

use tracing::debug;

use crate::core::config::UiConfig;
use crate::core::dom::{DomDocument, DomElement, Propagation};

/// Glyph shown while the password is masked (invites revealing).
pub const EYE_ICON: &str = "fa-eye";
/// Glyph shown while the password is revealed (invites masking).
pub const EYE_SLASH_ICON: &str = "fa-eye-slash";

/// Rendering mode of a password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordFieldState {
    /// Rendered as `type="password"`.
    Masked,
    /// Rendered as `type="text"`.
    Revealed,
}

impl PasswordFieldState {
    /// Derive the state from an input's `type` attribute.
    #[must_use]
    pub fn from_input_type(input_type: Option<&str>) -> Self {
        match input_type {
            Some(kind) if kind.eq_ignore_ascii_case("password") => Self::Masked,
            _ => Self::Revealed,
        }
    }

    /// The opposite state.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// `type` attribute rendering this state.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// Icon glyph shown for this state.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Masked => EYE_ICON,
            Self::Revealed => EYE_SLASH_ICON,
        }
    }
}

/// One toggle button bound to one password input.
pub struct PasswordVisibilityToggle<D: DomDocument> {
    document: D,
    button: D::Element,
    target: String,
}

impl<D: DomDocument> PasswordVisibilityToggle<D> {
    /// Wire every toggle button on the page. Buttons with an empty target
    /// selector are skipped.
    pub fn attach_all(document: &D, config: &UiConfig) -> Vec<Rc<Self>> {
        let toggles: Vec<Rc<Self>> = document
            .query_selector_all(&config.password_toggle_selector())
            .into_iter()
            .filter_map(|button| {
                let target = button
                    .attribute(&config.password_toggle_attribute)
                    .filter(|selector| !selector.trim().is_empty())?;
                Some(Self::attach(document, button, target))
            })
            .collect();
        debug!(count = toggles.len(), "password toggles bound");
        toggles
    }

    /// Wire a single button to the input matched by `target`.
    pub fn attach(document: &D, button: D::Element, target: String) -> Rc<Self> {
        let toggle = Rc::new(Self {
            document: document.clone(),
            button,
            target,
        });
        let handle = Rc::clone(&toggle);
        document.on_click(
            &toggle.button,
            Box::new(move |_| {
                handle.toggle();
                Propagation::Continue
            }),
        );
        toggle
    }

    /// Selector naming the controlled input.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Flip the input between masked and revealed. Returns `None` when the
    /// input cannot be found.
    pub fn toggle(&self) -> Option<PasswordFieldState> {
        let input = self.document.query_selector(&self.target)?;
        let next = PasswordFieldState::from_input_type(input.attribute("type").as_deref()).flipped();
        input.set_attribute("type", next.input_type());
        if let Some(icon) = self.button.query_selector("i") {
            icon.remove_class(next.flipped().icon_class());
            icon.add_class(next.icon_class());
        }
        Some(next)
    }

    /// Current state of the controlled input, if present.
    #[must_use]
    pub fn state(&self) -> Option<PasswordFieldState> {
        self.document
            .query_selector(&self.target)
            .map(|input| PasswordFieldState::from_input_type(input.attribute("type").as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::memory::MemoryDocument;

    #[test]
    fn state_follows_input_type() {
        assert_eq!(
            PasswordFieldState::from_input_type(Some("password")),
            PasswordFieldState::Masked
        );
        assert_eq!(
            PasswordFieldState::from_input_type(Some("text")),
            PasswordFieldState::Revealed
        );
        assert_eq!(
            PasswordFieldState::from_input_type(None),
            PasswordFieldState::Revealed
        );
        assert_eq!(PasswordFieldState::Masked.icon_class(), EYE_ICON);
        assert_eq!(PasswordFieldState::Revealed.icon_class(), EYE_SLASH_ICON);
    }

    #[test]
    fn unmatched_selector_is_inert() {
        let doc = MemoryDocument::new();
        let button = doc
            .create_element("button")
            .with_attribute("data-toggle-password", "#missing");
        doc.body().append(&button);
        let toggles = PasswordVisibilityToggle::attach_all(&doc, &UiConfig::default());
        assert_eq!(toggles.len(), 1);
        assert_eq!(toggles[0].toggle(), None);
        assert_eq!(toggles[0].state(), None);
        doc.click(&button);
    }

    #[test]
    fn empty_selector_is_skipped() {
        let doc = MemoryDocument::new();
        let button = doc
            .create_element("button")
            .with_attribute("data-toggle-password", "  ");
        doc.body().append(&button);
        assert!(PasswordVisibilityToggle::attach_all(&doc, &UiConfig::default()).is_empty());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn button_without_icon_still_flips_input() {
        let doc = MemoryDocument::new();
        let input = doc
            .create_element("input")
            .with_attribute("id", "pw")
            .with_attribute("type", "password");
        let button = doc
            .create_element("button")
            .with_attribute("data-toggle-password", "#pw");
        doc.body().append(&input).append(&button);
        let toggles = PasswordVisibilityToggle::attach_all(&doc, &UiConfig::default());
        assert_eq!(toggles[0].target(), "#pw");
        doc.click(&button);
        assert_eq!(input.attribute("type").as_deref(), Some("text"));
    }
}
