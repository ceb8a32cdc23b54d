//! Persisted light/dark theme reflected on `data-theme` and the toggle icon.
//!
//! # Design
//! - The document root attribute is the source of truth for the current mode;
//!   the store only seeds it at load time.
//! - The icon is synced on load and after every toggle.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::config::UiConfig;
use crate::core::dom::{DomDocument, DomElement, Propagation};
use crate::core::store::PreferenceStore;
use crate::core::theme::ThemeMode;

/// Attribute consumed by the stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Theme preference bound to the document root and the theme toggle.
pub struct ThemePreference<E, S> {
    root: Option<E>,
    icon: Option<E>,
    store: S,
    key: String,
}

impl<E: DomElement, S: PreferenceStore + 'static> ThemePreference<E, S> {
    /// Build without registering any listener.
    pub fn new(root: Option<E>, icon: Option<E>, store: S, key: impl Into<String>) -> Self {
        Self {
            root,
            icon,
            store,
            key: key.into(),
        }
    }

    /// Resolve bindings on `document`, apply the stored theme and wire the
    /// toggle button when present.
    pub fn attach<D>(document: &D, store: S, config: &UiConfig) -> Rc<Self>
    where
        D: DomDocument<Element = E>,
    {
        let toggle = document.element_by_id(&config.theme_toggle_id);
        let icon = toggle.as_ref().and_then(|button| button.query_selector("i"));
        let theme = Rc::new(Self::new(document.root(), icon, store, config.theme_key.clone()));
        let applied = theme.initialize();
        debug!(theme = applied.as_str(), "theme applied");

        match toggle {
            Some(button) => {
                let handle = Rc::clone(&theme);
                document.on_click(
                    &button,
                    Box::new(move |_| {
                        handle.toggle();
                        Propagation::Continue
                    }),
                );
            }
            None => debug!(id = %config.theme_toggle_id, "theme toggle absent; skipping"),
        }
        theme
    }

    /// Apply the persisted theme (or light) to the root and the icon.
    pub fn initialize(&self) -> ThemeMode {
        let stored = self.store.get(&self.key);
        let mode = ThemeMode::from_optional(stored.as_deref());
        self.apply(mode);
        mode
    }

    /// Mode currently reflected on the document root.
    #[must_use]
    pub fn current(&self) -> ThemeMode {
        ThemeMode::from_optional(
            self.root
                .as_ref()
                .and_then(|root| root.attribute(THEME_ATTRIBUTE))
                .as_deref(),
        )
    }

    /// Switch to the opposite mode, persist it and update the icon.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.current().toggled();
        self.apply(next);
        self.persist(next);
        next
    }

    /// Forget the stored preference and return to the light default.
    pub fn reset(&self) -> ThemeMode {
        self.store.delete(&self.key);
        self.apply(ThemeMode::Light);
        ThemeMode::Light
    }

    fn apply(&self, mode: ThemeMode) {
        if let Some(root) = &self.root {
            root.set_attribute(THEME_ATTRIBUTE, mode.as_str());
        }
        if let Some(icon) = &self.icon {
            icon.remove_class(mode.toggled().icon_class());
            icon.add_class(mode.icon_class());
        }
    }

    fn persist(&self, mode: ThemeMode) {
        if let Err(err) = self.store.set(&self.key, mode.as_str()) {
            warn!(error = %err, detail = ?err, key = %self.key, "theme not persisted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::memory::{MemoryDocument, MemoryElement};
    use crate::core::store::MemoryStore;

    fn page_with_toggle() -> (MemoryDocument, MemoryElement, MemoryElement) {
        let doc = MemoryDocument::new();
        let button = doc
            .create_element("button")
            .with_attribute("id", "themeToggle");
        let icon = doc.create_element("i").with_attribute("class", "fa-solid");
        button.append(&icon);
        doc.body().append(&button);
        (doc, button, icon)
    }

    #[test]
    fn missing_preference_defaults_to_light() {
        let (doc, _, icon) = page_with_toggle();
        let theme = ThemePreference::attach(&doc, MemoryStore::new(), &UiConfig::default());
        assert_eq!(theme.current(), ThemeMode::Light);
        let root = doc.root().map(|r| r.attribute(THEME_ATTRIBUTE));
        assert_eq!(root, Some(Some("light".to_string())));
        assert!(icon.has_class("fa-moon"));
    }

    #[test]
    fn toggle_persists_and_flips_icon() {
        let (doc, button, icon) = page_with_toggle();
        let store = MemoryStore::new();
        let theme = ThemePreference::attach(&doc, store.clone(), &UiConfig::default());
        doc.click(&button);
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(store.get("bookora_theme").as_deref(), Some("dark"));
        assert!(icon.has_class("fa-sun"));
        assert!(!icon.has_class("fa-moon"));
        assert!(icon.has_class("fa-solid"));
    }

    #[test]
    fn works_without_toggle_button() {
        let doc = MemoryDocument::new();
        let store = MemoryStore::with_entry("bookora_theme", "dark");
        let theme = ThemePreference::attach(&doc, store, &UiConfig::default());
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn rootless_theme_is_a_noop() {
        let store = MemoryStore::new();
        let theme: ThemePreference<MemoryElement, _> =
            ThemePreference::new(None, None, store.clone(), "bookora_theme");
        assert_eq!(theme.initialize(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(store.get("bookora_theme").as_deref(), Some("dark"));
    }

    struct RejectingStore;

    impl PreferenceStore for RejectingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> crate::UiResult<()> {
            Err(crate::UiError::storage("set", key, "quota exceeded"))
        }

        fn delete(&self, _key: &str) {}
    }

    #[test]
    fn rejected_write_still_switches_theme() {
        let (doc, button, icon) = page_with_toggle();
        let theme = ThemePreference::attach(&doc, RejectingStore, &UiConfig::default());
        assert!(doc.click(&button));
        let root = doc.root().and_then(|r| r.attribute(THEME_ATTRIBUTE));
        assert_eq!(root.as_deref(), Some("dark"));
        assert!(icon.has_class("fa-sun"));
        assert!(!icon.has_class("fa-moon"));
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
    }

    #[test]
    fn reset_clears_store() {
        let (doc, button, _) = page_with_toggle();
        let store = MemoryStore::new();
        let theme = ThemePreference::attach(&doc, store.clone(), &UiConfig::default());
        doc.click(&button);
        assert_eq!(theme.reset(), ThemeMode::Light);
        assert!(store.is_empty());
        assert_eq!(theme.current(), ThemeMode::Light);
    }
}
