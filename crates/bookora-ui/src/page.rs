//! Wires every enhancement present on a page.

use std::rc::Rc;

use tracing::info;

use crate::components::{
    DateRangeConstraint, PasswordVisibilityToggle, ResponsiveNav, ThemePreference, UserMenu,
};
use crate::core::config::UiConfig;
use crate::core::dom::DomDocument;
use crate::core::store::PreferenceStore;

/// Handles to the components bound on one document.
pub struct Page<D: DomDocument, S> {
    /// Theme preference; always bound because the root element always exists.
    pub theme: Rc<ThemePreference<D::Element, S>>,
    /// Mobile navigation, when the page renders one.
    pub nav: Option<Rc<ResponsiveNav<D::Element>>>,
    /// Account dropdown, when a user is signed in.
    pub user_menu: Option<Rc<UserMenu<D::Element>>>,
    /// One entry per password toggle button.
    pub password_toggles: Vec<Rc<PasswordVisibilityToggle<D>>>,
    /// Start/end constraint, on forms that carry both inputs.
    pub date_range: Option<Rc<DateRangeConstraint<D::Element>>>,
}

impl<D: DomDocument, S: PreferenceStore + 'static> Page<D, S> {
    /// Bind every component whose elements exist on `document`.
    pub fn attach(document: &D, store: S, config: &UiConfig) -> Self {
        let theme = ThemePreference::attach(document, store, config);
        let nav = ResponsiveNav::attach(document, config);
        let user_menu = UserMenu::attach(document, config);
        let password_toggles = PasswordVisibilityToggle::attach_all(document, config);
        let date_range = DateRangeConstraint::attach(document, config);
        info!(
            theme = theme.current().as_str(),
            nav = nav.is_some(),
            user_menu = user_menu.is_some(),
            password_toggles = password_toggles.len(),
            date_range = date_range.is_some(),
            "page enhancements attached"
        );
        Self {
            theme,
            nav,
            user_menu,
            password_toggles,
            date_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::memory::MemoryDocument;
    use crate::core::store::MemoryStore;
    use crate::core::theme::ThemeMode;

    #[test]
    fn bare_page_binds_only_theme() {
        let doc = MemoryDocument::new();
        let page = Page::attach(&doc, MemoryStore::new(), &UiConfig::default());
        assert_eq!(page.theme.current(), ThemeMode::Light);
        assert!(page.nav.is_none());
        assert!(page.user_menu.is_none());
        assert!(page.password_toggles.is_empty());
        assert!(page.date_range.is_none());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn custom_ids_are_honoured() -> crate::UiResult<()> {
        let doc = MemoryDocument::new();
        let button = doc.create_element("button").with_attribute("id", "burger");
        let panel = doc.create_element("nav").with_attribute("id", "mainNav");
        doc.body().append(&button).append(&panel);
        let config = UiConfig::from_json(r#"{"menu_toggle_id":"burger","navbar_id":"mainNav"}"#)?;
        let page = Page::attach(&doc, MemoryStore::new(), &config);
        assert!(page.nav.is_some());
        Ok(())
    }
}
