//! Page binding configuration.
//!
//! # Design
//! - Defaults reproduce the markup contract rendered by the server templates.
//! - Pages may override individual keys with a JSON object; unknown keys are
//!   ignored and missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::core::dom::{DomDocument, DomElement};
use crate::core::error::{UiError, UiResult};

/// Storage key holding the persisted theme.
pub const DEFAULT_THEME_KEY: &str = "bookora_theme";
/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Root attribute that may carry a JSON [`UiConfig`] override.
pub const CONFIG_ATTRIBUTE: &str = "data-bookora-config";

/// Element ids, selectors and class names the enhancements bind to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Preference store key for the theme.
    pub theme_key: String,
    /// Id of the theme toggle button.
    pub theme_toggle_id: String,
    /// Id of the mobile menu toggle button.
    pub menu_toggle_id: String,
    /// Id of the collapsible navigation panel.
    pub navbar_id: String,
    /// Id of the user dropdown container.
    pub user_dropdown_id: String,
    /// Selector of the toggle button inside the user dropdown.
    pub dropdown_button_selector: String,
    /// Attribute naming the password input a toggle button controls.
    pub password_toggle_attribute: String,
    /// Id of the range start input.
    pub start_id: String,
    /// Id of the range end input.
    pub end_id: String,
    /// Class marking an expanded nav or dropdown.
    pub open_class: String,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            theme_toggle_id: "themeToggle".to_string(),
            menu_toggle_id: "menuToggle".to_string(),
            navbar_id: "navbar".to_string(),
            user_dropdown_id: "userDropdown".to_string(),
            dropdown_button_selector: ".dropdown-btn".to_string(),
            password_toggle_attribute: "data-toggle-password".to_string(),
            start_id: "start_at".to_string(),
            end_id: "end_at".to_string(),
            open_class: "open".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl UiConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object matching
    /// the configuration shape.
    pub fn from_json(raw: &str) -> UiResult<Self> {
        serde_json::from_str(raw).map_err(|source| UiError::Config { source })
    }

    /// Selector matching every password toggle button.
    #[must_use]
    pub fn password_toggle_selector(&self) -> String {
        format!("[{}]", self.password_toggle_attribute)
    }
}

/// Read the override carried by the root's [`CONFIG_ATTRIBUTE`]. An absent
/// or blank attribute yields the defaults.
///
/// # Errors
///
/// Returns [`UiError::Config`] when the attribute holds malformed JSON.
pub fn load_config<D: DomDocument>(document: &D) -> UiResult<UiConfig> {
    match document
        .root()
        .and_then(|root| root.attribute(CONFIG_ATTRIBUTE))
    {
        Some(raw) if !raw.trim().is_empty() => UiConfig::from_json(&raw),
        _ => Ok(UiConfig::default()),
    }
}

/// Start-up configuration: the page override, or the defaults plus the
/// parse error when the override is malformed.
pub fn resolve_config<D: DomDocument>(document: &D) -> (UiConfig, Option<UiError>) {
    match load_config(document) {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::memory::MemoryDocument;

    fn document_with_config(raw: Option<&str>) -> MemoryDocument {
        let doc = MemoryDocument::new();
        if let (Some(raw), Some(root)) = (raw, doc.root()) {
            root.set_attribute(CONFIG_ATTRIBUTE, raw);
        }
        doc
    }

    #[test]
    fn absent_attribute_loads_defaults() -> UiResult<()> {
        let doc = document_with_config(None);
        assert_eq!(load_config(&doc)?, UiConfig::default());
        Ok(())
    }

    #[test]
    fn blank_attribute_loads_defaults() -> UiResult<()> {
        let doc = document_with_config(Some("   "));
        assert_eq!(load_config(&doc)?, UiConfig::default());
        Ok(())
    }

    #[test]
    fn root_attribute_overrides_bindings() -> UiResult<()> {
        let doc = document_with_config(Some(r#"{"start_id":"from"}"#));
        let config = load_config(&doc)?;
        assert_eq!(config.start_id, "from");
        assert_eq!(config.end_id, "end_at");
        Ok(())
    }

    #[test]
    fn malformed_attribute_falls_back_to_defaults() {
        let doc = document_with_config(Some("{broken"));
        assert!(matches!(load_config(&doc), Err(UiError::Config { .. })));
        let (config, err) = resolve_config(&doc);
        assert_eq!(config, UiConfig::default());
        assert!(matches!(err, Some(UiError::Config { .. })));
    }

    #[test]
    fn defaults_match_markup_contract() {
        let config = UiConfig::default();
        assert_eq!(config.theme_key, "bookora_theme");
        assert_eq!(config.theme_toggle_id, "themeToggle");
        assert_eq!(config.menu_toggle_id, "menuToggle");
        assert_eq!(config.navbar_id, "navbar");
        assert_eq!(config.user_dropdown_id, "userDropdown");
        assert_eq!(config.dropdown_button_selector, ".dropdown-btn");
        assert_eq!(config.start_id, "start_at");
        assert_eq!(config.end_id, "end_at");
        assert_eq!(config.password_toggle_selector(), "[data-toggle-password]");
    }

    #[test]
    fn partial_override_keeps_defaults() -> UiResult<()> {
        let config = UiConfig::from_json(r#"{"navbar_id":"mainNav","log_level":"debug"}"#)?;
        assert_eq!(config.navbar_id, "mainNav");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.theme_key, DEFAULT_THEME_KEY);
        Ok(())
    }

    #[test]
    fn malformed_override_is_rejected() {
        let err = UiConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, UiError::Config { .. }));
        assert!(UiConfig::from_json(r#"{"navbar_id": 5}"#).is_err());
    }
}
