//! Light/dark theme values and the glyphs shown on the theme toggle.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

/// Glyph class shown while the light theme is active (invites switching to dark).
pub const MOON_ICON: &str = "fa-moon";
/// Glyph class shown while the dark theme is active (invites switching to light).
pub const SUN_ICON: &str = "fa-sun";

impl ThemeMode {
    /// String identifier stored in `data-theme` and in the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolve an optional raw value, falling back to [`ThemeMode::Light`].
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon glyph class matching this mode.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON,
            Self::Dark => SUN_ICON,
        }
    }
}
