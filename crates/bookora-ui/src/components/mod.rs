//! Page enhancements. Each component binds independently and is skipped
//! when its elements are missing from the page.
pub mod date_range;
pub mod nav;
pub mod password_toggle;
pub mod theme_toggle;
pub mod user_menu;

pub use date_range::{DateRangeConstraint, DateSync};
pub use nav::ResponsiveNav;
pub use password_toggle::{PasswordFieldState, PasswordVisibilityToggle};
pub use theme_toggle::ThemePreference;
pub use user_menu::UserMenu;
