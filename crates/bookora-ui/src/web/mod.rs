//! Browser bindings and the wasm entry point.

mod dom;
mod storage;

pub use dom::{WebDocument, WebElement};
pub use storage::LocalStore;

use tracing::warn;

use crate::core::config::resolve_config;
use crate::page::Page;
use crate::telemetry;

/// Bind every enhancement on the current page.
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let document = WebDocument::new(document);
    let (config, config_error) = resolve_config(&document);
    telemetry::init_logging(&config.log_level).ok();
    if let Some(err) = config_error {
        warn!(error = %err, detail = ?err, "ignoring malformed page config");
    }

    let page = Page::attach(&document, LocalStore, &config);
    drop(page);
    document.persist();
}
