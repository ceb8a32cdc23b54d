#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Bookora browser enhancements.
//!
//! Binds theme persistence, the responsive nav, the user menu, password
//! visibility toggles and the date range constraint onto server-rendered
//! pages. Behavior is written against the [`crate::core::dom`] traits so the
//! whole layer runs headlessly against
//! [`crate::core::dom::memory::MemoryDocument`].

pub mod components;
pub mod core;
pub mod page;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use crate::core::config::UiConfig;
pub use crate::core::error::{UiError, UiResult};
pub use crate::page::Page;

#[cfg(target_arch = "wasm32")]
pub use web::start;
