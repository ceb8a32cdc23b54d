//! Core, browser-free primitives shared by every component.
pub mod config;
pub mod dates;
pub mod dom;
pub mod error;
pub mod store;
pub mod theme;
