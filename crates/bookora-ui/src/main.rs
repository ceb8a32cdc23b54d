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
//! Bookora UI wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    bookora_ui::start();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_HINT: &str = "bookora-ui only binds to a browser page. Build it for wasm32 \
(`trunk build` or `cargo build --target wasm32-unknown-unknown`) and load it on a Bookora \
page; the entry point is `bookora_ui::start`. Headless use goes through \
`bookora_ui::Page::attach` with a `MemoryDocument`.\n";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::Write;

    std::io::stderr().lock().write_all(NATIVE_HINT.as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_hint_names_wasm_entry() -> std::io::Result<()> {
        assert!(NATIVE_HINT.contains("bookora_ui::start"));
        assert!(NATIVE_HINT.contains("wasm32-unknown-unknown"));
        main()
    }
}
