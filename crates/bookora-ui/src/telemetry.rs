//! Tracing subscriber installation.
//!
//! # Design
//! - One fmt subscriber filtered by the configured level, without timestamps
//!   (no wall clock on `wasm32-unknown-unknown`) or ANSI colours.
//! - On wasm32 each formatted line is forwarded to the browser console.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::core::config::DEFAULT_LOG_LEVEL;
use crate::core::error::{UiError, UiResult};

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`UiError::Telemetry`] when a subscriber is already installed.
pub fn init_logging(level: &str) -> UiResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(LogWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| UiError::Telemetry {
            detail: err.to_string(),
        })
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Writer factory used by the subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::default()
    }
}

/// Buffers one formatted event and emits it when dropped.
#[derive(Debug, Default)]
pub struct LineWriter {
    buffer: Vec<u8>,
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        emit(line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    gloo::console::log!(line);
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn filter_accepts_module_directives() {
        let filter = build_filter("warn,bookora_ui=debug");
        assert!(
            filter
                .to_string()
                .to_ascii_lowercase()
                .contains("bookora_ui=debug")
        );
    }

    #[test]
    fn line_writer_buffers_until_drop() -> io::Result<()> {
        let mut writer = LogWriter.make_writer();
        writer.write_all(b"first ")?;
        writer.write_all(b"second\n")?;
        writer.flush()?;
        assert_eq!(writer.buffer, b"first second\n");
        Ok(())
    }

    #[test]
    fn init_logging_installs_subscriber_once() {
        let first = init_logging("debug");
        let second = init_logging("debug");
        assert!(first.is_ok() || second.is_err());
        assert!(matches!(second, Err(UiError::Telemetry { .. })));
    }
}
