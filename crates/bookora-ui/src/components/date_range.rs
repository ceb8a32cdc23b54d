//! Keeps the end input's `min` in step with the start input.
//!
//! An end value that already precedes the new start is left untouched; the
//! conflict is logged and reported so callers can surface it, and native
//! `min` validation catches it at submit time.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::config::UiConfig;
use crate::core::dates::end_not_after_start;
use crate::core::dom::{DomDocument, DomElement};

/// Outcome of re-deriving the end input's minimum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateSync {
    /// The minimum was updated and the current end value (if any) is valid.
    Updated {
        /// New `min` value.
        min: String,
    },
    /// The minimum was updated but the existing end value does not come after it.
    Conflict {
        /// New `min` value.
        min: String,
        /// End value left in place.
        end: String,
    },
}

/// Start/end input pair.
pub struct DateRangeConstraint<E> {
    start: E,
    end: E,
}

impl<E: DomElement> DateRangeConstraint<E> {
    /// Build without registering any listener.
    pub const fn new(start: E, end: E) -> Self {
        Self { start, end }
    }

    /// Wire the start input's change event. Returns `None` when either input
    /// is missing.
    pub fn attach<D>(document: &D, config: &UiConfig) -> Option<Rc<Self>>
    where
        D: DomDocument<Element = E>,
    {
        let (Some(start), Some(end)) = (
            document.element_by_id(&config.start_id),
            document.element_by_id(&config.end_id),
        ) else {
            debug!(
                start = %config.start_id,
                end = %config.end_id,
                "date range inputs absent; skipping"
            );
            return None;
        };
        let range = Rc::new(Self::new(start, end));
        let handle = Rc::clone(&range);
        document.on_change(
            &range.start,
            Box::new(move || {
                handle.sync();
            }),
        );
        Some(range)
    }

    /// Copy the start value onto the end input's `min`.
    pub fn sync(&self) -> DateSync {
        let min = self.start.value();
        self.end.set_attribute("min", &min);
        let end = self.end.value();
        if end_not_after_start(&min, &end) {
            warn!(%min, %end, "end date no longer follows start date; leaving value in place");
            DateSync::Conflict { min, end }
        } else {
            DateSync::Updated { min }
        }
    }

    /// Current `min` on the end input.
    #[must_use]
    pub fn min(&self) -> Option<String> {
        self.end.attribute("min")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dom::memory::{MemoryDocument, MemoryElement};

    fn inputs(doc: &MemoryDocument) -> (MemoryElement, MemoryElement) {
        let start = doc
            .create_element("input")
            .with_attribute("id", "start_at")
            .with_attribute("type", "datetime-local");
        let end = doc
            .create_element("input")
            .with_attribute("id", "end_at")
            .with_attribute("type", "datetime-local");
        doc.body().append(&start).append(&end);
        (start, end)
    }

    #[test]
    fn sync_reports_conflict_without_clearing() {
        let doc = MemoryDocument::new();
        let (start, end) = inputs(&doc);
        let range = DateRangeConstraint::new(start.clone(), end.clone());
        end.set_value("2024-05-12T09:00");
        start.set_value("2024-05-15T09:00");
        assert_eq!(
            range.sync(),
            DateSync::Conflict {
                min: "2024-05-15T09:00".to_string(),
                end: "2024-05-12T09:00".to_string(),
            }
        );
        assert_eq!(end.value(), "2024-05-12T09:00");
        assert_eq!(range.min().as_deref(), Some("2024-05-15T09:00"));
    }

    #[test]
    fn cleared_start_clears_min() {
        let doc = MemoryDocument::new();
        let (start, _) = inputs(&doc);
        let Some(range) = DateRangeConstraint::attach(&doc, &UiConfig::default()) else {
            panic!("date inputs present");
        };
        doc.change_value(&start, "2024-05-10T08:00");
        doc.change_value(&start, "");
        assert_eq!(range.min().as_deref(), Some(""));
    }

    #[test]
    fn min_untouched_until_start_changes() {
        let doc = MemoryDocument::new();
        let (start, _) = inputs(&doc);
        start.set_value("2024-05-10");
        let Some(range) = DateRangeConstraint::attach(&doc, &UiConfig::default()) else {
            panic!("date inputs present");
        };
        assert_eq!(range.min(), None);
    }

    #[test]
    fn missing_end_input_skips_binding() {
        let doc = MemoryDocument::new();
        let start = doc.create_element("input").with_attribute("id", "start_at");
        doc.body().append(&start);
        assert!(DateRangeConstraint::attach(&doc, &UiConfig::default()).is_none());
        assert_eq!(doc.listener_count(), 0);
    }
}
