//! moodly-instruments
//!
//! Self-report inventory definitions, scoring, and severity classification.
//! Pure data and arithmetic, no I/O.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod severity;

use std::ops::Range;

use moodly_core::models::assessment::AssessmentResult;
use moodly_core::models::dimension::DimensionTag;
use scoring::{Item, RatingError, ScaleOption};

/// Trait implemented by each self-report inventory.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "dass21").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "DASS-21").
    fn name(&self) -> &str;

    /// Items in administration order.
    fn items(&self) -> &[Item];

    /// The response scale shared by every item.
    fn scale(&self) -> &[ScaleOption];

    /// Items shown per page.
    fn page_size(&self) -> usize;

    fn page_count(&self) -> usize {
        self.items().len().div_ceil(self.page_size())
    }

    /// Item index range for a zero-based page.
    fn page(&self, page: usize) -> Option<Range<usize>> {
        let start = page.checked_mul(self.page_size())?;
        if start >= self.items().len() {
            return None;
        }
        let end = (start + self.page_size()).min(self.items().len());
        Some(start..end)
    }

    fn dimension_of(&self, index: usize) -> Option<DimensionTag> {
        self.items().get(index).map(|item| item.dimension)
    }

    /// Check raw captured values against the response scale.
    fn validate_ratings(&self, values: &[i64]) -> Vec<RatingError> {
        let min = self.scale().iter().map(|o| o.value).min().unwrap_or(0);
        let max = self.scale().iter().map(|o| o.value).max().unwrap_or(0);

        let mut errors = Vec::new();
        if values.len() != self.items().len() {
            errors.push(RatingError {
                index: values.len().min(self.items().len()),
                value: None,
                message: format!(
                    "{}: expected {} responses, got {}",
                    self.name(),
                    self.items().len(),
                    values.len()
                ),
            });
        }
        for (index, value) in values.iter().enumerate().take(self.items().len()) {
            if *value < i64::from(min) || *value > i64::from(max) {
                errors.push(RatingError {
                    index,
                    value: Some(*value),
                    message: format!(
                        "{}: Q{} response {} is outside [{}, {}]",
                        self.name(),
                        index + 1,
                        value,
                        min,
                        max,
                    ),
                });
            }
        }
        errors
    }

    /// Format a result as structured text, e.g. for a clinician hand-off note.
    fn to_structured_input(&self, result: &AssessmentResult) -> String {
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!("Submitted: {}\n\n", result.submitted_at));
        for dimension in DimensionTag::ALL {
            output.push_str(&format!(
                "- {}: {} ({})\n",
                dimension.name(),
                result.scores.get(dimension),
                result.labels.get(dimension),
            ));
        }
        output.push_str(&format!("\nTotal: {}\n", result.scores.total()));
        output
    }
}
