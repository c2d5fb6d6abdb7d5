//! Draft validation.
//!
//! All field rules are applied independently and every violation is
//! collected; a failing draft reports one message per field.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Utc;
use uuid::Uuid;

use crate::types::{Recipe, RecipeDraft};

/// Longest accepted title, in characters.
pub const MAX_TITLE_CHARS: usize = 20;

/// Longest accepted cook time, in minutes.
pub const MAX_COOK_TIME_MINUTES: f64 = 600.0;

/// Fields a draft can fail validation on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    CookTime,
    SourceUrl,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::CookTime => "cook-time",
            Field::SourceUrl => "source-url",
        })
    }
}

/// Per-field error map produced by [`validate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    /// True iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for one field, if it failed.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn put(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Check a draft against the field rules.
pub fn validate(draft: &RecipeDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    let title = draft.title.trim();
    if title.is_empty() {
        report.put(Field::Title, "title is required");
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        report.put(Field::Title, "title must be 20 characters or fewer");
    }

    if let Some(minutes) = draft.cook_time {
        // Non-numeric input arrives here as NaN; only a finite value is
        // range-checked.
        if !minutes.is_finite() {
            report.put(Field::CookTime, "cook time must be a number");
        } else if !(0.0..=MAX_COOK_TIME_MINUTES).contains(&minutes) {
            report.put(Field::CookTime, "cook time must be between 0 and 600 minutes");
        }
    }

    if let Some(url) = draft.source_url.as_deref() {
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            report.put(Field::SourceUrl, "source URL must start with http:// or https://");
        }
    }

    report
}

impl RecipeDraft {
    /// Validate and materialize a record, assigning a fresh id and the
    /// creation timestamp.
    pub fn build(self) -> Result<Recipe, ValidationReport> {
        let report = validate(&self);
        if !report.is_valid() {
            return Err(report);
        }

        Ok(Recipe {
            id: Uuid::new_v4(),
            title: self.title,
            category: self.category,
            status: self.status,
            ingredients: self.ingredients,
            steps: self.steps,
            cook_time: self.cook_time.map(|minutes| minutes as u32),
            servings: self.servings,
            source_url: self.source_url.filter(|url| !url.is_empty()),
            notes: self.notes.filter(|notes| !notes.is_empty()),
            created_at: Utc::now(),
        })
    }
}
