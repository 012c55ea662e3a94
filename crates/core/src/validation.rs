//! Form-field normalization shared by the admin record forms.
//!
//! HTML forms submit every field as text. A required field that is absent,
//! empty, or only whitespace counts as missing; reference fields (parent
//! ids chosen from a select box) must additionally parse as a [`DbId`].

use crate::error::CoreError;
use crate::types::DbId;

/// Return the trimmed value of a required text field, or `None` if the
/// field is missing or blank.
pub fn required_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a free-text field. Blank input is stored as absent; surrounding
/// whitespace is dropped, inner line breaks are kept.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    required_text(value)
}

/// Parse a parent reference submitted from a select box.
///
/// `entity` is the lowercase display name used in the notice, e.g.
/// `"airline"` yields `Selected airline is invalid.`
pub fn parse_reference(value: &str, entity: &str) -> Result<DbId, CoreError> {
    value
        .trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(invalid_selection_message(entity)))
}

/// Notice text for a parent reference that does not resolve.
pub fn invalid_selection_message(entity: &str) -> String {
    format!("Selected {entity} is invalid.")
}
