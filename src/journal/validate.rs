use chrono::NaiveDate;

use crate::{
    models::{EntryDraft, EntryInput, EntryType},
    AppError,
};

/// Checks raw field values against the entry schema. Pure and synchronous.
/// Rules apply in order (date, type, text); the first failure wins and names
/// the offending field, so no partial payload ever escapes.
pub fn validate(input: &EntryInput) -> Result<EntryDraft, AppError> {
    if input.date.is_empty() {
        return Err(AppError::Validation {
            field: "date",
            message: "date is required".to_string(),
        });
    }

    let date =
        NaiveDate::parse_from_str(&input.date, "%Y-%m-%d").map_err(|e| AppError::Validation {
            field: "date",
            message: format!("expected a calendar date (YYYY-MM-DD): {}", e),
        })?;

    let kind = EntryType::parse(&input.kind).ok_or_else(|| AppError::Validation {
        field: "type",
        message: format!(
            "must be one of work, learning, interesting-thing (got {:?})",
            input.kind
        ),
    })?;

    if input.text.is_empty() {
        return Err(AppError::Validation {
            field: "text",
            message: "text must not be empty".to_string(),
        });
    }

    Ok(EntryDraft {
        date,
        kind,
        text: input.text.clone(),
    })
}
