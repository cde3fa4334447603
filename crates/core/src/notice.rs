//! Notice board vocabulary.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_required};

pub const NOTICE_TYPE_NOTICE: &str = "notice";
pub const NOTICE_TYPE_EVENT: &str = "event";
pub const NOTICE_TYPE_CIRCULAR: &str = "circular";

pub const VALID_NOTICE_TYPES: &[&str] =
    &[NOTICE_TYPE_NOTICE, NOTICE_TYPE_EVENT, NOTICE_TYPE_CIRCULAR];

pub fn validate_notice_type(notice_type: &str) -> Result<(), CoreError> {
    validate_one_of("notice type", notice_type, VALID_NOTICE_TYPES)
}

/// Validate a notice: known type, non-empty text, and an event date for events.
pub fn validate_notice(
    title: &str,
    content: &str,
    notice_type: &str,
    event_date: Option<NaiveDate>,
) -> Result<(), CoreError> {
    validate_required("title", title)?;
    validate_required("content", content)?;
    validate_notice_type(notice_type)?;
    if notice_type == NOTICE_TYPE_EVENT && event_date.is_none() {
        return Err(CoreError::Validation(
            "Event notices require an eventDate".into(),
        ));
    }
    Ok(())
}
