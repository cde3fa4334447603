//! Maintenance ticket vocabulary and status transitions.
//!
//! Tickets move forward through `open -> in-progress -> resolved`. Skipping a
//! step is allowed (a trivial fix can be resolved straight from `open`), but a
//! ticket never moves backwards.

use crate::error::CoreError;
use crate::validation::validate_one_of;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const TICKET_STATUS_OPEN: &str = "open";
pub const TICKET_STATUS_IN_PROGRESS: &str = "in-progress";
pub const TICKET_STATUS_RESOLVED: &str = "resolved";

/// Ordered from first to last stage.
pub const VALID_TICKET_STATUSES: &[&str] = &[
    TICKET_STATUS_OPEN,
    TICKET_STATUS_IN_PROGRESS,
    TICKET_STATUS_RESOLVED,
];

pub const VALID_TICKET_CATEGORIES: &[&str] = &[
    "plumbing",
    "electrical",
    "cleaning",
    "elevator",
    "security",
    "other",
];

pub const VALID_TICKET_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

pub fn validate_ticket_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("ticket status", status, VALID_TICKET_STATUSES)
}

pub fn validate_ticket_category(category: &str) -> Result<(), CoreError> {
    validate_one_of("ticket category", category, VALID_TICKET_CATEGORIES)
}

pub fn validate_ticket_priority(priority: &str) -> Result<(), CoreError> {
    validate_one_of("ticket priority", priority, VALID_TICKET_PRIORITIES)
}

/// Validate a status change from `current` to `next`.
///
/// Staying on the same status is accepted so clients can resend the full
/// ticket on every edit.
pub fn validate_status_transition(current: &str, next: &str) -> Result<(), CoreError> {
    validate_ticket_status(next)?;

    let rank = |s: &str| VALID_TICKET_STATUSES.iter().position(|v| *v == s);
    match (rank(current), rank(next)) {
        (Some(from), Some(to)) if to >= from => Ok(()),
        (Some(_), Some(_)) => Err(CoreError::Validation(format!(
            "Ticket cannot move from '{current}' back to '{next}'"
        ))),
        _ => Err(CoreError::Internal(format!(
            "Stored ticket status '{current}' is not recognised"
        ))),
    }
}
