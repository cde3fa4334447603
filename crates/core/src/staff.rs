//! Staff attendance records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_required};

pub const VALID_ATTENDANCE_STATUSES: &[&str] = &["present", "absent", "leave"];

/// One day's attendance mark for a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    pub date: NaiveDate,
    pub status: String,
}

pub fn validate_attendance_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("attendance status", status, VALID_ATTENDANCE_STATUSES)
}

/// Validate the required text fields of a staff member.
pub fn validate_staff(name: &str, role: &str, phone: &str, shift: &str) -> Result<(), CoreError> {
    validate_required("name", name)?;
    validate_required("role", role)?;
    validate_required("phone", phone)?;
    validate_required("shift", shift)
}

/// Record attendance for a day, replacing any existing mark for that date.
///
/// Entries are kept newest first.
pub fn record_attendance(
    entries: &mut Vec<AttendanceEntry>,
    entry: AttendanceEntry,
) -> Result<(), CoreError> {
    validate_attendance_status(&entry.status)?;
    match entries.iter_mut().find(|e| e.date == entry.date) {
        Some(existing) => existing.status = entry.status,
        None => entries.push(entry),
    }
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(())
}
