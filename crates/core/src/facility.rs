//! Facility and booking rules (status transitions, time windows, overlaps).

use chrono::NaiveTime;

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_required};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_APPROVED: &str = "approved";
pub const BOOKING_STATUS_REJECTED: &str = "rejected";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";

pub const VALID_BOOKING_STATUSES: &[&str] = &[
    BOOKING_STATUS_PENDING,
    BOOKING_STATUS_APPROVED,
    BOOKING_STATUS_REJECTED,
    BOOKING_STATUS_CANCELLED,
];

/// Bookings in these statuses hold their time slot.
pub const ACTIVE_BOOKING_STATUSES: &[&str] = &[BOOKING_STATUS_PENDING, BOOKING_STATUS_APPROVED];

/* --------------------------------------------------------------------------
Facility validation
-------------------------------------------------------------------------- */

/// Validate facility capacity and pricing.
///
/// A paid facility needs a non-negative hourly price; a free one may carry
/// none.
pub fn validate_facility(
    name: &str,
    capacity: i32,
    is_paid: bool,
    price_per_hour: Option<f64>,
) -> Result<(), CoreError> {
    validate_required("name", name)?;
    if capacity <= 0 {
        return Err(CoreError::Validation(format!(
            "Facility capacity must be positive, got {capacity}"
        )));
    }
    match (is_paid, price_per_hour) {
        (true, None) => Err(CoreError::Validation(
            "Paid facilities require pricePerHour".into(),
        )),
        (_, Some(price)) if !price.is_finite() || price < 0.0 => Err(CoreError::Validation(
            format!("pricePerHour must be non-negative, got {price}"),
        )),
        _ => Ok(()),
    }
}

/* --------------------------------------------------------------------------
Booking validation
-------------------------------------------------------------------------- */

pub fn validate_booking_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("booking status", status, VALID_BOOKING_STATUSES)
}

/// Validate a booking status change.
///
/// `pending` may become anything; `approved` may only be cancelled;
/// `rejected` and `cancelled` are final.
pub fn validate_booking_transition(current: &str, next: &str) -> Result<(), CoreError> {
    validate_booking_status(next)?;
    if current == next {
        return Ok(());
    }
    let allowed = match current {
        BOOKING_STATUS_PENDING => true,
        BOOKING_STATUS_APPROVED => next == BOOKING_STATUS_CANCELLED,
        _ => false,
    };
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Booking cannot move from '{current}' to '{next}'"
        )))
    }
}

/// The end time must be strictly after the start time.
pub fn validate_time_window(start: NaiveTime, end: NaiveTime) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(format!(
            "endTime ({end}) must be after startTime ({start})"
        )));
    }
    Ok(())
}

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`.
///
/// Back-to-back slots (one ends exactly when the next starts) do not overlap.
pub fn intervals_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Reject a requested slot that overlaps any of `existing` `(start, end)` slots.
pub fn ensure_slot_free<I>(start: NaiveTime, end: NaiveTime, existing: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (NaiveTime, NaiveTime)>,
{
    if let Some((s, e)) = existing
        .into_iter()
        .find(|(s, e)| intervals_overlap(start, end, *s, *e))
    {
        return Err(CoreError::Conflict(format!(
            "Facility is already booked from {s} to {e}"
        )));
    }
    Ok(())
}
