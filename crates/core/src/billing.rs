//! Bill vocabulary, payment rules, and summary aggregation.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::CoreError;
use crate::validation::{validate_one_of, validate_required};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const BILL_STATUS_PENDING: &str = "pending";
pub const BILL_STATUS_PAID: &str = "paid";
pub const BILL_STATUS_OVERDUE: &str = "overdue";

pub const VALID_BILL_STATUSES: &[&str] =
    &[BILL_STATUS_PENDING, BILL_STATUS_PAID, BILL_STATUS_OVERDUE];

pub const VALID_BILL_TYPES: &[&str] = &["maintenance", "water", "gas", "common"];

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

pub fn validate_bill_status(status: &str) -> Result<(), CoreError> {
    validate_one_of("bill status", status, VALID_BILL_STATUSES)
}

pub fn validate_bill_type(bill_type: &str) -> Result<(), CoreError> {
    validate_one_of("bill type", bill_type, VALID_BILL_TYPES)
}

/// Amounts must be finite and non-negative.
pub fn validate_amount(amount: f64) -> Result<(), CoreError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CoreError::Validation(format!(
            "Bill amount must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}

/// Validate the fields of a new bill.
pub fn validate_new_bill(
    bill_type: &str,
    amount: f64,
    description: &str,
    month: &str,
    status: Option<&str>,
) -> Result<(), CoreError> {
    validate_bill_type(bill_type)?;
    validate_amount(amount)?;
    validate_required("description", description)?;
    validate_required("month", month)?;
    if let Some(status) = status {
        validate_bill_status(status)?;
    }
    Ok(())
}

/// A bill can be paid from `pending` or `overdue`. Paying twice is a conflict.
pub fn ensure_payable(status: &str) -> Result<(), CoreError> {
    if status == BILL_STATUS_PAID {
        return Err(CoreError::Conflict("Bill is already paid".into()));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Summary
-------------------------------------------------------------------------- */

/// Per-status totals across a set of bills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub pending_count: i64,
    pub pending_amount: f64,
    pub overdue_count: i64,
    pub overdue_amount: f64,
    pub paid_count: i64,
    pub paid_amount: f64,
    /// Pending plus overdue.
    pub outstanding_amount: f64,
}

/// Fold `(status, count, amount)` groups into a [`BillSummary`].
///
/// Unknown statuses are ignored; repeated statuses accumulate.
pub fn summarize<'a, I>(groups: I) -> BillSummary
where
    I: IntoIterator<Item = (&'a str, i64, f64)>,
{
    let mut summary = BillSummary::default();
    for (status, count, amount) in groups {
        match status {
            BILL_STATUS_PENDING => {
                summary.pending_count += count;
                summary.pending_amount += amount;
            }
            BILL_STATUS_OVERDUE => {
                summary.overdue_count += count;
                summary.overdue_amount += amount;
            }
            BILL_STATUS_PAID => {
                summary.paid_count += count;
                summary.paid_amount += amount;
            }
            _ => {}
        }
    }
    summary.outstanding_amount = summary.pending_amount + summary.overdue_amount;
    summary
}
