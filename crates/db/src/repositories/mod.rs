//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Read-modify-write operations on JSON columns (household lists, poll
//! votes, attendance) take a closure that edits the locked row; the closure's
//! error type only needs `From<sqlx::Error>` so callers can mix domain and
//! database failures.

pub mod bill_repo;
pub mod booking_repo;
pub mod document_repo;
pub mod emergency_repo;
pub mod facility_repo;
pub mod notice_repo;
pub mod parking_repo;
pub mod poll_repo;
pub mod staff_repo;
pub mod ticket_repo;
pub mod unit_repo;
pub mod user_repo;
pub mod vendor_repo;
pub mod visitor_repo;

pub use bill_repo::BillRepo;
pub use booking_repo::BookingRepo;
pub use document_repo::DocumentRepo;
pub use emergency_repo::EmergencyRepo;
pub use facility_repo::FacilityRepo;
pub use notice_repo::NoticeRepo;
pub use parking_repo::ParkingRepo;
pub use poll_repo::PollRepo;
pub use staff_repo::StaffRepo;
pub use ticket_repo::TicketRepo;
pub use unit_repo::UnitRepo;
pub use user_repo::UserRepo;
pub use vendor_repo::VendorRepo;
pub use visitor_repo::VisitorRepo;

/// Prefix every column in a comma-separated list with a table alias.
///
/// `qualified("t", "id, name")` returns `"t.id, t.name"`.
pub(crate) fn qualified(alias: &str, columns: &str) -> String {
    columns
        .split(',')
        .map(|c| format!("{alias}.{}", c.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SQL expression producing a `UserSummary` JSON object for the joined
/// `users` row aliased as `alias`, or NULL when the join found nothing.
pub(crate) fn user_summary_json(alias: &str) -> String {
    format!(
        "CASE WHEN {alias}.id IS NULL THEN NULL ELSE jsonb_build_object(\
            'id', {alias}.id, 'name', {alias}.name, 'email', {alias}.email, \
            'phone', {alias}.phone, 'unitNumber', {alias}.unit_number) END"
    )
}

/// SQL expression producing a `UnitSummary` JSON object for the joined
/// `units` row aliased as `alias`, or NULL.
pub(crate) fn unit_summary_json(alias: &str) -> String {
    format!(
        "CASE WHEN {alias}.id IS NULL THEN NULL ELSE jsonb_build_object(\
            'id', {alias}.id, 'number', {alias}.number, 'block', {alias}.block) END"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_prefixes_each_column() {
        assert_eq!(qualified("t", "id, name,status"), "t.id, t.name, t.status");
    }

    #[test]
    fn summary_expressions_are_null_safe() {
        assert!(user_summary_json("o").starts_with("CASE WHEN o.id IS NULL THEN NULL"));
        assert!(unit_summary_json("u").contains("'block', u.block"));
    }
}
