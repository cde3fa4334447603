//! Well-known role name constants.
//!
//! These must match the `ck_users_role` constraint in
//! `20250101000001_create_users.sql`.

use crate::error::CoreError;
use crate::validation::validate_one_of;

pub const ROLE_RESIDENT: &str = "resident";
pub const ROLE_MANAGEMENT: &str = "management";
pub const ROLE_SECURITY: &str = "security";
pub const ROLE_MAINTENANCE: &str = "maintenance";

pub const VALID_ROLES: &[&str] = &[
    ROLE_RESIDENT,
    ROLE_MANAGEMENT,
    ROLE_SECURITY,
    ROLE_MAINTENANCE,
];

pub fn validate_role(role: &str) -> Result<(), CoreError> {
    validate_one_of("role", role, VALID_ROLES)
}
