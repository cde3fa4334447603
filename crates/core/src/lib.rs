//! Domain vocabulary and pure business rules for the society management API.
//!
//! Nothing in this crate touches the database or HTTP. The `db` crate stores
//! the types defined here and the `api` crate calls the validation and
//! transition functions before persisting changes.

pub mod billing;
pub mod error;
pub mod facility;
pub mod household;
pub mod notice;
pub mod poll;
pub mod records;
pub mod roles;
pub mod staff;
pub mod ticket;
pub mod types;
pub mod validation;
