//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! JSON keys are camelCase to match the mobile client.

pub mod bill;
pub mod document;
pub mod emergency;
pub mod facility;
pub mod notice;
pub mod parking;
pub mod poll;
pub mod staff;
pub mod ticket;
pub mod unit;
pub mod user;
pub mod vendor;
pub mod visitor;
