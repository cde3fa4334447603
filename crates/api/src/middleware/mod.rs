//! Request guards: who is calling, and may they.

pub mod auth;
pub mod rbac;
