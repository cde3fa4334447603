//! Society management API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! OpenAPI document, demo seeding) so integration tests and the binaries can
//! both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
