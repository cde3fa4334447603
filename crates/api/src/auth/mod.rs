//! Credentials: password hashes stored on users, and the JWTs issued at
//! login.

pub mod jwt;
pub mod password;
