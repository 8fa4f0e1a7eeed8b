//! Infrastructure Layer
//!
//! Credential and session store implementations.

pub mod memory;
pub mod postgres;

pub use memory::{InMemorySessionRepository, InMemoryUserRepository};
pub use postgres::{PgSessionRepository, PgUserRepository};
