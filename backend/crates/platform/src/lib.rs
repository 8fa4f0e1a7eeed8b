//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - HMAC-signed opaque tokens and secure randomness
//! - Cookie header parsing and `Set-Cookie` building

pub mod cookie;
pub mod crypto;
pub mod password;
