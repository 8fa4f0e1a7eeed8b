//! Value Object Module

pub mod user_id;
pub mod user_name;
