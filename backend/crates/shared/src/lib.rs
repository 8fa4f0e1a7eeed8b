//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - [`error::app_error::AppError`], the single error type that reaches HTTP
//! - [`error::kind::ErrorKind`], its status classification
//! - Typed integer IDs for store-assigned keys

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
