//! Application Layer
//!
//! Configuration, the validation pipeline, and use cases.

pub mod check_session;
pub mod config;
pub mod list_users;
pub mod login;
pub mod logout;
pub mod register;
pub mod session_token;
pub mod validation;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use list_users::ListUsersUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::{LogoutOutcome, LogoutUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
