//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, middleware and the session extractor.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

pub use middleware::{AuthenticatedUser, restricted};
pub use router::{api_router, auth_router, users_router};
pub use session::CurrentSession;
pub use state::AuthAppState;
