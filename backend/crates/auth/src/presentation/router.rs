//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::{SessionRepository, UserRepository};
use crate::presentation::handlers;
use crate::presentation::middleware::restricted;
use crate::presentation::state::AuthAppState;

/// `/register`, `/login`, `/logout`; mount under `/api/auth`
pub fn auth_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/register", post(handlers::register::<U, S>))
        .route("/login", post(handlers::login::<U, S>))
        .route("/logout", get(handlers::logout::<U, S>))
        .with_state(state)
}

/// Restricted user listing; mount under `/api/users`
pub fn users_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::list_users::<U, S>))
        .route_layer(middleware::from_fn_with_state(state.clone(), restricted))
        .with_state(state)
}

/// Both routers at their public paths
pub fn api_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/auth", auth_router(state.clone()))
        .nest("/api/users", users_router(state))
}
