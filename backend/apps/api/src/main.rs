//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `auth::AuthError` / `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::{
    AuthAppState, AuthConfig, InMemorySessionRepository, InMemoryUserRepository,
    PgSessionRepository, PgUserRepository, SessionRepository, api_router,
};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(10 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let auth_config = load_auth_config()?;

    let api = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let sessions = PgSessionRepository::new(pool.clone());
            spawn_session_cleanup(sessions.clone());

            api_router(AuthAppState::new(
                PgUserRepository::new(pool),
                sessions,
                auth_config,
            ))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, users and sessions are kept in memory");

            let sessions = InMemorySessionRepository::new();
            spawn_session_cleanup(sessions.clone());

            api_router(AuthAppState::new(
                InMemoryUserRepository::new(),
                sessions,
                auth_config,
            ))
        }
    };

    // Build router
    let app = Router::new()
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Auth configuration from the environment
///
/// `SESSION_SECRET` is mandatory in release builds; debug builds fall back
/// to a random secret, so sessions do not survive a restart there.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let base = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        AuthConfig::default()
    };

    let session_secret = match env::var("SESSION_SECRET") {
        Ok(secret_b64) => decode_secret(&secret_b64)?,
        Err(_) if cfg!(debug_assertions) => base.session_secret,
        Err(_) => bail!("SESSION_SECRET must be set in production"),
    };

    let cookie_secure: bool = match env::var("COOKIE_SECURE") {
        Ok(value) => value
            .parse()
            .context("COOKIE_SECURE must be `true` or `false`")?,
        Err(_) => base.cookie_secure,
    };

    let password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|pepper| !pepper.is_empty())
        .map(String::into_bytes);

    Ok(AuthConfig {
        session_secret,
        cookie_secure,
        password_pepper,
        ..base
    })
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len()))
}

fn cors_layer() -> CorsLayer {
    let frontend_origins =
        env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}

/// Periodically drop expired sessions; failures are logged and retried
fn spawn_session_cleanup<S>(sessions: S)
where
    S: SessionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = sessions.cleanup_expired().await {
                tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
            }
        }
    });
}
