use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tower_sessions::{
    cookie::{Key, SameSite},
    Expiry, MemoryStore, SessionManagerLayer,
};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, state::AppState};

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `info` when it is unset or unparsable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Assembles the routes, session layer and request tracing.
///
/// Sessions live in process memory and are addressed by a cookie signed with
/// `key`; the cookie ends with the browser session.
///
/// # Arguments
/// - `state` - Shared stores and credentials
/// - `key` - Cookie signing key
/// - `secure_cookie` - Whether to set the `Secure` cookie attribute
pub fn build_app(state: AppState, key: Key, secure_cookie: bool) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnSessionEnd)
        .with_signed(key);

    router::router()
        .with_state(state)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let state = AppState::from_config(&config);
    tracing::info!(
        "Accepting {} registration numbers ({}{}..={}{})",
        state.registry.count(),
        config.registration.prefix,
        config.registration.first,
        config.registration.prefix,
        config.registration.last
    );

    let app = build_app(state, config.session_key, config.session_secure_cookie);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Server running on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
