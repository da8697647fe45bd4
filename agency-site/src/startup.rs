//! Application startup and lifecycle management.

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, RequestId,
};
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{CorsConfig, SiteConfig};
use crate::handlers::{
    health_check, index, metrics::metrics, not_found, record_cookie_consent, submit_contact,
    subscribe_newsletter,
};
use crate::services::{SubmissionStore, SupabaseStore};

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub store: Arc<dyn SubmissionStore>,
}

impl AppState {
    pub fn new(config: SiteConfig, store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health_check))
        .route("/api/contact", post(submit_contact))
        .route("/api/newsletter", post(subscribe_newsletter))
        .route("/api/cookie-consent", post(record_cookie_consent))
        .route("/metrics", get(metrics))
        .route_layer(from_fn(metrics_middleware))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(RequestId::as_str)
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalError(anyhow::anyhow!("Handler panicked: {}", detail)).into_response()
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SiteConfig) -> Result<Self, AppError> {
        let store = SupabaseStore::new(config.store.clone())
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Failed to build store client: {}", e)))?;

        if store.is_configured() {
            tracing::info!("External store configured, submissions will be forwarded");
        } else {
            tracing::warn!("SUPABASE_URL or SUPABASE_KEY not set, submissions will only be logged");
        }

        // Port 0 = random port for testing
        let address = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("agency-site: HTTP on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, Arc::new(store)),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(
            self.listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("HTTP server error: {}", e);
            e
        })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
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
