//! Static Site Server
//!
//! Serves the compiled frontend bundle. Routing happens in the browser on
//! the URL fragment, so every unknown path falls back to `index.html`.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//! - `GET /*` - Files from the dist directory, `index.html` otherwise

pub mod error;
pub mod health;

pub use error::{ServerError, ServerResult};

use axum::{routing::get, Router};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Shared state for the health handlers
#[derive(Debug)]
pub struct SiteServerState {
    pub dist_dir: PathBuf,
    pub start_time: Instant,
}

impl SiteServerState {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            start_time: Instant::now(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn bundle_ready(&self) -> bool {
        self.index_path().is_file()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Build the router serving `dist_dir`
pub fn build_router(dist_dir: &Path) -> Router {
    let state = Arc::new(SiteServerState::new(dist_dir));

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/", get(health::full_health));

    let static_files =
        ServeDir::new(&state.dist_dir).fallback(ServeFile::new(state.index_path()));

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the static site server
pub async fn serve(config: &ServerConfig) -> ServerResult<()> {
    let dist_dir = PathBuf::from(&config.dist_dir);
    if !dist_dir.is_dir() {
        return Err(ServerError::Dist(format!(
            "{} is not a directory (build the frontend first)",
            dist_dir.display()
        )));
    }
    if !dist_dir.join("index.html").is_file() {
        tracing::warn!("No index.html in {:?}; readiness probe will fail", dist_dir);
    }

    let router = build_router(&dist_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MyWebComic listening on {} serving {:?}", addr, dist_dir);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("MyWebComic server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>MyWebComic</body></html>";

    fn dist_with_bundle() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("webcomic-ui.js"), "export default 1;").unwrap();
        dir
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    #[tokio::test]
    async fn test_health_live() {
        let dir = dist_with_bundle();
        let (status, _) = fetch(build_router(dir.path()), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_index() {
        let dir = tempdir().unwrap();
        let (status, _) = fetch(build_router(dir.path()), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let dir = dist_with_bundle();
        let (status, _) = fetch(build_router(dir.path()), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_reports_version() {
        let dir = dist_with_bundle();
        let (status, body) = fetch(build_router(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let dir = dist_with_bundle();
        let (status, body) = fetch(build_router(dir.path()), "/webcomic-ui.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "export default 1;");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = dist_with_bundle();
        let (status, body) = fetch(build_router(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let dir = dist_with_bundle();
        let (status, body) = fetch(build_router(dir.path()), "/chapters/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serve_rejects_missing_dist() {
        let dir = tempdir().unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().join("nope").to_string_lossy().to_string(),
            ..ServerConfig::default()
        };
        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Dist(_)));
    }
}
