//! Preview server for a built site.
//!
//! Serves the output directory as static files. Directory requests resolve
//! to `index.html`, so every route path works exactly as it would on a
//! plain file server.

use axum::Router;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tower_http::services::ServeDir;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Directory not found: {0}. Run 'mulyam build' first.")]
    MissingDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Router serving `dir`.
pub fn router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// Serve `dir` on `127.0.0.1:port` until the process is stopped.
pub async fn run(port: u16, dir: &Path) -> Result<(), ServeError> {
    if !dir.is_dir() {
        return Err(ServeError::MissingDir(dir.to_path_buf()));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    axum::serve(listener, router(dir)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = run(0, &tmp.path().join("dist")).await.unwrap_err();
        assert!(matches!(err, ServeError::MissingDir(_)));
        assert!(err.to_string().contains("mulyam build"));
    }
}
