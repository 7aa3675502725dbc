use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;

use config::ServerConfig;

const CACHE_CONTROL: &str = "public, max-age=3600";

pub async fn health_check() -> &'static str {
    "OK"
}

/// Router serving the compiled site. Paths with no matching file get
/// `index.html` so deep links and `#anchor` reloads land on the page.
pub fn app(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn site() -> (tempfile::TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>roam</html>").unwrap();
        std::fs::create_dir(dir.path().join("images")).unwrap();
        std::fs::write(dir.path().join("images/bracelet.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let config = ServerConfig::from_lookup(|_| None).unwrap().with_dist_dir(dir.path());
        (dir, config)
    }

    async fn get(config: &ServerConfig, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app(config)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, headers, body)
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let (_dir, config) = site();
        let (status, _, body) = get(&config, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");
    }

    #[tokio::test]
    async fn serves_index_at_root() {
        let (_dir, config) = site();
        let (status, headers, body) = get(&config, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>roam</html>");
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), CACHE_CONTROL);
    }

    #[tokio::test]
    async fn serves_assets() {
        let (_dir, config) = site();
        let (status, headers, body) = get(&config, "/images/bracelet.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");
        assert_eq!(body, [0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let (_dir, config) = site();
        let (status, _, body) = get(&config, "/features/heart-rate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<html>roam</html>");
    }
}
