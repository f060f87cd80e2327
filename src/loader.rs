//! Fetching the publication list.
//!
//! The list lives at `data/publications.json` relative to the site root. It
//! is read straight from disk when building, or fetched over HTTP when the
//! preview server is pointed at a deployed site.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;
use url::Url;

use crate::error::LoadError;
use crate::models::Publication;

/// Where the publication JSON comes from.
#[derive(Debug, Clone)]
pub enum PublicationSource {
    File(PathBuf),
    Http(Url),
}

impl PublicationSource {
    /// Fetch and decode the publication array. No retries; the first failure
    /// is returned.
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<Vec<Publication>, LoadError> {
        match self {
            PublicationSource::File(path) => {
                debug!(path = %path.display(), "reading publications");
                let bytes = fs::read(path).await.map_err(|source| LoadError::Read {
                    path: path.clone(),
                    source,
                })?;
                parse_publications(&bytes)
            }
            PublicationSource::Http(url) => {
                debug!(%url, "fetching publications");
                let response = client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }
                let bytes = response.bytes().await?;
                parse_publications(&bytes)
            }
        }
    }
}

impl std::fmt::Display for PublicationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublicationSource::File(path) => write!(f, "{}", path.display()),
            PublicationSource::Http(url) => write!(f, "{}", url),
        }
    }
}

pub fn parse_publications(bytes: &[u8]) -> Result<Vec<Publication>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    const ONE_ENTRY: &str = r#"[{"id":"a","title":"T1","authors":["X"],"venue":"V","year":2020,"pdf_link":"p.pdf","bibtex":"@x"}]"#;

    async fn serve(app: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Url::parse(&format!("http://{}/data/publications.json", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("publications.json");
        std::fs::write(&path, ONE_ENTRY).unwrap();

        let papers = PublicationSource::File(path)
            .fetch(&reqwest::Client::new())
            .await
            .unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].bibtex, "@x");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PublicationSource::File(dir.path().join("nope.json"))
            .fetch(&reqwest::Client::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[tokio::test]
    async fn test_fetch_over_http() {
        let url = serve(Router::new().route("/data/publications.json", get(|| async { ONE_ENTRY }))).await;
        let papers = PublicationSource::Http(url)
            .fetch(&reqwest::Client::new())
            .await
            .unwrap();
        assert_eq!(papers[0].id, "a");
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let url = serve(Router::new().route(
            "/data/publications.json",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        ))
        .await;
        let err = PublicationSource::Http(url)
            .fetch(&reqwest::Client::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Status(404)));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let url = serve(Router::new().route("/data/publications.json", get(|| async { "[{\"id\":" }))).await;
        let err = PublicationSource::Http(url)
            .fetch(&reqwest::Client::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{}/data/publications.json", addr)).unwrap();
        let err = PublicationSource::Http(url)
            .fetch(&reqwest::Client::new())
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Transport(_)));
    }
}
