//! Public image catalog loaded from a JSON manifest.
//!
//! The manifest is a JSON array of image URLs, fetched once when the gallery
//! starts. Loading is best-effort: any failure degrades to an empty catalog.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};

/// Default manifest location, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "gallery-manifest.json";

/// Where the manifest lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Http(String),
    File(PathBuf),
}

impl ManifestSource {
    /// `http://` and `https://` locations are fetched over the network;
    /// anything else is treated as a file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for ManifestSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_MANIFEST))
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Retrieves raw manifest bytes.
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    async fn fetch(&self, source: &ManifestSource) -> CoreResult<Vec<u8>>;
}

/// Fetches over HTTP with `reqwest` or from disk with `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct DefaultFetcher {
    client: reqwest::Client,
}

impl DefaultFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ManifestFetcher for DefaultFetcher {
    async fn fetch(&self, source: &ManifestSource) -> CoreResult<Vec<u8>> {
        match source {
            ManifestSource::File(path) => tokio::fs::read(path).await.map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CoreError::NotFound(path.clone()),
                _ => CoreError::Io(e),
            }),
            ManifestSource::Http(url) => {
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| CoreError::Manifest(e.to_string()))?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CoreError::Manifest(format!("HTTP {}", status.as_u16())));
                }
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| CoreError::Manifest(e.to_string()))?;
                Ok(body.to_vec())
            }
        }
    }
}

/// Parses manifest JSON.
///
/// An array yields its string elements (anything else inside is skipped);
/// any other JSON shape yields an empty catalog.
///
/// # Errors
///
/// [`CoreError::Manifest`] if `bytes` is not valid JSON.
pub fn parse_manifest(bytes: &[u8]) -> CoreResult<Vec<String>> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CoreError::Manifest(e.to_string()))?;
    let urls = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(urls)
}

/// Fetches and parses the manifest, surfacing every failure.
pub async fn fetch_manifest(
    fetcher: &dyn ManifestFetcher,
    source: &ManifestSource,
) -> CoreResult<Vec<String>> {
    let bytes = fetcher.fetch(source).await?;
    parse_manifest(&bytes)
}

/// Best-effort catalog load: failures are logged and produce `[]`.
pub async fn load_catalog(fetcher: &dyn ManifestFetcher, source: &ManifestSource) -> Vec<String> {
    match fetch_manifest(fetcher, source).await {
        Ok(urls) => urls,
        Err(e) => {
            tracing::debug!(%source, "No gallery manifest found: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response and returns its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}/gallery-manifest.json")
    }

    struct FailingFetcher;

    #[async_trait]
    impl ManifestFetcher for FailingFetcher {
        async fn fetch(&self, _source: &ManifestSource) -> CoreResult<Vec<u8>> {
            Err(CoreError::Manifest("connection refused".to_string()))
        }
    }

    #[test]
    fn parse_array_of_strings() {
        let urls = parse_manifest(br#"["a.png","b.png"]"#).unwrap();
        assert_eq!(urls, vec!["a.png", "b.png"]);
    }

    #[test]
    fn parse_skips_non_string_items() {
        let urls = parse_manifest(br#"["a.png", 3, null, {"src": "x"}, "b.png"]"#).unwrap();
        assert_eq!(urls, vec!["a.png", "b.png"]);
    }

    #[test]
    fn parse_non_array_is_empty() {
        assert!(parse_manifest(br#"{"images": ["a.png"]}"#).unwrap().is_empty());
        assert!(parse_manifest(br#""a.png""#).unwrap().is_empty());
    }

    #[test]
    fn parse_invalid_json_is_error() {
        let result = parse_manifest(b"<html>not found</html>");
        assert!(matches!(result.unwrap_err(), CoreError::Manifest(_)));
    }

    #[test]
    fn source_parse_distinguishes_http() {
        assert_eq!(
            ManifestSource::parse("https://cdn.example/m.json"),
            ManifestSource::Http("https://cdn.example/m.json".to_string())
        );
        assert_eq!(
            ManifestSource::parse("public/gallery-manifest.json"),
            ManifestSource::File(PathBuf::from("public/gallery-manifest.json"))
        );
        assert_eq!(
            ManifestSource::default(),
            ManifestSource::File(PathBuf::from(DEFAULT_MANIFEST))
        );
    }

    #[tokio::test]
    async fn file_manifest_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery-manifest.json");
        fs::write(&path, r#"["a.png","b.png"]"#).unwrap();

        let urls = load_catalog(&DefaultFetcher::new(), &ManifestSource::File(path)).await;
        assert_eq!(urls, vec!["a.png", "b.png"]);
    }

    #[tokio::test]
    async fn missing_file_manifest_is_empty() {
        let tmp = TempDir::new().unwrap();
        let source = ManifestSource::File(tmp.path().join("gallery-manifest.json"));

        let err = fetch_manifest(&DefaultFetcher::new(), &source).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        assert!(load_catalog(&DefaultFetcher::new(), &source).await.is_empty());
    }

    #[tokio::test]
    async fn http_manifest_loads() {
        let url = serve_once("200 OK", r#"["a.png","b.png"]"#).await;
        let urls = load_catalog(&DefaultFetcher::new(), &ManifestSource::Http(url)).await;
        assert_eq!(urls, vec!["a.png", "b.png"]);
    }

    #[tokio::test]
    async fn http_404_is_empty_catalog() {
        let url = serve_once("404 Not Found", "").await;
        let source = ManifestSource::Http(url);

        let urls = load_catalog(&DefaultFetcher::new(), &source).await;
        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn http_404_reports_status() {
        let url = serve_once("404 Not Found", "").await;
        let err = fetch_manifest(&DefaultFetcher::new(), &ManifestSource::Http(url))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "manifest unavailable: HTTP 404");
    }

    #[tokio::test]
    async fn fetch_failure_is_swallowed() {
        let urls = load_catalog(&FailingFetcher, &ManifestSource::default()).await;
        assert!(urls.is_empty());
    }
}
