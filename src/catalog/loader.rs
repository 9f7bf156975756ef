//! Catalog loading from a file or an HTTP endpoint

use eyre::{Context, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use super::Catalog;
use crate::config::Config;

/// Where the catalog document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Interpret a config/CLI value: http(s) URLs are fetched, anything else is a path
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::File(Config::expand_path(&PathBuf::from(trimmed)))
        }
    }

    /// Load the whole catalog. Any failure yields no catalog at all.
    pub fn load(&self) -> Result<Catalog> {
        let content = match self {
            CatalogSource::File(path) => fs::read_to_string(path).context("Failed to read catalog file")?,
            CatalogSource::Url(url) => fetch(&ureq::Agent::new_with_defaults(), url)?,
        };

        let catalog = Catalog::from_json(&content).context("Failed to parse catalog JSON")?;
        if catalog.is_empty() {
            log::warn!("Catalog at {} has no items", self);
        }
        log::info!("Loaded {} items from {}", catalog.len(), self);
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// GET the catalog, bypassing any intermediate caches. Non-2xx statuses are errors.
fn fetch(agent: &ureq::Agent, url: &str) -> Result<String> {
    log::debug!("Fetching catalog from {}", url);

    let mut response = agent
        .get(url)
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
        .call()
        .context("Failed to fetch catalog")?;

    response
        .body_mut()
        .read_to_string()
        .context("Failed to read catalog response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};
    use tempfile::TempDir;

    const ONE_ITEM: &str = r#"[{"id":"1","name":"Shirt","category":"top","type":"shirt","thickness":"thin",
        "length":"short","season":["summer"],"location":"closet-A","image":"/1.png"}]"#;

    /// Answer a single HTTP request with `status` and `body`, returning the raw request head
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/items.json", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&head).to_lowercase()
        });

        (url, handle)
    }

    fn direct_agent() -> ureq::Agent {
        ureq::Agent::config_builder().proxy(None).build().into()
    }

    #[test]
    fn test_fetch_sends_no_cache_headers() {
        let (url, server) = serve_once("200 OK", ONE_ITEM);
        let body = fetch(&direct_agent(), &url).unwrap();
        let request = server.join().unwrap();

        assert!(request.starts_with("get /items.json"));
        assert!(request.contains("cache-control: no-cache"));
        assert!(request.contains("pragma: no-cache"));
        assert_eq!(Catalog::from_json(&body).unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_error_status_fails() {
        let (url, server) = serve_once("500 Internal Server Error", "oops");
        let err = fetch(&direct_agent(), &url).unwrap_err();
        server.join().unwrap();
        assert!(err.to_string().contains("Failed to fetch catalog"));
    }

    #[test]
    fn test_fetch_not_found_fails() {
        let (url, server) = serve_once("404 Not Found", "");
        assert!(fetch(&direct_agent(), &url).is_err());
        server.join().unwrap();
    }

    #[test]
    fn test_parse_url() {
        assert_eq!(
            CatalogSource::parse("https://example.com/data/items.json"),
            CatalogSource::Url("https://example.com/data/items.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse(" http://localhost:3000/items.json "),
            CatalogSource::Url("http://localhost:3000/items.json".to_string())
        );
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            CatalogSource::parse("/srv/wardrobe/items.json"),
            CatalogSource::File(PathBuf::from("/srv/wardrobe/items.json"))
        );
    }

    #[test]
    fn test_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, ONE_ITEM).unwrap();

        let catalog = CatalogSource::File(path).load().unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "[]").unwrap();

        let catalog = CatalogSource::File(path).load().unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = CatalogSource::File(dir.path().join("nope.json")).load();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_is_all_or_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        // Second record has an unknown category
        fs::write(
            &path,
            r#"[{"id":"1","name":"Shirt","category":"top","type":"shirt","thickness":"thin",
                "length":"short","season":[],"location":"a","image":"/1.png"},
               {"id":"2","name":"Cap","category":"hat","type":"hat","thickness":"thin",
                "length":"short","season":[],"location":"a","image":"/2.png"}]"#,
        )
        .unwrap();

        let err = CatalogSource::File(path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog JSON"));
    }
}
