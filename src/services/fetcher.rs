use crate::error::Result;
use crate::types::{HttpResponse, COMMONS_FILE_BASE_URL};
use regex::Regex;
use tracing::{debug, info, warn};
use url::Url;

/// Minimal GET surface the importer needs from an HTTP client.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

pub struct ContentFetcher {
    file_page_pattern: Regex,
}

impl ContentFetcher {
    pub fn new() -> Result<Self> {
        let file_page_pattern = Regex::new(r"^https://commons\.wikimedia\.org/wiki/File:.+\.svg$")
            .map_err(anyhow::Error::from)?;

        Ok(Self { file_page_pattern })
    }

    pub fn page_url(flag: &str) -> String {
        format!("{}{}", COMMONS_FILE_BASE_URL, flag)
    }

    pub fn is_svg_file_page(&self, url: &str) -> bool {
        self.file_page_pattern.is_match(url)
    }

    /// GET `url` and return the body on a 200. Any other status, and any
    /// transport or URL error, is reported and yields an empty body.
    pub async fn download<H: HttpClient>(client: &H, url: &str) -> Vec<u8> {
        if let Err(e) = Url::parse(url) {
            warn!("Failed to download URL '{}': {}", url, e);
            return Vec::new();
        }

        match client.get(url).await {
            Ok(response) if response.status == 200 => {
                info!("Fetched {} bytes from {}", response.body.len(), url);
                response.body
            }
            Ok(response) => {
                debug!("Discarding {} bytes from {}", response.body.len(), url);
                warn!("Failed to download URL. Status code {}", response.status);
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to download URL '{}': {}", url, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlagImportError;
    use std::cell::RefCell;

    struct ScriptedClient {
        response: Option<HttpResponse>,
        requested: RefCell<Vec<String>>,
    }

    impl HttpClient for ScriptedClient {
        async fn get(&self, url: &str) -> Result<HttpResponse> {
            self.requested.borrow_mut().push(url.to_string());
            self.response.clone().ok_or_else(|| {
                FlagImportError::Anyhow(anyhow::anyhow!("connection refused"))
            })
        }
    }

    fn scripted(response: Option<HttpResponse>) -> ScriptedClient {
        ScriptedClient {
            response,
            requested: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_page_url_appends_fragment() {
        assert_eq!(
            ContentFetcher::page_url("Flag_of_Wales.svg"),
            "https://commons.wikimedia.org/wiki/File:Flag_of_Wales.svg"
        );
    }

    #[test]
    fn test_file_page_validation() {
        let fetcher = ContentFetcher::new().unwrap();

        assert!(fetcher.is_svg_file_page(&ContentFetcher::page_url("Flag_of_Wales.svg")));
        assert!(!fetcher.is_svg_file_page(&ContentFetcher::page_url("Flag_of_Wales.png")));
        assert!(!fetcher.is_svg_file_page(&ContentFetcher::page_url("Flag_of_Wales.SVG")));
        assert!(!fetcher.is_svg_file_page(&ContentFetcher::page_url(".svg")));
        assert!(!fetcher.is_svg_file_page(&ContentFetcher::page_url("Flag.svg/history")));
        assert!(!fetcher.is_svg_file_page("https://commons.wikimedia.org/wiki/Flag.svg"));
    }

    #[tokio::test]
    async fn test_download_returns_body_on_ok() {
        let client = scripted(Some(HttpResponse {
            status: 200,
            body: b"<svg/>".to_vec(),
        }));

        let body = ContentFetcher::download(&client, "https://upload.wikimedia.org/flag.svg").await;
        assert_eq!(body, b"<svg/>");
    }

    #[tokio::test]
    async fn test_download_discards_body_on_error_status() {
        let client = scripted(Some(HttpResponse {
            status: 404,
            body: b"not found".to_vec(),
        }));

        let body = ContentFetcher::download(&client, "https://upload.wikimedia.org/flag.svg").await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_download_swallows_transport_errors() {
        let client = scripted(None);

        let body = ContentFetcher::download(&client, "https://upload.wikimedia.org/flag.svg").await;
        assert!(body.is_empty());
        assert_eq!(client.requested.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_download_skips_unparsable_url() {
        let client = scripted(Some(HttpResponse {
            status: 200,
            body: b"<svg/>".to_vec(),
        }));

        let body = ContentFetcher::download(&client, "").await;
        assert!(body.is_empty());
        assert!(client.requested.borrow().is_empty());
    }
}
