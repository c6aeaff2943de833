use crate::error::{CrawlError, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Default corpus origin that page identifiers are resolved against.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Network read of one page given its corpus-relative identifier.
///
/// `Ok(None)` means the page could not be located; transport errors
/// surface as `Err` and are degraded to an empty body by the controller.
pub trait PageFetcher {
    async fn fetch(&self, id: &str) -> Result<Option<String>>;
}

/// reqwest-backed fetcher resolving identifiers against a fixed origin.
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CrawlError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        let client = Client::builder()
            .user_agent("wikigraph/0.1 (https://github.com/trapdoorsec/wikigraph)")
            .timeout(std::time::Duration::from_secs(10))
            .connect_timeout(std::time::Duration::from_secs(5))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, id: &str) -> Result<Option<String>> {
        let url = self
            .base_url
            .join(id)
            .map_err(|e| CrawlError::InvalidSeed(format!("{}: {}", id, e)))?;

        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            debug!("Page {} returned status {}", id, response.status());
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_resolves_against_base_origin() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/wiki/Tennis"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<p>Tennis is a racket sport</p>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::with_base_url(&mock_server.uri()).unwrap();
        let body = fetcher.fetch("/wiki/Tennis").await.unwrap();

        assert_eq!(body.as_deref(), Some("<p>Tennis is a racket sport</p>"));
    }

    #[tokio::test]
    async fn test_fetch_missing_page_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::with_base_url(&mock_server.uri()).unwrap();
        let body = fetcher.fetch("/wiki/Nonexistent").await.unwrap();

        assert!(body.is_none());
    }

    #[tokio::test]
    async fn test_fetch_server_error_returns_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::with_base_url(&mock_server.uri()).unwrap();
        let body = fetcher.fetch("/wiki/Broken").await.unwrap();

        assert!(body.is_none());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = HttpFetcher::with_base_url("not a url");
        assert!(matches!(result, Err(CrawlError::InvalidBaseUrl(_))));
    }
}
