// HTTP client for the extraction backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use super::config::BackendConfig;
use super::wire::{DownloadUrlResponse, ErrorEnvelope, UrlRequest, VideoInfoResponse};
use crate::session::errors::BackendError;
use crate::session::models::{DownloadResult, ServerStatus, VideoMetadata};
use crate::session::traits::ExtractorApi;

/// Header carrying the pre-shared backend credential
const API_KEY_HEADER: &str = "X-API-Key";

/// Stateless request/response mapper for the extraction backend.
///
/// Owns no session state; each method is a single round trip and all
/// failures are normalized into [`BackendError`]. Retries, if any, belong
/// to the caller.
#[derive(Debug)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Build a client from explicit configuration.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| BackendError::new(format!("Invalid API key header: {}", e)))?;
        headers.insert(API_KEY_HEADER, api_key);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds));

        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| BackendError::new(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read a JSON body from a 2xx response, or normalize the failure: a
    /// non-2xx response is expected to carry a `detail` field, the status
    /// line is used when it does not.
    async fn read_json<T>(response: reqwest::Response) -> Result<T, BackendError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let detail = response
            .json::<ErrorEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.detail);
        Err(BackendError::new(
            detail.unwrap_or_else(|| format!("HTTP {}", status)),
        ))
    }
}

#[async_trait]
impl ExtractorApi for HttpBackendClient {
    async fn fetch_server_status(&self) -> Result<ServerStatus, BackendError> {
        tracing::debug!("checking backend status");
        let response = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, BackendError> {
        tracing::debug!(url, "requesting video info");
        let response = self
            .http
            .post(format!("{}/api/video-info", self.base_url))
            .json(&UrlRequest { url })
            .send()
            .await?;
        let info: VideoInfoResponse = Self::read_json(response).await?;
        Ok(info.into())
    }

    async fn resolve_download(
        &self,
        url: &str,
        quality: &str,
    ) -> Result<DownloadResult, BackendError> {
        tracing::debug!(quality, "requesting download url");
        let response = self
            .http
            .post(format!("{}/api/get-download-url", self.base_url))
            .query(&[("quality", quality)])
            .json(&UrlRequest { url })
            .send()
            .await?;
        let resolved: DownloadUrlResponse = Self::read_json(response).await?;
        Ok(resolved.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let config = BackendConfig::new("https://extractor.example.com/", "key");
        let client = HttpBackendClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://extractor.example.com");
    }

    #[test]
    fn test_invalid_api_key_header_rejected() {
        let config = BackendConfig::new("https://extractor.example.com", "bad\nkey");
        let err = HttpBackendClient::new(&config).unwrap_err();
        assert!(err.message.contains("Invalid API key header"));
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let config = BackendConfig::new("https://extractor.example.com", "key")
            .with_proxy(Some("not a proxy url".to_string()));
        let err = HttpBackendClient::new(&config).unwrap_err();
        assert!(err.message.contains("Invalid proxy URL"));
    }

    #[test]
    fn test_default_timeout_is_the_transport_ceiling() {
        let config = BackendConfig::new("https://extractor.example.com", "key");
        assert_eq!(config.timeout_seconds, 600);
    }
}
