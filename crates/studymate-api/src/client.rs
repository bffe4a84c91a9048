//! HTTP plumbing shared by every endpoint module.

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use studymate_shared::constants::{BYPASS_HEADER_NAME, BYPASS_HEADER_VALUE};
use studymate_shared::types::ApiResult;

use crate::config::ApiConfig;
use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};

/// Error response body convention: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the remote content API.
///
/// Cheap to clone; the inner `reqwest::Client` is an `Arc` around its
/// connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured base URL.
    ///
    /// Every request carries the tunnel-bypass header so responses from
    /// a proxied deployment are never the proxy's interstitial page.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            BYPASS_HEADER_NAME,
            HeaderValue::from_static(BYPASS_HEADER_VALUE),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request and unwrap the `ApiResult` envelope.
    ///
    /// Non-success statuses are converted to [`ApiError::Status`] with
    /// the server's `message` field when the body is well-formed JSON,
    /// the generic fallback otherwise.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        tracing::debug!(status = %status, url = %response.url(), "api response");

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResult<T> = response.json().await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped_from_base_url() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:8090/api/v1/".into(),
        })
        .unwrap();
        assert_eq!(client.url("/posts"), "http://localhost:8090/api/v1/posts");
    }
}
