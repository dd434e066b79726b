use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{ApiError, RequestScope};

/// Thin JSON-over-HTTP client for the VentureFlow backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Client(err.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POSTs `body` as JSON to `path` and decodes the JSON response.
    /// Non-2xx statuses surface as [`ApiError::Http`]; nothing is retried here.
    pub async fn send_post<B, R>(&self, path: &str, body: &B, scope: &RequestScope) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, "POST");

        scope
            .run(async {
                let response = self
                    .http
                    .post(&url)
                    .json(body)
                    .send()
                    .await
                    .map_err(ApiError::from_transport)?;

                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(ApiError::Http {
                        status: status.as_u16(),
                        body,
                    });
                }

                response
                    .json::<R>()
                    .await
                    .map_err(|err| ApiError::Decode(err.to_string()))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let client = ApiClient::new("http://localhost:8080/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.endpoint("/categories"), "http://localhost:8080/v1/categories");
        assert_eq!(client.endpoint("listings"), "http://localhost:8080/v1/listings");
    }
}
