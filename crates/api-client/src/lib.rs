use core_types::{HealthStatus, NewRecord, Record};
use serde::{Deserialize, de::DeserializeOwned};

pub mod error;

pub use error::ApiError;

/// The JSON body the server sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// A typed client for the records API.
#[derive(Debug, Clone)]
pub struct RecordsClient {
    client: reqwest::Client,
    base_url: String,
}

impl RecordsClient {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:5000/api`). Trailing slashes are stripped so
    /// paths can be appended uniformly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// # GET /api/health
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// # GET /api/records
    /// Fetches all records, most recent first.
    pub async fn list_records(&self) -> Result<Vec<Record>, ApiError> {
        let response = self
            .client
            .get(format!("{}/records", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// # POST /api/records
    /// Creates a record with the given content and returns the stored row.
    pub async fn create_record(&self, content: &str) -> Result<Record, ApiError> {
        let body = NewRecord {
            content: Some(content.to_string()),
        };
        let response = self
            .client
            .post(format!("{}/records", self.base_url))
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Decodes a response body: success statuses deserialize into `T`,
    /// everything else is turned into [`ApiError::Api`] using the server's
    /// `{error}` body when it parses, or the raw text when it does not.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = RecordsClient::new("http://localhost:5000/api///");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[tokio::test]
    async fn unreachable_server_surfaces_a_request_error() {
        let client = RecordsClient::new("http://127.0.0.1:1/api");
        let err = client.list_records().await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }
}
