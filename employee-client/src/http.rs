//! HTTP client for the employee API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{DeleteResponse, Employee, EmployeeInput, ErrorBody, HealthResponse};

use crate::{ClientConfig, ClientError, ClientResult};

/// Employee API operations
///
/// Implemented by [`EmployeeClient`]; [`crate::EmployeeList`] only depends on
/// this trait.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> ClientResult<Vec<Employee>>;
    async fn get(&self, id: i64) -> ClientResult<Employee>;
    async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee>;
    async fn update(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee>;
    async fn delete(&self, id: i64) -> ClientResult<DeleteResponse>;
}

/// HTTP client for making network requests to the employee server
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    client: Client,
    base_url: String,
}

impl EmployeeClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Liveness probe
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.client.get(self.url("api/health")).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            tracing::debug!(status = status.as_u16(), body = %text, "Request failed");
            return Err(error_from_status(status, &text));
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl EmployeeApi for EmployeeClient {
    async fn list(&self) -> ClientResult<Vec<Employee>> {
        let response = self.client.get(self.url("api/employees")).send().await?;
        Self::handle_response(response).await
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        let url = self.url(&format!("api/employees/{id}"));
        let response = self.client.get(url).send().await?;
        Self::handle_response(response).await
    }

    async fn create(&self, input: &EmployeeInput) -> ClientResult<Employee> {
        let response = self
            .client
            .post(self.url("api/employees"))
            .json(input)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update(&self, id: i64, input: &EmployeeInput) -> ClientResult<Employee> {
        let url = self.url(&format!("api/employees/{id}"));
        let response = self.client.put(url).json(input).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, id: i64) -> ClientResult<DeleteResponse> {
        let url = self.url(&format!("api/employees/{id}"));
        let response = self.client.delete(url).send().await?;
        Self::handle_response(response).await
    }
}

/// Map a non-success status and its body to a [`ClientError`]
///
/// Uses the `error` field when the body is an [`ErrorBody`], otherwise the raw text.
fn error_from_status(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        s if s.is_server_error() => ClientError::Server {
            status: s.as_u16(),
            message,
        },
        s => ClientError::Unexpected {
            status: s.as_u16(),
            message,
        },
    }
}
