use crate::models::{
    error::AppError,
    submission::{FindResult, SubmissionPayload},
};

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const FIND_ES_PATH: &str = "/es/v1/find_es";

// API CONFIGURATION
/// Configuration for the empty space finder client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Full URL of the find-empty-space endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{FIND_ES_PATH}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for `ApiConfig`.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Points the client at another host, e.g. `http://localhost:8080`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

// REQUEST
/// A fully resolved outbound request: where it goes and the exact body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub body: String,
}

// CLIENT
/// HTTP client for the empty space finder service.
pub struct EmptySpaceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl EmptySpaceClient {
    /// Creates a client pointed at the local service.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        reqwest::Url::parse(&config.endpoint()).map_err(|e| {
            AppError::ConfigError(format!("Invalid endpoint {}: {e}", config.endpoint()))
        })?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Resolves the request a submission produces without sending it.
    pub fn prepare(&self, payload: &SubmissionPayload) -> Result<SubmitRequest, AppError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| AppError::ApiError(format!("Failed to encode payload: {e}")))?;

        Ok(SubmitRequest {
            url: self.config.endpoint(),
            body,
        })
    }

    /// Posts the payload once and decodes the service's answer.
    pub async fn find_empty_space(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<FindResult, AppError> {
        let request = self.prepare(payload)?;

        let response = self
            .http
            .post(&request.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json::<FindResult>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("No endpoint at {}", self.config.endpoint())),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ServerError(format!("{status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Submits a payload to the default endpoint.
pub async fn submit(payload: SubmissionPayload) -> Result<FindResult, AppError> {
    EmptySpaceClient::new()?.find_empty_space(&payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/es/v1/find_es");
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/")
            .build();
        assert_eq!(config.endpoint(), "http://localhost:8080/es/v1/find_es");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ApiConfig::builder().base_url("not a url").build();
        let err = EmptySpaceClient::with_config(config).err();
        assert!(matches!(err, Some(AppError::ConfigError(_))));
    }

    #[test]
    fn test_prepare_default_payload() {
        let client = EmptySpaceClient::new().unwrap();
        let request = client.prepare(&SubmissionPayload::new(4)).unwrap();

        assert_eq!(request.url, "http://127.0.0.1:5000/es/v1/find_es");
        assert_eq!(request.body, r#"{"data":4,"max_clusters":4}"#);
    }

    #[test]
    fn test_status_classification() {
        let client = EmptySpaceClient::new().unwrap();

        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::NOT_FOUND, ""),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            AppError::ServerError(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::BAD_REQUEST, "bad"),
            AppError::ApiError(_)
        ));
    }
}
