use reqwest::{Method, RequestBuilder, Response, StatusCode};
use translation_provider::ProviderError;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// HTTP client bound to one Tolgee project.
///
/// Every request is resolved against the project base URL and carries the
/// API key header.
#[derive(Debug, Clone)]
pub struct ScopedClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ScopedClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.base_url, path))
            .header(API_KEY_HEADER, &self.api_key)
    }

    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        request
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))
    }
}

/// A finished response, buffered so its status can be checked later.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub method: Method,
    pub path: String,
    pub status: StatusCode,
    pub body: String,
}

impl ResponseRecord {
    pub async fn read(
        method: Method,
        path: impl Into<String>,
        response: Response,
    ) -> Result<Self, ProviderError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(format!("failed to read response body: {e}")))?;

        Ok(Self {
            method,
            path: path.into(),
            status,
            body,
        })
    }
}

/// Log every non-200 response; fail on the first server error.
pub fn check_responses(responses: &[ResponseRecord], message: &str) -> Result<(), ProviderError> {
    for response in responses {
        if response.status == StatusCode::OK {
            continue;
        }

        tracing::error!(
            method = %response.method,
            path = %response.path,
            status = response.status.as_u16(),
            body = %response.body,
            "{message}"
        );

        if response.status.is_server_error() {
            return Err(ProviderError::Remote {
                message: message.to_owned(),
                status: response.status.as_u16(),
                body: response.body.clone(),
            });
        }
    }

    Ok(())
}
