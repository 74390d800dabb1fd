//! `ureq`-backed API client

use serde_json::Value;

use super::{ApiError, ConfigError, Method, NotionApi, Settings};

/// Blocking HTTP client with the fixed Notion headers
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
    token: String,
    api_version: String,
}

impl HttpClient {
    pub fn new(base_url: &str, token: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            api_version: api_version.into(),
        }
    }

    /// Builds a client from resolved settings; fails without a token
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let token = settings.require_token()?;
        Ok(Self::new(&settings.base_url, token, settings.api_version.clone()))
    }

    /// Full URL for a relative endpoint
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl NotionApi for HttpClient {
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let request = self
            .agent
            .request(method.as_str(), &self.url(endpoint))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Notion-Version", &self.api_version)
            .set("Content-Type", "application/json");

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        let response = match result {
            Ok(response) => response,
            // ureq turns 4xx/5xx into errors; the body is still readable
            Err(ureq::Error::Status(status, response)) => {
                return Err(ApiError::Status {
                    status,
                    body: response.into_string().unwrap_or_default(),
                });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(ApiError::Transport {
                    endpoint: endpoint.to_string(),
                    message: transport.to_string(),
                });
            }
        };

        let status = response.status();
        if status != 200 && status != 202 {
            return Err(ApiError::Status {
                status,
                body: response.into_string().unwrap_or_default(),
            });
        }

        response.into_json().map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
