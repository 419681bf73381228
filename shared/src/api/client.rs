use crate::api::response::interpret_response;
use crate::api::TenantApi;
use crate::config::FrontendConfig;
use crate::entity::login::LoginPayload;
use crate::entity::signup::SignupPayload;
use crate::errors::{FrontendError, FrontendResult, ToFrontendError};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// `TenantApi` over HTTP. One POST per call; no retries, no timeout.
#[derive(Clone, Debug)]
pub struct HttpApiClient {
    client: reqwest::Client,
    config: FrontendConfig,
}

impl HttpApiClient {
    pub fn new(config: FrontendConfig) -> FrontendResult<Self> {
        check_base_url(&config.api_base_url)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| e.to_frontend_error())?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    #[instrument(skip(self, payload), name = "api.client.post_json")]
    async fn post_json<T>(&self, url: String, payload: &T) -> FrontendResult<Option<String>>
    where
        T: Serialize + Sync + ?Sized,
    {
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!("request failed: {}", e);
                e.to_frontend_error()
            })?;

        let status = response.status().as_u16();
        // An unreadable body counts as an empty one
        let body = response.text().await.unwrap_or_default();
        debug!(status, "received response");

        interpret_response(status, &body)
    }
}

/// The base URL must be an absolute http(s) URL with a host.
fn check_base_url(base_url: &str) -> FrontendResult<()> {
    let url = reqwest::Url::parse(base_url).map_err(|e| {
        FrontendError::InvalidConfig(format!("API base URL {:?}: {}", base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(FrontendError::InvalidConfig(format!(
            "API base URL {:?} must be an http(s) URL with a host",
            base_url
        )));
    }
    Ok(())
}

#[async_trait]
impl TenantApi for HttpApiClient {
    async fn signup(&self, payload: &SignupPayload) -> FrontendResult<Option<String>> {
        self.post_json(self.config.signup_url(), payload).await
    }

    async fn login(&self, payload: &LoginPayload) -> FrontendResult<Option<String>> {
        self.post_json(self.config.login_url(), payload).await
    }
}
