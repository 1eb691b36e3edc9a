use crate::{
    backend::{ConfigurationGetter, ControlPlaneApi},
    config::CloudConfig,
    errors::{ApiError, ApiResult, CloudError},
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use ucp_models::{
    CloudControlPlaneResponse, ConfigurationResponse,
    ControlPlaneCreateParameters, ControlPlaneListResponse, ListOptions,
};
use url::Url;

const CONTROL_PLANES_PATH: &str = "controlPlanes";
const CONFIGURATIONS_PATH: &str = "configurations";

/// HTTP client for the cloud REST API. Serves both the control plane and the
/// configuration endpoints.
#[derive(Clone)]
pub struct CloudHttpClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl CloudHttpClient {
    pub fn new(config: &CloudConfig) -> Result<Self, CloudError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ucp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Request)?;

        Ok(Self {
            client,
            base_url: config.api_url()?,
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Builds `<base>/v1/<segments...>`, percent-encoding each segment.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::InvalidRequest(format!(
                    "API endpoint '{}' cannot be a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending API request");
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send_json<T>(&self, req: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = Self::check_status(req.send().await?).await?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status == StatusCode::NOT_FOUND {
            let detail = if message.is_empty() { url } else { message };
            Err(ApiError::NotFound(detail))
        } else {
            Err(ApiError::Status {
                code: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ControlPlaneApi for CloudHttpClient {
    async fn create(
        &self,
        account: &str,
        params: &ControlPlaneCreateParameters,
    ) -> ApiResult<CloudControlPlaneResponse> {
        let url = self.url(&[CONTROL_PLANES_PATH, account])?;
        self.send_json(self.request(Method::POST, url).json(params))
            .await
    }

    async fn delete(&self, account: &str, name: &str) -> ApiResult<()> {
        let url = self.url(&[CONTROL_PLANES_PATH, account, name])?;
        Self::check_status(self.request(Method::DELETE, url).send().await?)
            .await?;
        Ok(())
    }

    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<CloudControlPlaneResponse> {
        let url = self.url(&[CONTROL_PLANES_PATH, account, name])?;
        self.send_json(self.request(Method::GET, url)).await
    }

    async fn list(
        &self,
        account: &str,
        opts: ListOptions,
    ) -> ApiResult<ControlPlaneListResponse> {
        let url = self.url(&[CONTROL_PLANES_PATH, account])?;
        let req = self.request(Method::GET, url).query(&opts.query_pairs());
        self.send_json(req).await
    }
}

#[async_trait]
impl ConfigurationGetter for CloudHttpClient {
    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<ConfigurationResponse> {
        let url = self.url(&[CONFIGURATIONS_PATH, account, name])?;
        self.send_json(self.request(Method::GET, url)).await
    }
}
