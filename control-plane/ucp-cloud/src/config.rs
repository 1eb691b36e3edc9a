use crate::errors::CloudError;
use anyhow::Result;
use envconfig::Envconfig;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.upbound.io";
pub const DEFAULT_PROXY_ENDPOINT: &str =
    "https://proxy.upbound.io/v1/controlPlanes";

#[derive(Debug, Clone, Envconfig)]
pub struct CloudConfig {
    #[envconfig(from = "UCP_ACCOUNT")]
    pub account: Option<String>,

    #[envconfig(from = "UCP_TOKEN")]
    pub token: Option<String>,

    #[envconfig(from = "UCP_API_ENDPOINT", default = "https://api.upbound.io")]
    pub api_endpoint: String,

    #[envconfig(from = "UCP_PROXY_ENDPOINT")]
    pub proxy_endpoint: Option<String>,

    // 0 disables the request timeout
    #[envconfig(from = "UCP_API_TIMEOUT", default = "30")]
    pub api_timeout_seconds: u64,

    #[envconfig(from = "UCP_INSECURE_SKIP_TLS_VERIFY", default = "false")]
    pub insecure_skip_tls_verify: bool,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            account: None,
            token: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            proxy_endpoint: None,
            api_timeout_seconds: 30,
            insecure_skip_tls_verify: false,
        }
    }
}

impl CloudConfig {
    /// Load configuration from environment variables only
    pub fn load_from_env() -> Result<Self> {
        Ok(Self::init_from_env()?)
    }

    pub fn require_account(&self) -> Result<&str, CloudError> {
        match self.account.as_deref() {
            Some(account) if !account.is_empty() => Ok(account),
            _ => Err(CloudError::Config(
                "account is required (set UCP_ACCOUNT or --account)".into(),
            )),
        }
    }

    pub fn api_url(&self) -> Result<Url, CloudError> {
        parse_url("API endpoint", &self.api_endpoint)
    }

    pub fn proxy_url(&self) -> Result<Option<Url>, CloudError> {
        self.proxy_endpoint
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| parse_url("proxy endpoint", p))
            .transpose()
    }

    #[inline]
    pub fn timeout_duration(&self) -> Option<Duration> {
        if self.api_timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.api_timeout_seconds))
        }
    }
}

fn parse_url(what: &str, raw: &str) -> Result<Url, CloudError> {
    Url::parse(raw)
        .map_err(|e| CloudError::Config(format!("invalid {what} '{raw}': {e}")))
}
