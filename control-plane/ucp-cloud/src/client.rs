use crate::{
    backend::{ConfigurationGetter, ControlPlaneApi},
    config::{CloudConfig, DEFAULT_PROXY_ENDPOINT},
    convert::convert,
    errors::CloudError,
    kubeconfig::{Kubeconfig, build_control_plane_kubeconfig},
};
use std::sync::Arc;
use tracing::debug;
use ucp_models::{
    ControlPlaneCreateParameters, ControlPlaneResponse, ListOptions,
    NamespacedName, Options,
};
use url::Url;

/// Page size used when listing control planes.
pub const MAX_ITEMS: u32 = 100;

/// Client for the control planes API of Upbound Cloud.
pub struct Client {
    ctp: Arc<dyn ControlPlaneApi>,
    cfg: Arc<dyn ConfigurationGetter>,
    account: String,
    // personal access token embedded in generated kubeconfigs
    token: String,
    proxy: Option<Url>,
    insecure_skip_tls_verify: bool,
}

impl Client {
    pub fn new(
        ctp: Arc<dyn ControlPlaneApi>,
        cfg: Arc<dyn ConfigurationGetter>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            ctp,
            cfg,
            account: account.into(),
            token: String::new(),
            proxy: None,
            insecure_skip_tls_verify: false,
        }
    }

    /// Builds a client from environment-derived configuration.
    pub fn from_config(
        ctp: Arc<dyn ControlPlaneApi>,
        cfg: Arc<dyn ConfigurationGetter>,
        config: &CloudConfig,
    ) -> Result<Self, CloudError> {
        let mut client = Self::new(ctp, cfg, config.require_account()?)
            .with_insecure_skip_tls_verify(config.insecure_skip_tls_verify);
        if let Some(token) = &config.token {
            client = client.with_token(token.clone());
        }
        if let Some(proxy) = config.proxy_url()? {
            client = client.with_proxy_endpoint(proxy);
        }
        Ok(client)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_proxy_endpoint(mut self, proxy: Url) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_insecure_skip_tls_verify(mut self, insecure: bool) -> Self {
        self.insecure_skip_tls_verify = insecure;
        self
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    /// Get the control plane with the given name.
    pub async fn get(
        &self,
        key: &NamespacedName,
    ) -> Result<ControlPlaneResponse, CloudError> {
        ensure_no_namespace(&key.namespace)?;
        debug!(account = %self.account, name = %key.name, "getting control plane");

        let resp = self
            .ctp
            .get(&self.account, &key.name)
            .await
            .map_err(CloudError::from_lookup)?;
        Ok(convert(&resp))
    }

    /// List all control planes within the account.
    pub async fn list(
        &self,
        namespace: &str,
    ) -> Result<Vec<ControlPlaneResponse>, CloudError> {
        ensure_no_namespace(namespace)?;
        debug!(account = %self.account, size = MAX_ITEMS, "listing control planes");

        let list = self
            .ctp
            .list(&self.account, ListOptions::default().with_size(MAX_ITEMS))
            .await?;
        Ok(list.control_planes.iter().map(convert).collect())
    }

    /// Create a control plane, attaching the named configuration if given.
    pub async fn create(
        &self,
        key: &NamespacedName,
        opts: &Options,
    ) -> Result<ControlPlaneResponse, CloudError> {
        ensure_no_namespace(&key.namespace)?;

        let mut params = ControlPlaneCreateParameters {
            name: key.name.clone(),
            description: opts.description.clone(),
            configuration_id: None,
        };
        if let Some(cfg_name) = &opts.configuration_name {
            let cfg = self.cfg.get(&self.account, cfg_name).await?;
            debug!(configuration = %cfg_name, id = %cfg.id, "resolved configuration");
            params.configuration_id = Some(cfg.id);
        }

        debug!(account = %self.account, name = %key.name, "creating control plane");
        let resp = self.ctp.create(&self.account, &params).await?;
        Ok(convert(&resp))
    }

    /// Delete the control plane with the given name.
    pub async fn delete(&self, key: &NamespacedName) -> Result<(), CloudError> {
        ensure_no_namespace(&key.namespace)?;
        debug!(account = %self.account, name = %key.name, "deleting control plane");

        self.ctp
            .delete(&self.account, &key.name)
            .await
            .map_err(CloudError::from_lookup)
    }

    /// Kubeconfig reaching the control plane through the cloud proxy.
    ///
    /// Built locally from the configured proxy endpoint and token; no request
    /// is made.
    pub fn kubeconfig(&self, key: &NamespacedName) -> Kubeconfig {
        let proxy = self
            .proxy
            .as_ref()
            .map(Url::as_str)
            .unwrap_or(DEFAULT_PROXY_ENDPOINT);
        build_control_plane_kubeconfig(
            proxy,
            &format!("{}/{}", self.account, key.name),
            &self.token,
            self.insecure_skip_tls_verify,
        )
    }
}

fn ensure_no_namespace(namespace: &str) -> Result<(), CloudError> {
    if namespace.is_empty() {
        Ok(())
    } else {
        Err(CloudError::NamespaceUnsupported)
    }
}
