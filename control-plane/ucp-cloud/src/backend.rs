use crate::errors::ApiResult;
use async_trait::async_trait;
use ucp_models::{
    CloudControlPlaneResponse, ConfigurationResponse,
    ControlPlaneCreateParameters, ControlPlaneListResponse, ListOptions,
};

/// Control plane operations of the cloud API, scoped by account.
#[async_trait]
pub trait ControlPlaneApi: Send + Sync {
    async fn create(
        &self,
        account: &str,
        params: &ControlPlaneCreateParameters,
    ) -> ApiResult<CloudControlPlaneResponse>;

    async fn delete(&self, account: &str, name: &str) -> ApiResult<()>;

    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<CloudControlPlaneResponse>;

    async fn list(
        &self,
        account: &str,
        opts: ListOptions,
    ) -> ApiResult<ControlPlaneListResponse>;
}

/// Resolves configuration names within an account.
#[async_trait]
pub trait ConfigurationGetter: Send + Sync {
    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<ConfigurationResponse>;
}
