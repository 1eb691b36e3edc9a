#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use ucp_cloud::{ApiError, ApiResult, ConfigurationGetter, ControlPlaneApi};
use ucp_models::{
    CloudControlPlaneResponse, ConfigurationResponse,
    ControlPlaneCreateParameters, ControlPlaneListResponse, ControlPlane,
    ControlPlaneStatus, ListOptions,
};
use uuid::Uuid;

/// Which canned failure a fake should return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    NotFound,
    Status(u16),
}

impl Failure {
    fn to_error(self) -> ApiError {
        match self {
            Failure::NotFound => ApiError::NotFound("missing".into()),
            Failure::Status(code) => ApiError::Status {
                code,
                message: "backend failure".into(),
            },
        }
    }
}

/// Shared call log so tests can assert ordering across both fakes.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct FakeControlPlanes {
    pub log: CallLog,
    pub failure: Option<Failure>,
    pub items: Vec<CloudControlPlaneResponse>,
    pub created: Mutex<Vec<ControlPlaneCreateParameters>>,
    pub list_opts: Mutex<Vec<ListOptions>>,
}

impl FakeControlPlanes {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            failure: None,
            items: Vec::new(),
            created: Mutex::new(Vec::new()),
            list_opts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: CallLog, failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(log)
        }
    }

    pub fn with_items(mut self, items: Vec<CloudControlPlaneResponse>) -> Self {
        self.items = items;
        self
    }

    fn record(&self, call: String) -> ApiResult<()> {
        self.log.lock().unwrap().push(call);
        match self.failure {
            Some(f) => Err(f.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ControlPlaneApi for FakeControlPlanes {
    async fn create(
        &self,
        account: &str,
        params: &ControlPlaneCreateParameters,
    ) -> ApiResult<CloudControlPlaneResponse> {
        self.record(format!("ctp.create {account}/{}", params.name))?;
        self.created.lock().unwrap().push(params.clone());
        Ok(control_plane(&params.name, ControlPlaneStatus::Provisioning))
    }

    async fn delete(&self, account: &str, name: &str) -> ApiResult<()> {
        self.record(format!("ctp.delete {account}/{name}"))
    }

    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<CloudControlPlaneResponse> {
        self.record(format!("ctp.get {account}/{name}"))?;
        Ok(control_plane(name, ControlPlaneStatus::Ready))
    }

    async fn list(
        &self,
        account: &str,
        opts: ListOptions,
    ) -> ApiResult<ControlPlaneListResponse> {
        self.record(format!("ctp.list {account}"))?;
        self.list_opts.lock().unwrap().push(opts);
        Ok(ControlPlaneListResponse {
            control_planes: self.items.clone(),
            ..Default::default()
        })
    }
}

pub struct FakeConfigurations {
    pub log: CallLog,
    pub failure: Option<Failure>,
    pub id: Uuid,
}

impl FakeConfigurations {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            failure: None,
            id: Uuid::new_v4(),
        }
    }

    pub fn failing(log: CallLog, failure: Failure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(log)
        }
    }
}

#[async_trait]
impl ConfigurationGetter for FakeConfigurations {
    async fn get(
        &self,
        account: &str,
        name: &str,
    ) -> ApiResult<ConfigurationResponse> {
        self.log
            .lock()
            .unwrap()
            .push(format!("cfg.get {account}/{name}"));
        if let Some(f) = self.failure {
            return Err(f.to_error());
        }
        Ok(ConfigurationResponse {
            id: self.id,
            name: name.to_string(),
            provider: None,
            repo: None,
            created_at: None,
            latest_version: None,
        })
    }
}

pub fn control_plane(
    name: &str,
    status: ControlPlaneStatus,
) -> CloudControlPlaneResponse {
    CloudControlPlaneResponse {
        control_plane: ControlPlane::new(Uuid::new_v4(), name),
        status,
    }
}

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}
