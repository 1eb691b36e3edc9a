//! Wire types of the cloud control plane API.

use crate::enums::ControlPlaneStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status of the configuration attached to a control plane.
///
/// The API treats this as an open string, so unknown values are kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConfigurationStatus(pub String);

impl ConfigurationStatus {
    pub const READY: &'static str = "ready";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_ready(&self) -> bool {
        self.0 == Self::READY
    }
}

impl fmt::Display for ConfigurationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_version: Option<String>,
    #[serde(default)]
    pub status: ConfigurationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlane {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ConfigurationRef>,
}

impl ControlPlane {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            creator_id: None,
            created_at: None,
            updated_at: None,
            expires_at: None,
            configuration: None,
        }
    }
}

/// A control plane together with its lifecycle status, as returned by the
/// get, create and list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudControlPlaneResponse {
    pub control_plane: ControlPlane,
    #[serde(default)]
    pub status: ControlPlaneStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneListResponse {
    #[serde(default)]
    pub control_planes: Vec<CloudControlPlaneResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneCreateParameters {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

/// Paging options for list calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListOptions {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Query pairs in the order the API documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_control_plane_response() {
        let body = serde_json::json!({
            "controlPlane": {
                "id": "2b5e8f1c-6f0a-4d38-9a43-6c1f1f6f9a10",
                "name": "prod",
                "createdAt": "2023-04-01T10:00:00Z",
                "configuration": {
                    "name": "platform-ref-aws",
                    "status": "upgrading"
                }
            },
            "status": "updating"
        });

        let resp: CloudControlPlaneResponse =
            serde_json::from_value(body).unwrap();
        assert_eq!(resp.control_plane.name, "prod");
        assert_eq!(resp.status, ControlPlaneStatus::Updating);
        let cfg = resp.control_plane.configuration.unwrap();
        assert_eq!(cfg.name.as_deref(), Some("platform-ref-aws"));
        assert_eq!(cfg.status.as_str(), "upgrading");
        assert!(resp.control_plane.created_at.is_some());
    }

    #[test]
    fn list_without_items_decodes_as_empty() {
        let resp: ControlPlaneListResponse =
            serde_json::from_str("{\"count\":0}").unwrap();
        assert!(resp.control_planes.is_empty());
        assert_eq!(resp.count, Some(0));
    }

    #[test]
    fn create_parameters_skip_unset_fields() {
        let params = ControlPlaneCreateParameters {
            name: "dev".into(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({ "name": "dev" })
        );
    }

    #[test]
    fn list_options_query_pairs() {
        let opts = ListOptions::default().with_size(100);
        assert_eq!(opts.query_pairs(), vec![("size", "100".to_string())]);
        assert!(ListOptions::default().query_pairs().is_empty());
    }
}
