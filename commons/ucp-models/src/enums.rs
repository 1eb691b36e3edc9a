use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status reported by the control plane API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ControlPlaneStatus {
    #[serde(rename = "provisioning")]
    Provisioning,
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "updating")]
    Updating,
    #[serde(rename = "deleting")]
    Deleting,
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl Default for ControlPlaneStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ControlPlaneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioning => "provisioning",
            Self::Ready => "ready",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ControlPlaneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PackageType {
    #[serde(rename = "Provider")]
    Provider,
    #[serde(rename = "Configuration")]
    Configuration,
}

impl Default for PackageType {
    fn default() -> Self {
        Self::Provider
    }
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => "Provider",
            Self::Configuration => "Configuration",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
