use crate::enums::PackageType;
use serde::{Deserialize, Serialize};

/// Reference to a package plus the version constraint it must satisfy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub package: String,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub constraints: String,
}

impl Dependency {
    /// Source the package is pulled from.
    pub fn identifier(&self) -> &str {
        &self.package
    }
}
