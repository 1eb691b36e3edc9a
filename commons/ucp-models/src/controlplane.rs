use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key identifying a control plane. Only the cloud backend is supported
/// here, which has no notion of namespaces, so `namespace` must stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            name: name.into(),
        }
    }

    pub fn namespaced(
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}/{}", self.namespace, self.name)
        }
    }
}

/// Options accepted when creating a control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub description: Option<String>,
    pub configuration_name: Option<String>,
}

/// Presentation-ready view of a control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ControlPlaneResponse {
    pub id: String,
    pub name: String,
    pub synced: String,
    pub ready: String,
    pub message: String,
    pub cfg: String,
    pub updated: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_age"
    )]
    pub age: Option<Duration>,
}

fn serialize_age<S>(age: &Option<Duration>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match age {
        Some(d) => s.serialize_str(&format_age(d)),
        None => s.serialize_none(),
    }
}

/// Renders a duration in the compact form used by `kubectl get`.
pub fn format_age(d: &Duration) -> String {
    if d.num_seconds() < 0 {
        "0s".to_string()
    } else if d.num_seconds() < 60 {
        format!("{}s", d.num_seconds())
    } else if d.num_minutes() < 60 {
        format!("{}m", d.num_minutes())
    } else if d.num_hours() < 24 {
        format!("{}h", d.num_hours())
    } else if d.num_days() < 30 {
        format!("{}d", d.num_days())
    } else if d.num_days() < 365 {
        format!("{}mo", d.num_days() / 30)
    } else {
        format!("{}y", d.num_days() / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_buckets() {
        assert_eq!(format_age(&Duration::seconds(-5)), "0s");
        assert_eq!(format_age(&Duration::seconds(45)), "45s");
        assert_eq!(format_age(&Duration::minutes(12)), "12m");
        assert_eq!(format_age(&Duration::hours(3)), "3h");
        assert_eq!(format_age(&Duration::days(5)), "5d");
        assert_eq!(format_age(&Duration::days(65)), "2mo");
        assert_eq!(format_age(&Duration::days(400)), "1y");
    }

    #[test]
    fn response_serializes_age_as_text() {
        let resp = ControlPlaneResponse {
            name: "dev".into(),
            age: Some(Duration::minutes(90)),
            ..Default::default()
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["age"], "1h");

        let resp = ControlPlaneResponse::default();
        let value = serde_json::to_value(&resp).unwrap();
        assert!(value.get("age").is_none());
    }

    #[test]
    fn display_includes_namespace_only_when_set() {
        assert_eq!(NamespacedName::new("dev").to_string(), "dev");
        assert_eq!(
            NamespacedName::namespaced("team", "dev").to_string(),
            "team/dev"
        );
    }
}
