//! Kubeconfig documents for reaching control planes through the cloud proxy.

use serde::{Deserialize, Serialize};

const KUBECONFIG_KEY_PREFIX: &str = "upbound-";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<NamedCluster>,
    pub users: Vec<NamedAuthInfo>,
    pub contexts: Vec<NamedContext>,
    pub current_context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: Cluster,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Cluster {
    pub server: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub insecure_skip_tls_verify: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedAuthInfo {
    pub name: String,
    pub user: AuthInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedContext {
    pub name: String,
    pub context: Context,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    pub cluster: String,
    pub user: String,
}

impl Kubeconfig {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Server URL of the current context's cluster.
    pub fn current_server(&self) -> Option<&str> {
        let ctx = self
            .contexts
            .iter()
            .find(|c| c.name == self.current_context)?;
        self.clusters
            .iter()
            .find(|c| c.name == ctx.context.cluster)
            .map(|c| c.cluster.server.as_str())
    }
}

/// Builds a kubeconfig whose single context points at `<proxy>/<path>/k8s`
/// and authenticates with `token`.
///
/// Cluster, user and context all share the key `upbound-<path>`, with `/`
/// in the path replaced by `-`.
pub fn build_control_plane_kubeconfig(
    proxy: &str,
    path: &str,
    token: &str,
    insecure_skip_tls_verify: bool,
) -> Kubeconfig {
    let key = format!("{KUBECONFIG_KEY_PREFIX}{}", path.replace('/', "-"));
    let server = format!(
        "{}/{}/k8s",
        proxy.trim_end_matches('/'),
        path.trim_matches('/')
    );
    let token = (!token.is_empty()).then(|| token.to_string());

    Kubeconfig {
        api_version: "v1".to_string(),
        kind: "Config".to_string(),
        clusters: vec![NamedCluster {
            name: key.clone(),
            cluster: Cluster {
                server,
                insecure_skip_tls_verify,
            },
        }],
        users: vec![NamedAuthInfo {
            name: key.clone(),
            user: AuthInfo { token },
        }],
        contexts: vec![NamedContext {
            name: key.clone(),
            context: Context {
                cluster: key.clone(),
                user: key.clone(),
            },
        }],
        current_context: key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_single_context_config() {
        let cfg = build_control_plane_kubeconfig(
            "https://proxy.upbound.io/v1/controlPlanes/",
            "acme/dev",
            "secret",
            false,
        );

        assert_eq!(cfg.current_context, "upbound-acme-dev");
        assert_eq!(
            cfg.current_server(),
            Some("https://proxy.upbound.io/v1/controlPlanes/acme/dev/k8s")
        );
        assert_eq!(cfg.users[0].user.token.as_deref(), Some("secret"));
        assert_eq!(cfg.contexts[0].context.user, "upbound-acme-dev");
    }

    #[test]
    fn empty_token_is_omitted() {
        let cfg = build_control_plane_kubeconfig(
            "https://proxy.example.com",
            "acme/dev",
            "",
            false,
        );
        assert!(cfg.users[0].user.token.is_none());

        let yaml = cfg.to_yaml().unwrap();
        assert!(!yaml.contains("token"));
        assert!(!yaml.contains("insecure-skip-tls-verify"));
        assert!(yaml.contains("apiVersion: v1"));
        assert!(yaml.contains("current-context: upbound-acme-dev"));
    }

    #[test]
    fn insecure_flag_is_rendered_when_set() {
        let cfg = build_control_plane_kubeconfig(
            "https://proxy.example.com",
            "acme/dev",
            "t",
            true,
        );
        let yaml = cfg.to_yaml().unwrap();
        assert!(yaml.contains("insecure-skip-tls-verify: true"));
    }

    #[test]
    fn output_is_deterministic() {
        let a = build_control_plane_kubeconfig("https://p", "a/b", "t", false);
        let b = build_control_plane_kubeconfig("https://p", "a/b", "t", false);
        assert_eq!(a, b);
    }
}
