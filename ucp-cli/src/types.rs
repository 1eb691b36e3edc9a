use std::path::PathBuf;
use ucp_cloud::CloudConfig;

/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(name = "ucp", author, version, about, long_about = None)]
pub struct UcpCli {
    #[command(subcommand)]
    pub command: UcpCommands,
    #[clap(flatten)]
    pub conn: ConnectionArgs,
    #[clap(flatten)]
    pub output: OutputArgs,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum UcpCommands {
    /// Control plane operations (get, list, create, delete, kubeconfig)
    #[clap(aliases = &["ctp", "cp"])]
    ControlPlane {
        #[command(subcommand)]
        opt: ControlPlaneOperation,
    },
    /// Package dependency references
    #[clap(aliases = &["dep", "d"])]
    Dependency {
        #[command(subcommand)]
        opt: DependencyOperation,
    },
}

/// Control plane operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum ControlPlaneOperation {
    /// Show a single control plane
    #[clap(aliases = &["g"])]
    Get {
        /// Control plane name
        name: String,
        #[clap(flatten)]
        ns: NamespaceArg,
    },
    /// List control planes in the account
    #[clap(aliases = &["l", "ls"])]
    List {
        #[clap(flatten)]
        ns: NamespaceArg,
    },
    /// Create a control plane
    #[clap(aliases = &["c"])]
    Create {
        /// Control plane name
        name: String,
        #[clap(flatten)]
        ns: NamespaceArg,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
        /// Configuration to attach to the new control plane
        #[arg(short = 'c', long)]
        configuration_name: Option<String>,
    },
    /// Delete a control plane
    #[clap(aliases = &["d", "rm"])]
    Delete {
        /// Control plane name
        name: String,
        #[clap(flatten)]
        ns: NamespaceArg,
    },
    /// Print a kubeconfig for reaching the control plane through the proxy
    #[clap(aliases = &["kc"])]
    Kubeconfig {
        /// Control plane name
        name: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct NamespaceArg {
    /// Namespace of the control plane (not supported by the cloud backend)
    #[arg(short, long, default_value = "")]
    pub namespace: String,
}

/// Dependency operation commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum DependencyOperation {
    /// Parse a `source@version` reference into a dependency
    #[clap(aliases = &["p"])]
    Parse {
        /// Package reference, e.g. `xpkg.upbound.io/acme/db@v1.2.3`
        reference: String,
        /// Package type: provider or configuration
        #[arg(short = 't', long = "type", default_value = "provider")]
        package_type: String,
    },
    /// Print the image tag of a reference with a resolved version
    #[clap(aliases = &["t"])]
    Tag {
        /// Package reference, e.g. `xpkg.upbound.io/acme/db@v1.2.3`
        reference: String,
        /// Package type: provider or configuration
        #[arg(short = 't', long = "type", default_value = "provider")]
        package_type: String,
    },
}

/// Connection configuration. Flags override `UCP_*` environment variables.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Account that owns the control planes
    #[arg(short, long, global = true)]
    pub account: Option<String>,
    /// Personal access token
    #[arg(long, global = true)]
    pub token: Option<String>,
    /// Cloud API endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
    /// Cloud proxy endpoint used in generated kubeconfigs
    #[arg(long, global = true)]
    pub proxy_endpoint: Option<String>,
    /// Skip TLS verification in generated kubeconfigs
    #[arg(long, global = true)]
    pub insecure_skip_tls_verify: bool,
}

impl ConnectionArgs {
    /// Loads `UCP_*` environment configuration and applies flag overrides.
    pub fn resolve(&self) -> anyhow::Result<CloudConfig> {
        let config = CloudConfig::load_from_env()?;
        Ok(self.apply(config))
    }

    fn apply(&self, mut config: CloudConfig) -> CloudConfig {
        if let Some(account) = &self.account {
            config.account = Some(account.clone());
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(proxy) = &self.proxy_endpoint {
            config.proxy_endpoint = Some(proxy.clone());
        }
        if self.insecure_skip_tls_verify {
            config.insecure_skip_tls_verify = true;
        }
        config
    }
}

/// Output formatting options
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table", global = true)]
    pub output: OutputFormat,
}

/// Available output formats
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}
