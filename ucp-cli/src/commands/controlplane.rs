use crate::output::{render_control_plane, render_control_planes, render_structured};
use crate::types::{ConnectionArgs, ControlPlaneOperation, OutputArgs, OutputFormat};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use ucp_cloud::{Client, CloudError, CloudHttpClient};
use ucp_models::{NamespacedName, Options};

/// Handle control plane commands
pub async fn handle_controlplane_command(
    operation: &ControlPlaneOperation,
    conn: &ConnectionArgs,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let config = conn.resolve()?;
    let http = Arc::new(CloudHttpClient::new(&config)?);
    let client = Client::from_config(http.clone(), http, &config)?;
    let format = output.output;

    match operation {
        ControlPlaneOperation::Get { name, ns } => {
            let key = NamespacedName::namespaced(&ns.namespace, name);
            let resp = client.get(&key).await.map_err(|e| not_found(e, &key))?;
            println!("{}", render_control_plane(&resp, format)?.trim_end());
        }
        ControlPlaneOperation::List { ns } => {
            let items = client.list(&ns.namespace).await?;
            if items.is_empty() && format == OutputFormat::Table {
                println!("No control planes found in account {}", client.account());
            } else {
                println!("{}", render_control_planes(&items, format)?.trim_end());
            }
        }
        ControlPlaneOperation::Create {
            name,
            ns,
            description,
            configuration_name,
        } => {
            let key = NamespacedName::namespaced(&ns.namespace, name);
            let opts = Options {
                description: description.clone(),
                configuration_name: configuration_name.clone(),
            };
            let resp = client.create(&key, &opts).await?;
            info!(name = %resp.name, id = %resp.id, "control plane created");
            println!("{}", render_control_plane(&resp, format)?.trim_end());
        }
        ControlPlaneOperation::Delete { name, ns } => {
            let key = NamespacedName::namespaced(&ns.namespace, name);
            client.delete(&key).await.map_err(|e| not_found(e, &key))?;
            println!("Control plane '{}' deleted", key);
        }
        ControlPlaneOperation::Kubeconfig { name, file } => {
            let kubeconfig = client.kubeconfig(&NamespacedName::new(name));
            let rendered = match format {
                OutputFormat::Json => render_structured(&kubeconfig, format)?,
                _ => kubeconfig.to_yaml()?,
            };
            match file {
                Some(path) => write_file(path, &rendered).await?,
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}

fn not_found(err: CloudError, key: &NamespacedName) -> anyhow::Error {
    if err.is_not_found() {
        anyhow::anyhow!("control plane \"{}\" not found", key)
    } else {
        err.into()
    }
}

async fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write kubeconfig: {:?}", path))?;
    eprintln!("Kubeconfig written to {}", path.display());
    Ok(())
}
