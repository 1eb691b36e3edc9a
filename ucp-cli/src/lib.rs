mod commands;
mod output;
mod types;

pub use types::*;

use tracing::debug;

pub async fn run(cli: UcpCli) -> anyhow::Result<()> {
    debug!(command = ?cli.command, "running command");
    match &cli.command {
        UcpCommands::ControlPlane { opt } => {
            commands::handle_controlplane_command(opt, &cli.conn, &cli.output)
                .await
        }
        UcpCommands::Dependency { opt } => {
            commands::handle_dependency_command(opt, &cli.output)
        }
    }
}
