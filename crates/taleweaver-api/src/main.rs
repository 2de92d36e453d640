//! Taleweaver CLI and HTTP relay entry point.
//!
//! Binary name: `taleweaver`
//!
//! Parses CLI arguments, loads configuration, then either serves the HTTP
//! API or runs a one-shot command against the model backend.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use taleweaver_infra::config::{apply_env_overrides, load_dotenv, load_global_config};
use taleweaver_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions need neither config nor tracing
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "taleweaver", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(cli.log_directive(), cli.otel).map_err(|e| anyhow::anyhow!(e))?;
    load_dotenv();

    let mut config = load_global_config(&cli.config).await;
    apply_env_overrides(&mut config);

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            model,
            static_dir,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(model) = model {
                config.backend.model = model;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }

            let state = AppState::init(config)?;
            cli::serve::serve(state, cli.quiet).await
        }

        Commands::Models => {
            let state = AppState::init(config)?;
            cli::models::list_models(&state, cli.json).await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}
