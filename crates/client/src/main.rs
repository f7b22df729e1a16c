//! Dungeon game client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Runtime (game logic) via RuntimeBuilder
//! 2. Frontend (UI) - CLI, GUI, etc.
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! # Turn-based combat on a fixed seed
//! COMBAT_MODE=turn_based GAME_SEED=7 cargo run -p dungeon-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dungeon_client::Client;

    // 1. Load configuration from environment
    let bootstrap_config = BootstrapConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging (kept alive until the process exits)
    let _log_guard = logging::setup_logging()?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Data directory: {}", bootstrap_config.data_dir.display());

    // 3. Build Runtime (independent layer)
    tracing::debug!("Building runtime...");
    let setup = RuntimeBuilder::new(bootstrap_config).build().await?;

    tracing::info!(
        seed = setup.seed,
        mode = %setup.game_config.combat.mode,
        "Runtime built successfully"
    );

    // 4. Build Frontend (independent layer)
    let frontend = CliFrontend::new(frontend_config, cli_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
