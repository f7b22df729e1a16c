//! CLI frontend implementation.
use anyhow::Result;
use async_trait::async_trait;
use runtime::{RuntimeHandle, Topic};

use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, UiStateConsumer};

use crate::config::CliConfig;
use crate::presentation::{EventLoop, terminal};

/// Terminal frontend built on ratatui.
///
/// Owns no game state: everything it shows comes from the runtime's frame
/// snapshots and event topics.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        // Subscribe before the first frame so no log line is missed.
        let ui_rx = handle.subscribe(Topic::Ui);
        let game_rx = handle.subscribe(Topic::Game);
        let consumer = UiStateConsumer::new(self.frontend_config.messages.capacity);

        let mut terminal = terminal::init()?;
        let guard = terminal::TerminalGuard;

        let event_loop = EventLoop::new(
            handle,
            consumer,
            self.frontend_config.clone(),
            self.cli_config.clone(),
        );
        let result = event_loop.run(&mut terminal, ui_rx, game_rx).await;

        drop(guard);

        let consumer = result?;
        tracing::info!(messages = consumer.message_log().len(), "CLI session ended");
        Ok(())
    }
}
