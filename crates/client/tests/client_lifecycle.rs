use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use client_bootstrap::{ArenaWorldFactory, BootstrapConfig, RuntimeBuilder};
use dungeon_client::{Client, Frontend};
use game_core::{CombatMode, MapDimensions};
use runtime::RuntimeHandle;

/// Frontend that plays a fixed script instead of reading a terminal.
#[derive(Clone, Default)]
struct ScriptedFrontend {
    seen: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let outcome = handle.step(Duration::from_millis(16)).await?;
        {
            let mut seen = self.seen.lock().unwrap();
            if outcome.session_started.is_some() {
                seen.push("session".to_owned());
            }
        }

        if handle.end_combat().await? {
            self.seen.lock().unwrap().push("ended".to_owned());
        }
        if self.fail {
            anyhow::bail!("frontend crashed");
        }
        Ok(())
    }
}

async fn runtime(mode: CombatMode) -> runtime::Runtime {
    let config = BootstrapConfig {
        seed: Some(3),
        combat_mode: Some(mode),
        frame_interval: None,
        ..BootstrapConfig::default()
    };
    RuntimeBuilder::new(config)
        .world_factory(
            ArenaWorldFactory::new(MapDimensions::new(16, 16), (8, 8)).with_enemy("slime", (10, 8)),
        )
        .build()
        .await
        .unwrap()
        .runtime
}

#[test]
fn build_requires_both_layers() {
    let error = Client::builder()
        .frontend(ScriptedFrontend::default())
        .build()
        .err()
        .unwrap();
    assert!(error.to_string().contains("Runtime is required"));
}

#[tokio::test]
async fn frontend_drives_the_runtime_until_it_returns() {
    let frontend = ScriptedFrontend::default();
    let seen = Arc::clone(&frontend.seen);

    Client::builder()
        .runtime(runtime(CombatMode::TurnBased).await)
        .frontend(frontend)
        .build()
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(*seen.lock().unwrap(), ["session", "ended"]);
}

#[tokio::test]
async fn frontend_errors_are_returned_after_shutdown() {
    let frontend = ScriptedFrontend {
        fail: true,
        ..ScriptedFrontend::default()
    };

    let error = Client::builder()
        .runtime(runtime(CombatMode::RealTime).await)
        .frontend(frontend)
        .build()
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "frontend crashed");
}
