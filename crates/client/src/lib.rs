//! Top-level client orchestrating the Runtime and Frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (Simulation worker, frame clock, event bus)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The frontend only ever sees a [`runtime::RuntimeHandle`]; the client owns
//! the runtime and shuts it down once the frontend returns.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` takes an already built runtime and a frontend
/// 2. `Client::run()` transfers control to the frontend until the user quits
/// 3. The runtime worker is shut down and joined afterwards
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend to completion, then stop the runtime.
    ///
    /// The frontend's error wins over a shutdown error; the latter is only
    /// logged in that case.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        match self.runtime.shutdown().await {
            Ok(()) => tracing::debug!("Runtime stopped"),
            Err(e) if frontend_result.is_err() => {
                tracing::error!("Runtime shutdown failed: {}", e);
            }
            Err(e) => return Err(e.into()),
        }

        frontend_result
    }
}
