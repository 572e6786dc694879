//! Bookshelf application library
//!
//! Wires the feature modules into a registry and drives their lifecycle
//! around the HTTP server.

use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub mod modules;

pub use modules::books;

/// Registry holding every application module
pub fn registry() -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);
    registry
}

/// Init and start modules, serve HTTP until shutdown, then stop modules
pub async fn run(settings: &Settings) -> anyhow::Result<()> {
    let registry = registry();
    let ctx = InitCtx { settings };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = bookshelf_http::start_server(&registry, settings).await;

    registry
        .stop_all()
        .await
        .context("failed to stop modules cleanly")?;

    served
}
