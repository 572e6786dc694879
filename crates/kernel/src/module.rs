use async_trait::async_trait;
use axum::Router;

use crate::settings::Settings;

/// Borrowed view of the service settings handed to lifecycle hooks
pub struct InitCtx<'a> {
    pub settings: &'a Settings,
}

/// A feature of the bookshelf service, e.g. `books`.
///
/// The registry drives every module through the same sequence:
/// `init` for all, then `start` for all, then serve, then `stop` in
/// reverse registration order. A module keeps its own state (the books
/// module holds its shelf) and exposes it only through `routes`.
#[async_trait]
pub trait Module: Sync + Send {
    /// Path segment the module is served under, and its key in the registry
    fn name(&self) -> &'static str;

    /// Prepare state from settings; no request has been served yet
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Handlers relative to the mount point, `{api_prefix}/{name}`.
    fn routes(&self) -> Router {
        Router::new()
    }

    /// OpenAPI `paths` and `components` for this module, with paths relative
    /// to the mount point. `None` keeps the module out of `/docs`.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after the listener has drained; in-memory state is dropped with the module
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
