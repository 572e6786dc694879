use anyhow::Context;
use std::sync::Arc;

use crate::module::{InitCtx, Module};

/// Module registry driving the init / start / stop lifecycle
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module; lifecycle hooks run in registration order
    pub fn register(&mut self, module: Arc<dyn Module>) {
        self.modules.push(module);
    }

    /// All registered modules in registration order
    pub fn modules(&self) -> impl Iterator<Item = &Arc<dyn Module>> {
        self.modules.iter()
    }

    /// Get a module by name
    pub fn get_module(&self, name: &str) -> Option<&Arc<dyn Module>> {
        self.modules.iter().find(|module| module.name() == name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Initialize every module
    pub async fn init_all(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Start every module
    pub async fn start_all(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        for module in &self.modules {
            tracing::info!(module = module.name(), "starting module");

            module
                .start(ctx)
                .await
                .with_context(|| format!("failed to start module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop modules in reverse registration order
    pub async fn stop_all(&self) -> anyhow::Result<()> {
        tracing::info!("stopping {} modules", self.modules.len());

        for module in self.modules.iter().rev() {
            tracing::info!(module = module.name(), "stopping module");

            module
                .stop()
                .await
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::sync::Mutex;

    struct TestModule {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl TestModule {
        fn record(&self, event: &str) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", event, self.name));
        }
    }

    #[async_trait::async_trait]
    impl Module for TestModule {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            self.record("init");
            Ok(())
        }

        async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            self.record("start");
            Ok(())
        }

        async fn stop(&self) -> anyhow::Result<()> {
            self.record("stop");
            Ok(())
        }
    }

    struct FailingModule;

    #[async_trait::async_trait]
    impl Module for FailingModule {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            anyhow::bail!("boom")
        }
    }

    #[test]
    fn test_module_registry_creation() {
        let registry = ModuleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get_module("books").is_none());
    }

    #[tokio::test]
    async fn test_module_lifecycle_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(TestModule {
            name: "a",
            log: log.clone(),
        }));
        registry.register(Arc::new(TestModule {
            name: "b",
            log: log.clone(),
        }));

        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        registry.init_all(&ctx).await.unwrap();
        registry.start_all(&ctx).await.unwrap();
        registry.stop_all().await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec!["init:a", "init:b", "start:a", "start:b", "stop:b", "stop:a"]
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.get_module("b").is_some());
    }

    #[tokio::test]
    async fn test_init_failure_names_module() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(FailingModule));

        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        let err = registry.init_all(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
