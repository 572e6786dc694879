//! Tracing subscriber bootstrap.

use anyhow::Context;
use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise the configured directive.
pub fn env_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.filter)
            .with_context(|| format!("invalid log filter '{}'", settings.filter)),
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = env_filter(settings)?;
    let registry = tracing_subscriber::registry().with(filter);

    match settings.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
    }
    .context("failed to install tracing subscriber")?;

    tracing::info!(
        target: "bookshelf-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        let settings = TelemetrySettings {
            filter: "bookshelf=notalevel".to_string(),
            ..TelemetrySettings::default()
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(env_filter(&settings).is_err());
        }
    }

    #[test]
    fn second_init_reports_error() {
        let settings = TelemetrySettings::default();
        let _ = init(&settings);
        assert!(init(&settings).is_err());
    }
}
