use anyhow::Context;
use clap::{Parser, Subcommand};

use bookshelf_kernel::settings::Settings;

/// Bookshelf service command line
#[derive(Debug, Parser)]
#[command(name = "bookshelf-cli", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print the merged OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load bookshelf settings")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            bookshelf_telemetry::init(&settings.telemetry)?;
            tracing::info!(env = ?settings.environment, "bookshelf-cli serving");
            bookshelf_app::run(&settings).await
        }
        Command::Openapi => {
            let registry = bookshelf_app::registry();
            let document = bookshelf_http::router::openapi_document(&registry, &settings.server);
            let rendered = serde_json::to_string_pretty(&document)
                .context("failed to render OpenAPI document")?;
            println!("{}", rendered);
            Ok(())
        }
    }
}
