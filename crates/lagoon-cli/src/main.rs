use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use lagoon_application::Assistant;
use lagoon_infrastructure::{DatasetClient, load_app_config};
use lagoon_interaction::{ConfiguredLocationProvider, GeminiApiAgent, TerminalLinkOpener};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser)]
#[command(name = "lagoon")]
#[command(about = "Lagoon - chat with a guide to the Lagos ferry network", long_about = None)]
struct Cli {
    /// Override the configured Gemini model name
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = load_app_config()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    let agent = Arc::new(GeminiApiAgent::new(&config.api_key, &config.model));
    let location = Arc::new(ConfiguredLocationProvider::new(config.device_location));
    let mut assistant = Assistant::new(config.clone(), agent, location);

    // Fired once per session; not retried. A failed load only logs and
    // leaves sending disabled.
    match DatasetClient::new()
        .fetch(&config.jetty_source_url, &config.route_source_url)
        .await
    {
        Ok(dataset) => assistant.attach_dataset(dataset),
        Err(err) => error!(error = %err, "dataset load failed; sending disabled"),
    }

    println!("{}", "Lagoon ferry assistant. Ctrl-D to quit.".dimmed());

    let opener = TerminalLinkOpener;
    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                if assistant.send_message(&line).await {
                    editor.add_history_entry(&line)?;
                    if let Some(reply) = assistant.transcript().last() {
                        render::print_reply(reply, &opener);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                error!(error = %err, "readline failed");
                break;
            }
        }
    }

    Ok(())
}
