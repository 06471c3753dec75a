//! CLI entrypoint for policyq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Context, Result};
use clap::Parser;
use policyq_application::{AskGateway, AskParams, ClipboardPort, NoClipboard, SessionController};
use policyq_infrastructure::{ConfigLoader, FileConfig, HttpAskGateway, SystemClipboard};
use policyq_presentation::{
    build_citation_views, set_color_enabled, AskRepl, Cli, ConsoleFormatter, OutputFormat,
    PendingSpinner, RenderOptions,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting policyq");

    // Load configuration
    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    // === Dependency Injection ===
    // The backend URL is a startup precondition: no URL, no client.
    let base_url = cli.backend_url.as_deref().or(config.backend.base_url.as_deref());
    let gateway = Arc::new(
        HttpAskGateway::with_timeout(base_url, Duration::from_secs(config.backend.timeout_secs))
            .context("Cannot reach a policy backend")?,
    );

    // Health probe mode
    if cli.check {
        return run_check(gateway).await;
    }

    let clipboard: Arc<dyn ClipboardPort> = match SystemClipboard::detect() {
        Some(clipboard) => Arc::new(clipboard),
        None => Arc::new(NoClipboard),
    };

    let params = AskParams::default().with_top_k(config.ask.top_k);
    let render = RenderOptions {
        preview_bytes: config.output.preview_bytes,
    };

    // Chat mode
    if cli.chat {
        let mut repl = AskRepl::new(gateway, clipboard, params)
            .with_render_options(render)
            .with_progress(!cli.quiet);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let mut controller = SessionController::new(gateway, clipboard, params);
    controller.set_query(question);
    if !controller.can_submit() {
        bail!("Question is empty.");
    }

    let spinner = (!cli.quiet).then(PendingSpinner::start);
    controller.submit().await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    // A completed submit always leaves an answer: real or fallback.
    let state = controller.state();
    let answer = state
        .answer()
        .context("No answer was produced")?;

    let output = match cli.output {
        OutputFormat::Text => {
            let views = build_citation_views(&answer.citations, |key| state.is_expanded(key));
            ConsoleFormatter::format(answer, &views, &render)
        }
        OutputFormat::Json => ConsoleFormatter::format_json(answer),
    };

    println!("{}", output);

    Ok(())
}

async fn run_check(gateway: Arc<HttpAskGateway>) -> Result<()> {
    match gateway.health().await {
        Ok(health) => {
            let service = health.service.as_deref().unwrap_or("backend");
            let model = health
                .model
                .map(|m| format!(" (model: {})", m))
                .unwrap_or_default();
            println!("{} at {}: {}{}", service, gateway.base_url(), health.status, model);
            Ok(())
        }
        Err(e) => bail!("Backend unreachable: {}", e),
    }
}
