//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted answer with citations
    Text,
    /// Raw answer JSON
    Json,
}

/// CLI arguments for policyq
#[derive(Parser, Debug)]
#[command(name = "policyq")]
#[command(author, version, about = "HR policy assistant - ask policy questions, get cited answers")]
#[command(long_about = r#"
PolicyQ answers HR policy questions against your company's policy corpus.

Each answer comes with a confidence badge and citations into the source
documents. When the backend is unreachable or has no answer, you get a
clearly marked fallback pointing you to HR instead of an error.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./policyq.toml      Project-level config
3. ~/.config/policyq/config.toml   Global config

The backend base URL must be configured before asking anything:

  [backend]
  base_url = "http://localhost:8000"

Example:
  policyq "How many casual leaves do I get per year?"
  policyq --chat
  policyq --check
"#)]
pub struct Cli {
    /// The policy question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Probe backend health and exit
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the pending spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Backend base URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,
}
