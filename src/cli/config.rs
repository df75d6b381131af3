use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::form::catalog::DEFAULT_CONTAINER_ID;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "contact-form",
    version,
    about = "Render a contact form table from field descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: contact-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL render trace to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the form table markup
    Render {
        /// Form definition (YAML or JSON); built-in contact form when omitted
        #[arg(long)]
        form: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render the form table into a container of an HTML page
    Mount {
        /// HTML page to inject the table into
        #[arg(long)]
        page: String,

        /// Id of the container element (default: form)
        #[arg(long)]
        container: Option<String>,

        /// Form definition (YAML or JSON); built-in contact form when omitted
        #[arg(long)]
        form: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a form definition and report what each field renders to
    Check {
        /// Form definition (YAML or JSON); built-in contact form when omitted
        #[arg(long)]
        form: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `contact-form.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_container")]
    pub container_id: String,

    /// Form definition used when no `--form` is given
    pub form: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_id: default_container(),
            form: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_container() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

pub const DEFAULT_CONFIG_FILE: &str = "contact-form.yaml";

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring malformed config '{}': {}", config_path, e);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > default)
// ============================================================================

pub fn resolve_form_path<'a>(cli_form: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_form.or(config.render.form.as_deref())
}

pub fn resolve_container<'a>(cli_container: Option<&'a str>, config: &'a AppConfig) -> &'a str {
    cli_container.unwrap_or(&config.render.container_id)
}

pub fn resolve_trace_path<'a>(cli_trace: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}

/// Log filter for a `-v` count: warn, info, debug, then trace.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
