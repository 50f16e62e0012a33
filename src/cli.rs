use clap::{Parser, Subcommand, ValueEnum};
use gqlog::{LifecycleEvent, LogLevel};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::ColorMode;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

#[derive(Parser)]
#[command(
    name = "gqlog",
    about = "Colorized console logging for GraphQL request lifecycle events",
    version,
    after_help = "Diagnostics go to stderr; set RUST_LOG=debug to see event dispatch."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to gqlog.yaml config file")]
    pub config: Option<PathBuf>,

    /// Bind an event to a log level, overriding the config file
    #[arg(long = "bind", global = true, value_name = "EVENT=LEVEL", value_parser = parse_binding)]
    pub bind: Vec<(LifecycleEvent, LogLevel)>,

    /// When to use colors
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay recorded requests through the logging plugin
    Replay {
        /// YAML or JSON file of request records (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List lifecycle events and the level each one logs at
    Events {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Parse `EVENT=LEVEL`
fn parse_binding(s: &str) -> Result<(LifecycleEvent, LogLevel), String> {
    let (event, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected EVENT=LEVEL, got '{}'", s))?;
    let event = LifecycleEvent::from_name(event).ok_or_else(|| format!("unknown lifecycle event '{}'", event))?;
    let level = LogLevel::from_name(level).ok_or_else(|| format!("unknown log level '{}'", level))?;
    Ok((event, level))
}
