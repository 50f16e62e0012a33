use colored::*;
use eyre::Result;
use gqlog::plugin::DEFAULT_BINDINGS;
use gqlog::{LifecycleEvent, LogLevel};
use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct EventEntry {
    event: LifecycleEvent,
    level: Option<LogLevel>,
}

pub fn run(format: OutputFormat, overrides: &IndexMap<LifecycleEvent, LogLevel>) -> Result<()> {
    let entries = effective_levels(overrides);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&entries)?);
        }
        OutputFormat::Text => {
            println!("{}", "Lifecycle events:".bold());
            println!();

            for entry in &entries {
                let level = match entry.level {
                    Some(level) => level.as_str().color(level.color()).to_string(),
                    None => "-".dimmed().to_string(),
                };
                println!("  {:<30} {}", entry.event.as_str(), level);
            }
        }
    }

    Ok(())
}

/// Level each event logs at after merging defaults with `overrides`
fn effective_levels(overrides: &IndexMap<LifecycleEvent, LogLevel>) -> Vec<EventEntry> {
    let mut levels: IndexMap<LifecycleEvent, LogLevel> = DEFAULT_BINDINGS.into_iter().collect();
    levels.extend(overrides.iter().map(|(e, l)| (*e, *l)));

    LifecycleEvent::ALL
        .into_iter()
        .map(|event| EventEntry {
            event,
            level: levels.get(&event).copied(),
        })
        .collect()
}
