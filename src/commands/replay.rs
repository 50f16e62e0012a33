use eyre::{Context, Result};
use gqlog::host::{self, LifecycleEvent, RequestSnapshot};
use gqlog::LogPlugin;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// One recorded request: its snapshot and the events the server fired
#[derive(Debug, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub snapshot: RequestSnapshot,
    pub events: Vec<LifecycleEvent>,
}

pub fn run(file: Option<&Path>, plugin: &LogPlugin) -> Result<()> {
    let content = match file {
        Some(path) => fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request records from stdin")?;
            buffer
        }
    };

    let records = parse_records(&content)?;
    log::info!("Replaying {} request(s)", records.len());

    for (index, record) in records.iter().enumerate() {
        host::run_request(plugin, &record.snapshot, &record.events)
            .context(format!("Handler failed for request #{}", index + 1))?;
    }

    Ok(())
}

/// Parse request records from YAML or JSON
///
/// JSON is valid YAML, so one parser covers both.
pub fn parse_records(content: &str) -> Result<Vec<RequestRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).context("Failed to parse request records")
}
