//! Console line formatting
//!
//! One call renders one colored line:
//!
//! ```text
//! GetUser query - done - success [2026-01-03 12:00:00]
//! Errors:
//! boom
//! ```

use chrono::{DateTime, Utc};
use colored::*;
use std::io::{self, Write};

use crate::host::RequestSnapshot;
use crate::level::LogLevel;

const UNKNOWN_OPERATION: &str = "unknown";

/// Render a log line at `now`
///
/// Returns `None` for introspection requests, which are never logged.
pub fn render(level: LogLevel, ctx: &RequestSnapshot, message: Option<&str>, now: DateTime<Utc>) -> Option<String> {
    if ctx.is_introspection() {
        return None;
    }

    Some(compose(level, ctx, message, now).color(level.color()).to_string())
}

/// Uncolored line text
fn compose(level: LogLevel, ctx: &RequestSnapshot, message: Option<&str>, now: DateTime<Utc>) -> String {
    let name = ctx.resolved_name().filter(|n| !n.is_empty()).unwrap_or(UNKNOWN_OPERATION);
    let kind = ctx.operation_type().map(|k| k.as_str()).unwrap_or("");

    let text = match message {
        Some(m) if !m.is_empty() => format!("- {} - {}", m, level),
        _ => format!("- {}", level),
    };

    format!("{} {} {} {}{}", name, kind, text, timestamp(now), errors_block(&ctx.errors))
}

fn timestamp(now: DateTime<Utc>) -> String {
    format!("[{}]", now.format("%Y-%m-%d %H:%M:%S"))
}

fn errors_block(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!("\nErrors: \n{}", errors.join("\n"))
    }
}

/// Level-bound console log handles
///
/// `Log` is stateless and `Copy`, so handlers can capture it by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Log;

impl Log {
    pub fn new() -> Self {
        Self
    }

    /// Print a line at `level` to stdout
    pub fn print(&self, level: LogLevel, ctx: &RequestSnapshot, message: Option<&str>) {
        let Some(line) = render(level, ctx, message, Utc::now()) else {
            return;
        };

        // A closed stdout must not take the request down with it
        if let Err(e) = writeln!(io::stdout().lock(), "{}", line) {
            log::debug!("Failed to write log line: {}", e);
        }
    }

    pub fn info(&self, ctx: &RequestSnapshot, message: Option<&str>) {
        self.print(LogLevel::Info, ctx, message);
    }

    pub fn error(&self, ctx: &RequestSnapshot, message: Option<&str>) {
        self.print(LogLevel::Error, ctx, message);
    }

    pub fn success(&self, ctx: &RequestSnapshot, message: Option<&str>) {
        self.print(LogLevel::Success, ctx, message);
    }
}
