//! Log levels and their display colors

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a formatted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
    Success,
}

impl LogLevel {
    pub const ALL: [LogLevel; 3] = [LogLevel::Info, LogLevel::Error, LogLevel::Success];

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            "success" => Some(Self::Success),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Error => "error",
            LogLevel::Success => "success",
        }
    }

    /// Display color for this level, fixed for the life of the process
    pub const fn color(&self) -> Color {
        match self {
            LogLevel::Info => Color::Blue,
            LogLevel::Error => Color::Red,
            LogLevel::Success => Color::Green,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
