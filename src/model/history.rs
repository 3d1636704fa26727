//! Data models for generation history persistence

use super::generation::GenerationStatus;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A single entry in the generation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationHistoryEntry {
    pub timestamp: DateTime<Local>,
    /// Patent filename the request was made for
    pub patent: String,
    /// Feature wire key (e.g. "elevator_pitch")
    pub feature: String,
    pub status: GenerationStatus,
    pub output: String,
    pub duration_secs: f64,
}

impl GenerationHistoryEntry {
    pub fn status_icon(&self) -> &str {
        match self.status {
            GenerationStatus::Running => "⏳",
            GenerationStatus::Success => "✓",
            GenerationStatus::Failed => "✗",
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn formatted_duration(&self) -> String {
        if self.duration_secs < 60.0 {
            format!("{:.1}s", self.duration_secs)
        } else {
            let mins = (self.duration_secs / 60.0).floor();
            let secs = self.duration_secs % 60.0;
            format!("{}m {:.0}s", mins, secs)
        }
    }
}

/// Wrapper for persisting generation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationHistory {
    pub entries: Vec<GenerationHistoryEntry>,
}

impl GenerationHistory {
    fn history_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".patent-tui"))
    }

    fn history_path() -> Option<PathBuf> {
        Self::history_dir().map(|dir| dir.join("history.json"))
    }

    pub fn load() -> Vec<GenerationHistoryEntry> {
        let history_path = match Self::history_path() {
            Some(p) => p,
            None => return Vec::new(),
        };

        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<GenerationHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    pub fn save(entries: &[GenerationHistoryEntry]) -> Result<(), String> {
        let history_dir = Self::history_dir().ok_or("Could not determine home directory")?;

        if !history_dir.exists() {
            fs::create_dir_all(&history_dir)
                .map_err(|e| format!("Failed to create history directory: {}", e))?;
        }

        let history_path = Self::history_path().ok_or("Could not determine history path")?;

        let history = GenerationHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("Failed to serialize history: {}", e))?;

        fs::write(&history_path, json)
            .map_err(|e| format!("Failed to write history file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_duration(duration_secs: f64) -> GenerationHistoryEntry {
        GenerationHistoryEntry {
            timestamp: Local::now(),
            patent: "foo.pdf".to_string(),
            feature: "elevator_pitch".to_string(),
            status: GenerationStatus::Success,
            output: "text".to_string(),
            duration_secs,
        }
    }

    #[test]
    fn test_formatted_duration_seconds() {
        assert_eq!(entry_with_duration(12.34).formatted_duration(), "12.3s");
    }

    #[test]
    fn test_formatted_duration_minutes() {
        assert_eq!(entry_with_duration(95.0).formatted_duration(), "1m 35s");
    }

    #[test]
    fn test_status_icon() {
        let mut entry = entry_with_duration(1.0);
        assert_eq!(entry.status_icon(), "✓");
        entry.status = GenerationStatus::Failed;
        assert_eq!(entry.status_icon(), "✗");
    }
}
