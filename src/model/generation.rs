//! Data models for generation requests and background jobs

use serde::{Deserialize, Serialize};
use std::sync::mpsc::Receiver;
use std::time::Instant;

use crate::model::feature::Feature;

/// Status of a generation or upload request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum GenerationStatus {
    #[default]
    Running,
    Success,
    Failed,
}

/// Output of a generation request against the process service
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Patent filename the request was made for
    pub patent: String,
    /// Feature the text was generated for
    pub feature: Feature,
    pub status: GenerationStatus,
    /// Generated text, or a failure message
    pub text: String,
    /// Request duration, captured when the result arrives
    pub duration_secs: Option<f64>,
}

impl GenerationOutput {
    pub fn new(patent: String, feature: Feature) -> Self {
        Self {
            patent,
            feature,
            status: GenerationStatus::Running,
            text: "Generating... Please wait.".to_string(),
            duration_secs: None,
        }
    }
}

/// Message sent from a background worker thread when its request finishes
pub enum JobMessage<T> {
    Finished(Result<T, String>),
}

/// A request running on a background worker thread
pub struct BackgroundJob<T> {
    pub receiver: Receiver<JobMessage<T>>,
    pub start_instant: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_output_starts_running() {
        let output = GenerationOutput::new("foo.pdf".to_string(), Feature::PitchDeck);
        assert_eq!(output.status, GenerationStatus::Running);
        assert_eq!(output.patent, "foo.pdf");
        assert_eq!(output.feature, Feature::PitchDeck);
        assert!(output.text.contains("Generating"));
    }
}
