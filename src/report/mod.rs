pub mod json;
pub mod md;

use crate::error::RepscoreError;
use crate::types::score::ScoreMap;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Summary of one scoring run, ready for rendering.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub generated_at: String,
    pub credential_count: usize,
    pub malformed_count: usize,
    pub identity_count: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub scores: ScoreMap,
}

impl ScoreReport {
    pub fn new(
        scores: ScoreMap,
        credential_count: usize,
        malformed_count: usize,
        error_count: usize,
        warning_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            credential_count,
            malformed_count,
            identity_count: scores.len(),
            error_count,
            warning_count,
            scores,
        }
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, RepscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RepscoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
