use crate::consts::{MAX_SCORE, MAX_SCORE_LIMIT};
use crate::error::{WafReportError, WrResult};
use clap::{Args, ValueEnum};

#[derive(Args, Debug, Clone)]
pub struct ReportConfig {
    /// Highest score tracked individually; larger scores share the top row.
    #[arg(long, default_value_t = MAX_SCORE)]
    pub max_score: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed tables.
    Table,
    /// Aligned plain text, one line per row.
    Plain,
    Json,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_score: MAX_SCORE,
            format: OutputFormat::Table,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> WrResult<()> {
        if self.max_score == 0 {
            return Err(WafReportError::Config(
                "--max-score must be at least 1".to_string(),
            ));
        }
        if self.max_score > MAX_SCORE_LIMIT {
            return Err(WafReportError::Config(format!(
                "--max-score {} exceeds the limit of {}",
                self.max_score, MAX_SCORE_LIMIT
            )));
        }
        Ok(())
    }
}
