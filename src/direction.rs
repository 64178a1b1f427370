use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Traffic direction a score column belongs to.
#[derive(Debug, Clone, Copy, EnumIter, Display, Serialize, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Inbound => "Inbound (Requests)",
            Self::Outbound => "Outbound (Responses)",
        }
    }

    /// Short noun used in column headers and row labels.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Inbound => "req.",
            Self::Outbound => "res.",
        }
    }

    /// Capitalised noun opening each per-score row.
    pub fn row_prefix(&self) -> &'static str {
        match self {
            Self::Inbound => "Requests",
            Self::Outbound => "Responses",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Inbound => "requests",
            Self::Outbound => "responses",
        }
    }
}
