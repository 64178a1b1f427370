use thiserror::Error;

#[derive(Error, Debug)]
pub enum WafReportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not open input '{path}': {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type WrResult<T> = Result<T, WafReportError>;
