use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Feed request failed: {source}")]
    FeedRequestError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Feed returned status {status} for {date}")]
    FeedStatusError { date: NaiveDate, status: u16 },

    #[error("Feed data format error for {date}: {source}")]
    FeedFormatError {
        date: NaiveDate,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    /// Whether the error came from the price feed rather than local setup.
    pub fn is_feed_failure(&self) -> bool {
        matches!(
            self,
            EngineError::FeedRequestError { .. }
                | EngineError::FeedStatusError { .. }
                | EngineError::FeedFormatError { .. }
        )
    }
}
