use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    // Advisory service errors
    #[error("Advisory request failed: {0}")]
    AdvisoryTransport(#[from] reqwest::Error),

    #[error("Advisory service returned status {0}")]
    AdvisoryStatus(reqwest::StatusCode),

    #[error("Advisory response contained no text")]
    EmptyResponse,

    #[error("No analysis received from advisory service")]
    NoAnalysisReceived,

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl ConsoleError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            ConsoleError::AdvisoryTransport(_) => true,
            ConsoleError::AdvisoryStatus(status) => status.is_server_error(),
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ConsoleError::AdvisoryTransport(_)
            | ConsoleError::AdvisoryStatus(_)
            | ConsoleError::EmptyResponse
            | ConsoleError::NoAnalysisReceived => "advisory",

            ConsoleError::InvalidConfiguration(_) => "configuration",
        }
    }
}

// Result type alias for convenience
pub type ConsoleResult<T> = Result<T, ConsoleError>;
