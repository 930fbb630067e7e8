use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not valid JSON: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw response body, kept for diagnosis.
        body: String,
    },

    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("configuration error: {0}")]
    Config(#[from] crate::core::config::ConfigError),

    #[error("other error: {0}")]
    Other(String),
}

impl ExchangeError {
    /// Pair a JSON failure with the body that produced it.
    pub fn decode(source: serde_json::Error, body: impl Into<String>) -> Self {
        Self::Decode {
            source,
            body: body.into(),
        }
    }
}
