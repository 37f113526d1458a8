use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("content must be a non-empty string")]
    EmptyContent,

    #[error("content exceeds the {limit} byte scan limit ({actual} bytes)")]
    ContentTooLarge { limit: usize, actual: usize },

    #[error("invalid scan request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ScanError {
    /// Whether this error is the caller's fault (maps to a 400-class
    /// response at a transport boundary) rather than a scan failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyContent | Self::ContentTooLarge { .. } | Self::InvalidRequest(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        2
    }
}
