use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefereeError {
    #[error("no technologies selected: pick between 1 and {max}")]
    EmptySelection { max: usize },

    #[error("too many technologies selected: {count} (maximum {max})")]
    TooManyTechnologies { count: usize, max: usize },

    #[error("technology selected more than once: {0}")]
    DuplicateTechnology(String),

    #[error("unknown technology: {0}")]
    UnknownTechnology(String),

    #[error("comparison result must contain at least one technology score")]
    EmptyResult,

    #[error("cannot format {metric}: {reason}")]
    KpiFormat { metric: String, reason: String },

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RefereeError {
    /// Caller mistakes that are rejected outright rather than failing at runtime.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::EmptySelection { .. }
                | Self::TooManyTechnologies { .. }
                | Self::DuplicateTechnology(_)
                | Self::UnknownTechnology(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RefereeError>;
