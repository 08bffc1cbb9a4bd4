pub mod json;
pub mod md;

use crate::error::RefereeError;
use crate::types::report::ComparisonResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "md" => Some(Self::Md),
            _ => None,
        }
    }
}

pub fn render(result: &ComparisonResult, format: OutputFormat) -> Result<String, RefereeError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(RefereeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
