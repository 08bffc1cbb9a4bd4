use crate::types::report::ComparisonResult;

pub fn to_json(result: &ComparisonResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
