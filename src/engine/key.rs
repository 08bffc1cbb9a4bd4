use crate::types::technology::UserConstraints;
use sha2::{Digest, Sha256};

/// Stable cache key for a comparison request. Technology order matters
/// because radar slots follow it; tag order and case do not.
pub fn request_key(technology_ids: &[&str], constraints: &UserConstraints) -> String {
    let mut hasher = Sha256::new();
    for id in technology_ids {
        hasher.update(id.as_bytes());
        hasher.update([0x1f]);
    }
    hasher.update([0x1e]);
    for tag in &constraints.priority_tags {
        hasher.update(tag.as_bytes());
        hasher.update([0x1f]);
    }
    for field in [
        &constraints.project_type,
        &constraints.team_size,
        &constraints.timeline,
    ] {
        hasher.update([0x1e]);
        if let Some(value) = field {
            hasher.update(value.as_bytes());
        }
    }

    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
