use crate::types::technology::{CriterionType, UserConstraints};

pub const PRIORITY_MULTIPLIER: f64 = 1.5;

pub fn is_prioritized(constraints: &UserConstraints, kind: CriterionType) -> bool {
    let profile = kind.profile();
    constraints.has_tag(profile.tag) || constraints.has_tag(profile.tag_alias)
}

/// Boosts a raw metric when its criterion type is a priority tag. Runs on the
/// raw value, so a boost can push it into a different normalization branch.
pub fn apply_priority(raw: f64, constraints: &UserConstraints, kind: CriterionType) -> f64 {
    if is_prioritized(constraints, kind) {
        raw * PRIORITY_MULTIPLIER
    } else {
        raw
    }
}
