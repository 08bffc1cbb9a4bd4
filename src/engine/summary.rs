use crate::types::report::ComparisonResult;

/// Template recommendation built only from the computed scores.
pub fn summarize(result: &ComparisonResult) -> String {
    let ranking = result.ranking();
    let Some(leader) = ranking.first() else {
        return String::new();
    };

    let mut summary = match ranking.get(1) {
        Some(runner_up) => format!(
            "{} leads with {:.1} points, {:.1} ahead of {}.",
            leader.name(),
            leader.overall_score,
            leader.overall_score - runner_up.overall_score,
            runner_up.name()
        ),
        None => format!("{} scores {:.1} points.", leader.name(), leader.overall_score),
    };

    if let Some(strongest) = leader.strongest_criterion() {
        summary.push_str(&format!(
            " Strongest criterion: {} ({:.1}).",
            strongest.criterion, strongest.score
        ));
    }

    let tags = &result.constraints().priority_tags;
    if !tags.is_empty() {
        summary.push_str(&format!(
            " Priorities weighed: {}.",
            tags.iter().cloned().collect::<Vec<_>>().join(", ")
        ));
    }

    summary
}
