use super::multiplier::{apply_priority, is_prioritized};
use super::normalize::normalize;
use crate::types::scoring::{clamp_score, CriterionScore, TechnologyScore};
use crate::types::technology::{Criterion, Technology, UserConstraints};

/// Weighted mean of every criterion the technology has a metric for.
/// Criteria without a metric contribute to neither side of the ratio.
pub fn score_technology(
    technology: &Technology,
    criteria: &[Criterion],
    constraints: &UserConstraints,
) -> TechnologyScore {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut criteria_scores = Vec::with_capacity(criteria.len());

    for criterion in criteria {
        let metric_key = criterion.kind.metric_key();
        let Some(raw) = technology.metric(metric_key) else {
            tracing::debug!(
                technology = %technology.name,
                criterion = %criterion.name,
                metric = metric_key,
                "metric missing, criterion skipped"
            );
            continue;
        };

        let boosted = is_prioritized(constraints, criterion.kind);
        let score = normalize(apply_priority(raw, constraints, criterion.kind));
        weighted_sum += score * criterion.weight;
        weight_total += criterion.weight;
        criteria_scores.push(CriterionScore {
            criterion: criterion.name.clone(),
            score,
            boosted,
        });
    }

    let overall = if weight_total > 0.0 {
        clamp_score(weighted_sum / weight_total)
    } else {
        0.0
    };
    tracing::debug!(technology = %technology.name, overall, "technology scored");

    let explanation = explain(&criteria_scores, criteria.len());
    TechnologyScore::new(technology.clone(), overall, criteria_scores, Some(explanation))
}

fn explain(criteria_scores: &[CriterionScore], criteria_count: usize) -> String {
    let mut explanation = format!(
        "Scored on {} of {} criteria.",
        criteria_scores.len(),
        criteria_count
    );
    let boosted = criteria_scores
        .iter()
        .filter(|entry| entry.boosted)
        .map(|entry| entry.criterion.as_str())
        .collect::<Vec<_>>();
    if !boosted.is_empty() {
        explanation.push_str(&format!(" Priority boost: {}.", boosted.join(", ")));
    }
    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::technology::CriterionType;
    use std::collections::{BTreeMap, BTreeSet};

    fn technology(name: &str, metrics: &[(&str, f64)]) -> Technology {
        Technology {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "framework".to_string(),
            description: None,
            metrics: metrics
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect::<BTreeMap<_, _>>(),
            tags: BTreeSet::new(),
        }
    }

    fn criterion(name: &str, kind: CriterionType, weight: f64) -> Criterion {
        Criterion {
            id: name.to_lowercase(),
            name: name.to_string(),
            kind,
            weight,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn single_criterion_overall_equals_its_normalized_score() {
        let criteria = [criterion("Performance", CriterionType::Performance, 1.0)];
        for (raw, expected) in [(3.0, 60.0), (7.0, 70.0), (85.0, 85.0)] {
            let tech = technology("T", &[("performance_score", raw)]);
            let score = score_technology(&tech, &criteria, &UserConstraints::default());
            assert_close(score.overall_score, expected);
            assert_close(score.criterion_score("Performance").unwrap_or(-1.0), expected);
        }
    }

    #[test]
    fn priority_boost_is_applied_before_normalization() {
        let criteria = [criterion("Performance", CriterionType::Performance, 1.0)];
        let constraints = UserConstraints::new(["performance"], None, None, None);

        let low = score_technology(&technology("A", &[("performance_score", 3.0)]), &criteria, &constraints);
        let mid = score_technology(&technology("B", &[("performance_score", 7.0)]), &criteria, &constraints);
        let high = score_technology(&technology("C", &[("performance_score", 85.0)]), &criteria, &constraints);

        assert_close(low.overall_score, 90.0);
        assert_close(mid.overall_score, 10.5);
        assert_close(
            high.overall_score,
            128.5_f64.log10() / 100_001_f64.log10() * 100.0,
        );
    }

    #[test]
    fn missing_metrics_are_skipped_entirely() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 1.0),
            criterion("Security", CriterionType::Security, 3.0),
        ];
        let tech = technology("Sparse", &[("performance_score", 4.0)]);
        let score = score_technology(&tech, &criteria, &UserConstraints::default());
        assert_close(score.overall_score, 80.0);
        assert_eq!(score.criteria_scores.len(), 1);
        assert!(score.criterion_score("Security").is_none());
        assert_eq!(score.explanation.as_deref(), Some("Scored on 1 of 2 criteria."));
    }

    #[test]
    fn weights_shape_the_overall_score() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 3.0),
            criterion("Cost", CriterionType::Cost, 1.0),
        ];
        let tech = technology("Weighted", &[("performance_score", 80.0), ("cost_score", 40.0)]);
        let score = score_technology(&tech, &criteria, &UserConstraints::default());
        assert_close(score.overall_score, 70.0);
    }

    #[test]
    fn no_matching_criteria_scores_zero() {
        let criteria = [criterion("Performance", CriterionType::Performance, 1.0)];
        let score = score_technology(&technology("Empty", &[]), &criteria, &UserConstraints::default());
        assert_eq!(score.overall_score, 0.0);
        assert!(score.criteria_scores.is_empty());
    }

    #[test]
    fn zero_weight_criteria_still_reported_but_not_counted() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 0.0),
            criterion("Security", CriterionType::Security, 1.0),
        ];
        let tech = technology("Z", &[("performance_score", 5.0), ("security_score", 2.0)]);
        let score = score_technology(&tech, &criteria, &UserConstraints::default());
        assert_close(score.overall_score, 40.0);
        assert_close(score.criterion_score("Performance").unwrap_or(-1.0), 100.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 1.0),
            criterion("Popularity", CriterionType::Popularity, 0.5),
            criterion("Learning Curve", CriterionType::LearningCurve, 0.8),
        ];
        let tech = technology(
            "Stable",
            &[
                ("performance_score", 4.1),
                ("github_stars", 54_321.0),
                ("learning_curve_score", 6.5),
            ],
        );
        let constraints = UserConstraints::new(["learning_curve"], Some("web"), None, None);
        let first = score_technology(&tech, &criteria, &constraints);
        let second = score_technology(&tech, &criteria, &constraints);
        assert!((first.overall_score - second.overall_score).abs() <= 1e-4);
        for (left, right) in first.criteria_scores.iter().zip(&second.criteria_scores) {
            assert_eq!(left.criterion, right.criterion);
            assert!((left.score - right.score).abs() <= 1e-4);
        }
    }

    #[test]
    fn boost_raises_overall_and_leaves_other_criteria_untouched() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 1.0),
            criterion("Developer Experience", CriterionType::DeveloperExperience, 1.0),
            criterion("Stars", CriterionType::Popularity, 1.0),
        ];
        let tech = technology(
            "Boosted",
            &[
                ("performance_score", 2.0),
                ("developer_experience_score", 3.0),
                ("github_stars", 12_000.0),
            ],
        );

        for tag in ["developer-experience", "developer_experience"] {
            let plain = score_technology(&tech, &criteria, &UserConstraints::default());
            let boosted =
                score_technology(&tech, &criteria, &UserConstraints::new([tag], None, None, None));

            assert!(boosted.overall_score > plain.overall_score);
            for name in ["Performance", "Stars"] {
                let before = plain.criterion_score(name).unwrap_or(-1.0);
                let after = boosted.criterion_score(name).unwrap_or(-2.0);
                assert!((before - after).abs() <= 1e-4);
            }
            assert_eq!(
                boosted.explanation.as_deref(),
                Some("Scored on 3 of 3 criteria. Priority boost: Developer Experience.")
            );
        }
    }

    #[test]
    fn all_scores_stay_in_range() {
        let criteria = [
            criterion("Performance", CriterionType::Performance, 2.0),
            criterion("Adoption", CriterionType::Adoption, 1.0),
            criterion("Jobs", CriterionType::JobMarket, 1.0),
        ];
        let constraints = UserConstraints::new(["performance", "adoption", "job-market"], None, None, None);
        for raw in [0.0, 0.5, 4.9, 9.9, 66.0, 99.0, 150.0, 9_000_000.0] {
            let tech = technology(
                "R",
                &[("performance_score", raw), ("npm_downloads", raw), ("job_openings", raw)],
            );
            let score = score_technology(&tech, &criteria, &constraints);
            assert!((0.0..=100.0).contains(&score.overall_score));
            assert!(score
                .criteria_scores
                .iter()
                .all(|entry| (0.0..=100.0).contains(&entry.score)));
        }
    }
}
