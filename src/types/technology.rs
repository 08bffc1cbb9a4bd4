use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub metrics: BTreeMap<String, f64>,
    pub tags: BTreeSet<String>,
}

impl Technology {
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriterionType {
    Performance,
    #[serde(alias = "learning_curve")]
    LearningCurve,
    Community,
    Documentation,
    Scalability,
    Security,
    Maturity,
    #[serde(alias = "developer_experience")]
    DeveloperExperience,
    Cost,
    Popularity,
    Adoption,
    #[serde(alias = "job_market")]
    JobMarket,
    Satisfaction,
    Custom,
}

/// Where a criterion type finds its raw metric and which priority tags boost it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionProfile {
    pub kind: CriterionType,
    pub metric_key: &'static str,
    pub tag: &'static str,
    pub tag_alias: &'static str,
}

const fn profile(
    kind: CriterionType,
    metric_key: &'static str,
    tag: &'static str,
    tag_alias: &'static str,
) -> CriterionProfile {
    CriterionProfile {
        kind,
        metric_key,
        tag,
        tag_alias,
    }
}

pub static CRITERION_PROFILES: [CriterionProfile; 14] = [
    profile(CriterionType::Performance, "performance_score", "performance", "performance"),
    profile(CriterionType::LearningCurve, "learning_curve_score", "learning-curve", "learning_curve"),
    profile(CriterionType::Community, "community_score", "community", "community"),
    profile(CriterionType::Documentation, "documentation_score", "documentation", "documentation"),
    profile(CriterionType::Scalability, "scalability_score", "scalability", "scalability"),
    profile(CriterionType::Security, "security_score", "security", "security"),
    profile(CriterionType::Maturity, "maturity_score", "maturity", "maturity"),
    profile(
        CriterionType::DeveloperExperience,
        "developer_experience_score",
        "developer-experience",
        "developer_experience",
    ),
    profile(CriterionType::Cost, "cost_score", "cost", "cost"),
    profile(CriterionType::Popularity, "github_stars", "popularity", "popularity"),
    profile(CriterionType::Adoption, "npm_downloads", "adoption", "adoption"),
    profile(CriterionType::JobMarket, "job_openings", "job-market", "job_market"),
    profile(CriterionType::Satisfaction, "satisfaction_score", "satisfaction", "satisfaction"),
    profile(CriterionType::Custom, "custom_score", "custom", "custom"),
];

impl CriterionType {
    pub fn profile(self) -> &'static CriterionProfile {
        CRITERION_PROFILES
            .iter()
            .find(|entry| entry.kind == self)
            .unwrap_or(&CRITERION_PROFILES[CRITERION_PROFILES.len() - 1])
    }

    pub fn metric_key(self) -> &'static str {
        self.profile().metric_key
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CriterionType,
    pub weight: f64,
}

impl Criterion {
    pub const DEFAULT_WEIGHT: f64 = 1.0;
}

/// What the user cares about. Tags and context strings are stored lowercase,
/// so two constraints built from differently-cased input compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConstraints {
    pub priority_tags: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl UserConstraints {
    pub fn new<I, S>(
        priority_tags: I,
        project_type: Option<&str>,
        team_size: Option<&str>,
        timeline: Option<&str>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            priority_tags: priority_tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
            project_type: normalize_context(project_type),
            team_size: normalize_context(team_size),
            timeline: normalize_context(timeline),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.priority_tags.contains(tag)
    }
}

fn normalize_context(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_criterion_type_has_exactly_one_profile() {
        for entry in &CRITERION_PROFILES {
            let matches = CRITERION_PROFILES
                .iter()
                .filter(|other| other.kind == entry.kind)
                .count();
            assert_eq!(matches, 1, "{:?} listed more than once", entry.kind);
            assert_eq!(entry.kind.profile(), entry);
        }
    }

    #[test]
    fn metric_keys_follow_lookup_table() {
        assert_eq!(CriterionType::Performance.metric_key(), "performance_score");
        assert_eq!(CriterionType::Popularity.metric_key(), "github_stars");
        assert_eq!(CriterionType::Adoption.metric_key(), "npm_downloads");
        assert_eq!(CriterionType::JobMarket.metric_key(), "job_openings");
        assert_eq!(CriterionType::Satisfaction.metric_key(), "satisfaction_score");
        assert_eq!(CriterionType::LearningCurve.metric_key(), "learning_curve_score");
        assert_eq!(CriterionType::Custom.metric_key(), "custom_score");
    }

    #[test]
    fn criterion_type_accepts_hyphen_and_underscore_forms() {
        let hyphen: CriterionType =
            serde_json::from_str("\"learning-curve\"").expect("hyphen form should parse");
        let underscore: CriterionType =
            serde_json::from_str("\"learning_curve\"").expect("underscore form should parse");
        assert_eq!(hyphen, CriterionType::LearningCurve);
        assert_eq!(underscore, CriterionType::LearningCurve);
        assert_eq!(
            serde_json::to_string(&CriterionType::DeveloperExperience).expect("serialize"),
            "\"developer-experience\""
        );
    }

    #[test]
    fn constraints_are_lowercased_and_compared_structurally() {
        let first = UserConstraints::new(["Performance", " SECURITY "], Some("Web"), None, None);
        let second = UserConstraints::new(["security", "performance"], Some("web"), None, None);
        assert_eq!(first, second);
        assert!(first.has_tag("performance"));
        assert_eq!(first.project_type.as_deref(), Some("web"));
    }

    #[test]
    fn constraints_drop_blank_tags_and_context() {
        let constraints = UserConstraints::new(["", "  "], Some("  "), None, None);
        assert_eq!(constraints, UserConstraints::default());
    }
}
