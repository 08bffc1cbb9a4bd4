use crate::types::technology::Technology;
use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;

pub fn clamp_score(value: Score) -> Score {
    if value.is_nan() {
        return MIN_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// One criterion's normalized result, kept in criterion-list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub criterion: String,
    pub score: Score,
    pub boosted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyScore {
    pub technology: Technology,
    pub overall_score: Score,
    #[serde(serialize_with = "serialize_criteria_map")]
    pub criteria_scores: Vec<CriterionScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TechnologyScore {
    pub fn new(
        technology: Technology,
        overall_score: Score,
        criteria_scores: Vec<CriterionScore>,
        explanation: Option<String>,
    ) -> Self {
        Self {
            technology,
            overall_score: clamp_score(overall_score),
            criteria_scores: criteria_scores
                .into_iter()
                .map(|entry| CriterionScore {
                    score: clamp_score(entry.score),
                    ..entry
                })
                .collect(),
            explanation,
        }
    }

    pub fn name(&self) -> &str {
        &self.technology.name
    }

    pub fn criterion_score(&self, criterion: &str) -> Option<Score> {
        self.criteria_scores
            .iter()
            .find(|entry| entry.criterion == criterion)
            .map(|entry| entry.score)
    }

    pub fn strongest_criterion(&self) -> Option<&CriterionScore> {
        self.criteria_scores
            .iter()
            .fold(None, |best: Option<&CriterionScore>, entry| match best {
                Some(current) if current.score >= entry.score => Some(current),
                _ => Some(entry),
            })
    }
}

fn serialize_criteria_map<S>(entries: &[CriterionScore], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let map: BTreeMap<&str, Score> = entries
        .iter()
        .map(|entry| (entry.criterion.as_str(), entry.score))
        .collect();
    map.serialize(serializer)
}
