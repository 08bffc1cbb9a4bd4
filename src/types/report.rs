use crate::error::{RefereeError, Result};
use crate::types::scoring::{Score, TechnologyScore, MAX_SCORE};
use crate::types::technology::UserConstraints;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const MAX_TECHNOLOGIES: usize = 5;

/// Slot labels a chart binds to, one per compared technology.
pub const SLOT_LABELS: [&str; MAX_TECHNOLOGIES] = ["A", "B", "C", "D", "E"];

/// One criterion across every compared technology, in selection order.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChartRow {
    pub subject: String,
    pub scores: Vec<Score>,
    pub full_mark: Score,
}

impl RadarChartRow {
    pub fn new(subject: impl Into<String>, scores: Vec<Score>) -> Self {
        Self {
            subject: subject.into(),
            scores,
            full_mark: MAX_SCORE,
        }
    }

    pub fn slot(&self, index: usize) -> Option<Score> {
        self.scores.get(index).copied()
    }
}

impl Serialize for RadarChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let slots = self.scores.len().min(SLOT_LABELS.len());
        let mut map = serializer.serialize_map(Some(slots + 2))?;
        map.serialize_entry("subject", &self.subject)?;
        for (label, score) in SLOT_LABELS.iter().zip(&self.scores) {
            map.serialize_entry(label, score)?;
        }
        map.serialize_entry("fullMark", &self.full_mark)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiEntry {
    pub name: String,
    pub value: f64,
    pub display_value: String,
    pub unit: String,
}

impl KpiEntry {
    pub fn new(name: &str, value: f64, display_value: String, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            display_value,
            unit: unit.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    scores: Vec<TechnologyScore>,
    radar_data: Vec<RadarChartRow>,
    kpis: BTreeMap<String, Vec<KpiEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<String>,
    constraints: UserConstraints,
    generated_at: DateTime<Utc>,
    request_key: String,
}

impl ComparisonResult {
    pub fn new(
        scores: Vec<TechnologyScore>,
        radar_data: Vec<RadarChartRow>,
        kpis: BTreeMap<String, Vec<KpiEntry>>,
        constraints: UserConstraints,
        generated_at: DateTime<Utc>,
        request_key: String,
    ) -> Result<Self> {
        if scores.is_empty() {
            return Err(RefereeError::EmptyResult);
        }
        Ok(Self {
            scores,
            radar_data,
            kpis,
            recommendation: None,
            constraints,
            generated_at,
            request_key,
        })
    }

    pub fn with_recommendation(self, recommendation: impl Into<String>) -> Self {
        Self {
            recommendation: Some(recommendation.into()),
            ..self
        }
    }

    pub fn scores(&self) -> &[TechnologyScore] {
        &self.scores
    }

    pub fn radar_data(&self) -> &[RadarChartRow] {
        &self.radar_data
    }

    pub fn kpis(&self) -> &BTreeMap<String, Vec<KpiEntry>> {
        &self.kpis
    }

    pub fn recommendation(&self) -> Option<&str> {
        self.recommendation.as_deref()
    }

    pub fn constraints(&self) -> &UserConstraints {
        &self.constraints
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn request_key(&self) -> &str {
        &self.request_key
    }

    /// Scores ordered best first; ties keep selection order.
    pub fn ranking(&self) -> Vec<&TechnologyScore> {
        let mut ranked: Vec<&TechnologyScore> = self.scores.iter().collect();
        ranked.sort_by(|left, right| right.overall_score.total_cmp(&left.overall_score));
        ranked
    }
}
