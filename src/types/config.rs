use crate::error::RefereeError;
use crate::types::technology::{Criterion, CriterionType, Technology};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

pub const MAX_NAME_CHARS: usize = 100;
pub const MAX_CATEGORY_CHARS: usize = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct RefereeConfig {
    #[serde(default)]
    pub technologies: Vec<TechnologyConfig>,
    #[serde(default)]
    pub criteria: Vec<CriterionConfig>,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyConfig {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CriterionConfig {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CriterionType,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    Criterion::DEFAULT_WEIGHT
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub priority_tags: Vec<String>,
    pub format: Option<String>,
}

impl TechnologyConfig {
    pub fn to_technology(&self) -> Technology {
        Technology {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.clone(),
            metrics: self.metrics.clone(),
            tags: self
                .tags
                .iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }
}

impl CriterionConfig {
    pub fn to_criterion(&self) -> Criterion {
        let name = self.name.trim().to_string();
        Criterion {
            id: self
                .id
                .as_ref()
                .map(|id| id.trim().to_string())
                .unwrap_or_else(|| name.to_lowercase().replace(' ', "-")),
            name,
            kind: self.kind,
            weight: self.weight,
        }
    }
}

impl RefereeConfig {
    pub fn default_priority_tags(&self) -> &[String] {
        self.defaults
            .as_ref()
            .map(|defaults| defaults.priority_tags.as_slice())
            .unwrap_or(&[])
    }

    pub fn default_format(&self) -> Option<&str> {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.format.as_deref())
    }

    pub fn validate(&self) -> Result<(), RefereeError> {
        let mut ids = HashSet::<String>::new();
        let mut names = HashSet::<String>::new();
        for technology in &self.technologies {
            validate_technology(technology)?;
            let id = technology.id.trim().to_string();
            if !ids.insert(id.clone()) {
                return Err(RefereeError::ConfigParse(format!(
                    "technologies contains duplicate id: {id}"
                )));
            }
            let name = technology.name.trim().to_lowercase();
            if !names.insert(name) {
                return Err(RefereeError::ConfigParse(format!(
                    "technologies contains duplicate name: {}",
                    technology.name.trim()
                )));
            }
        }

        let mut criteria = HashSet::<String>::new();
        for criterion in &self.criteria {
            let name = criterion.name.trim();
            if name.is_empty() {
                return Err(RefereeError::ConfigParse(
                    "criteria.name must be non-empty".to_string(),
                ));
            }
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(RefereeError::ConfigParse(format!(
                    "criteria '{name}' weight must be a finite number >= 0.0"
                )));
            }
            if !criteria.insert(name.to_string()) {
                return Err(RefereeError::ConfigParse(format!(
                    "criteria contains duplicate name: {name}"
                )));
            }
        }

        if let Some(format) = self.default_format() {
            if !matches!(format, "json" | "md") {
                return Err(RefereeError::ConfigParse(format!(
                    "unsupported defaults.format: {format}"
                )));
            }
        }

        Ok(())
    }
}

fn validate_technology(technology: &TechnologyConfig) -> Result<(), RefereeError> {
    let id = technology.id.trim();
    if id.is_empty() {
        return Err(RefereeError::ConfigParse(
            "technologies.id must be non-empty".to_string(),
        ));
    }

    let name_chars = technology.name.trim().chars().count();
    if name_chars == 0 || name_chars > MAX_NAME_CHARS {
        return Err(RefereeError::ConfigParse(format!(
            "technology '{id}' name must be 1-{MAX_NAME_CHARS} characters"
        )));
    }

    let category_chars = technology.category.trim().chars().count();
    if category_chars == 0 || category_chars > MAX_CATEGORY_CHARS {
        return Err(RefereeError::ConfigParse(format!(
            "technology '{id}' category must be 1-{MAX_CATEGORY_CHARS} characters"
        )));
    }

    if let Some((metric, value)) = technology
        .metrics
        .iter()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(RefereeError::ConfigParse(format!(
            "technology '{id}' metric {metric} must be a finite number >= 0.0 (found {value})"
        )));
    }

    Ok(())
}
