use crate::types::config::RefereeConfig;
use crate::types::technology::{Criterion, Technology};
use std::collections::BTreeMap;

/// Read-only record store the engine resolves technologies and criteria from.
pub trait Inventory: Send + Sync {
    /// Matches an identifier exactly, otherwise a name case-insensitively.
    fn resolve(&self, selector: &str) -> Option<&Technology>;

    fn criteria(&self) -> &[Criterion];

    fn technologies(&self) -> &[Technology];
}

#[derive(Debug, Clone, Default)]
pub struct CatalogInventory {
    technologies: Vec<Technology>,
    criteria: Vec<Criterion>,
}

impl CatalogInventory {
    pub fn new(technologies: Vec<Technology>, criteria: Vec<Criterion>) -> Self {
        Self {
            technologies,
            criteria,
        }
    }

    pub fn from_config(config: &RefereeConfig) -> Self {
        Self::new(
            config
                .technologies
                .iter()
                .map(|technology| technology.to_technology())
                .collect(),
            config
                .criteria
                .iter()
                .map(|criterion| criterion.to_criterion())
                .collect(),
        )
    }

    pub fn by_category(&self) -> BTreeMap<&str, Vec<&Technology>> {
        let mut grouped = BTreeMap::<&str, Vec<&Technology>>::new();
        for technology in &self.technologies {
            grouped
                .entry(technology.category.as_str())
                .or_default()
                .push(technology);
        }
        for members in grouped.values_mut() {
            members.sort_by_key(|technology| technology.name.to_lowercase());
        }
        grouped
    }
}

impl Inventory for CatalogInventory {
    fn resolve(&self, selector: &str) -> Option<&Technology> {
        let selector = selector.trim();
        let folded = selector.to_lowercase();
        self.technologies
            .iter()
            .find(|technology| technology.id == selector)
            .or_else(|| {
                self.technologies
                    .iter()
                    .find(|technology| technology.name.to_lowercase() == folded)
            })
    }

    fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    fn technologies(&self) -> &[Technology] {
        &self.technologies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn technology(id: &str, name: &str, category: &str) -> Technology {
        Technology {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            metrics: BTreeMap::new(),
            tags: BTreeSet::new(),
        }
    }

    fn inventory() -> CatalogInventory {
        CatalogInventory::new(
            vec![
                technology("ts", "TypeScript", "language"),
                technology("react", "React", "frontend"),
                technology("go", "Go", "language"),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn resolve_matches_id_then_name() {
        let inventory = inventory();
        assert_eq!(inventory.resolve("ts").map(|t| t.name.as_str()), Some("TypeScript"));
        assert_eq!(inventory.resolve("typescript").map(|t| t.id.as_str()), Some("ts"));
        assert_eq!(inventory.resolve(" REACT ").map(|t| t.id.as_str()), Some("react"));
        assert!(inventory.resolve("cobol").is_none());
    }

    #[test]
    fn resolve_folds_non_ascii_names() {
        let inventory = CatalogInventory::new(
            vec![technology("aerger", "Ärger", "tooling")],
            Vec::new(),
        );
        assert_eq!(inventory.resolve("ärger").map(|t| t.id.as_str()), Some("aerger"));
        assert_eq!(inventory.resolve("ÄRGER").map(|t| t.id.as_str()), Some("aerger"));
    }

    #[test]
    fn by_category_sorts_members_by_name() {
        let inventory = inventory();
        let grouped = inventory.by_category();
        let languages: Vec<&str> = grouped["language"]
            .iter()
            .map(|technology| technology.name.as_str())
            .collect();
        assert_eq!(languages, vec!["Go", "TypeScript"]);
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec!["frontend", "language"]);
    }
}
