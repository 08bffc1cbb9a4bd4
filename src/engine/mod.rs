pub mod aggregate;
pub mod key;
pub mod kpi;
pub mod multiplier;
pub mod normalize;
pub mod radar;
pub mod summary;

use crate::error::{RefereeError, Result};
use crate::inventory::Inventory;
use crate::types::report::{ComparisonResult, MAX_TECHNOLOGIES};
use crate::types::scoring::TechnologyScore;
use crate::types::technology::{Technology, UserConstraints};
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};

/// Resolves the selection, scores every technology against the shared
/// criteria, and assembles radar rows and KPI lists in selection order.
pub fn compare<I: Inventory + ?Sized>(
    inventory: &I,
    selectors: &[String],
    constraints: UserConstraints,
) -> Result<ComparisonResult> {
    let technologies = resolve_selection(inventory, selectors)?;
    let criteria = inventory.criteria();

    let scores: Vec<TechnologyScore> = technologies
        .iter()
        .map(|technology| aggregate::score_technology(technology, criteria, &constraints))
        .collect();
    let radar_data = radar::build_radar(&scores);
    let kpis = scores
        .iter()
        .map(|score| (score.name().to_string(), kpi::build_kpis(score)))
        .collect::<BTreeMap<_, _>>();

    let ids = technologies
        .iter()
        .map(|technology| technology.id.as_str())
        .collect::<Vec<_>>();
    let request_key = key::request_key(&ids, &constraints);

    tracing::info!(
        technologies = scores.len(),
        criteria = criteria.len(),
        radar_rows = radar_data.len(),
        "comparison complete"
    );
    ComparisonResult::new(
        scores,
        radar_data,
        kpis,
        constraints,
        Utc::now(),
        request_key,
    )
}

fn resolve_selection<'a, I: Inventory + ?Sized>(
    inventory: &'a I,
    selectors: &[String],
) -> Result<Vec<&'a Technology>> {
    if selectors.is_empty() {
        return Err(RefereeError::EmptySelection {
            max: MAX_TECHNOLOGIES,
        });
    }
    if selectors.len() > MAX_TECHNOLOGIES {
        return Err(RefereeError::TooManyTechnologies {
            count: selectors.len(),
            max: MAX_TECHNOLOGIES,
        });
    }

    let mut seen = HashSet::<&str>::new();
    let mut technologies = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let technology = inventory
            .resolve(selector)
            .ok_or_else(|| RefereeError::UnknownTechnology(selector.clone()))?;
        if !seen.insert(technology.id.as_str()) {
            return Err(RefereeError::DuplicateTechnology(technology.name.clone()));
        }
        technologies.push(technology);
    }
    Ok(technologies)
}
