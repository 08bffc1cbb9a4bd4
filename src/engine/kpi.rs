use crate::error::{RefereeError, Result};
use crate::types::report::KpiEntry;
use crate::types::scoring::TechnologyScore;
use crate::types::technology::Technology;

pub const OVERALL_SCORE_KPI: &str = "Overall Score";

#[derive(Debug, Clone, Copy)]
enum DisplayStyle {
    Integer,
    Compact,
    RatingOutOfFive,
}

struct MetricKpi {
    metric_key: &'static str,
    name: &'static str,
    unit: &'static str,
    display: DisplayStyle,
}

static METRIC_KPIS: [MetricKpi; 4] = [
    MetricKpi {
        metric_key: "github_stars",
        name: "GitHub Stars",
        unit: "stars",
        display: DisplayStyle::Integer,
    },
    MetricKpi {
        metric_key: "npm_downloads",
        name: "Downloads",
        unit: "downloads",
        display: DisplayStyle::Compact,
    },
    MetricKpi {
        metric_key: "job_openings",
        name: "Job Openings",
        unit: "jobs",
        display: DisplayStyle::Integer,
    },
    MetricKpi {
        metric_key: "satisfaction_score",
        name: "Satisfaction",
        unit: "rating",
        display: DisplayStyle::RatingOutOfFive,
    },
];

/// KPI list for one technology. Always ends with the overall score; if any
/// metric fails to format, only the overall score is kept.
pub fn build_kpis(score: &TechnologyScore) -> Vec<KpiEntry> {
    let mut kpis = match metric_kpis(&score.technology) {
        Ok(kpis) => kpis,
        Err(err) => {
            tracing::warn!(technology = %score.name(), "KPI list degraded: {err}");
            Vec::new()
        }
    };
    kpis.push(KpiEntry::new(
        OVERALL_SCORE_KPI,
        score.overall_score,
        format!("{:.1}", score.overall_score),
        "points",
    ));
    kpis
}

fn metric_kpis(technology: &Technology) -> Result<Vec<KpiEntry>> {
    METRIC_KPIS
        .iter()
        .filter_map(|kpi| technology.metric(kpi.metric_key).map(|value| (kpi, value)))
        .map(|(kpi, value)| -> Result<KpiEntry> {
            let display_value = format_value(kpi.metric_key, value, kpi.display)?;
            Ok(KpiEntry::new(kpi.name, value, display_value, kpi.unit))
        })
        .collect()
}

fn format_value(metric: &str, value: f64, display: DisplayStyle) -> Result<String> {
    if !value.is_finite() || value < 0.0 {
        return Err(RefereeError::KpiFormat {
            metric: metric.to_string(),
            reason: format!("expected a finite non-negative value, found {value}"),
        });
    }
    Ok(match display {
        DisplayStyle::Integer => format!("{}", value.round() as u64),
        DisplayStyle::Compact => compact_count(value),
        DisplayStyle::RatingOutOfFive => format!("{value:.1}/5"),
    })
}

/// 1234 -> "1.2K", 5_600_000 -> "5.6M", values under 1000 stay whole.
/// The suffix is picked after rounding, so 999_960 shows as "1.0M".
pub fn compact_count(value: f64) -> String {
    const SUFFIXES: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];
    let whole = value.round();
    if whole < 1e3 {
        return format!("{}", whole as u64);
    }

    let mut display = String::new();
    for (threshold, suffix) in SUFFIXES {
        let scaled = (value / threshold * 10.0).round() / 10.0;
        display = format!("{scaled:.1}{suffix}");
        if scaled < 1e3 {
            break;
        }
    }
    display
}
