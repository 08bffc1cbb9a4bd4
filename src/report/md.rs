use crate::types::report::ComparisonResult;

pub fn to_markdown(result: &ComparisonResult) -> String {
    let mut output = String::new();
    output.push_str("# Technology Comparison\n\n");
    output.push_str(&format!(
        "Generated: {}\nRequest key: {}\n",
        result.generated_at().to_rfc3339(),
        result.request_key()
    ));

    let constraints = result.constraints();
    if constraints.priority_tags.is_empty() {
        output.push_str("Priorities: none\n");
    } else {
        output.push_str(&format!(
            "Priorities: {}\n",
            constraints
                .priority_tags
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    for (label, value) in [
        ("Project type", &constraints.project_type),
        ("Team size", &constraints.team_size),
        ("Timeline", &constraints.timeline),
    ] {
        if let Some(value) = value {
            output.push_str(&format!("{label}: {value}\n"));
        }
    }
    output.push('\n');

    output.push_str("## Ranking\n\n");
    output.push_str("| # | Technology | Category | Overall |\n|---|---|---|---|\n");
    for (rank, score) in result.ranking().iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {:.1} |\n",
            rank + 1,
            score.name(),
            score.technology.category,
            score.overall_score
        ));
    }
    output.push('\n');

    output.push_str("## Criteria\n\n");
    if result.radar_data().is_empty() {
        output.push_str("- none\n\n");
    } else {
        let names = result
            .scores()
            .iter()
            .map(|score| score.name())
            .collect::<Vec<_>>();
        output.push_str(&format!("| Criterion | {} |\n", names.join(" | ")));
        output.push_str(&format!("|---|{}\n", "---|".repeat(names.len())));
        for row in result.radar_data() {
            let cells = (0..names.len())
                .filter_map(|index| row.slot(index))
                .map(|score| format!("{score:.1}"))
                .collect::<Vec<_>>();
            output.push_str(&format!("| {} | {} |\n", row.subject, cells.join(" | ")));
        }
        output.push('\n');
    }

    output.push_str("## KPIs\n\n");
    for score in result.scores() {
        output.push_str(&format!("### {}\n\n", score.name()));
        for kpi in result.kpis().get(score.name()).into_iter().flatten() {
            output.push_str(&format!("- {}: {} {}\n", kpi.name, kpi.display_value, kpi.unit));
        }
        if let Some(explanation) = &score.explanation {
            output.push_str(&format!("\n{explanation}\n"));
        }
        output.push('\n');
    }

    if let Some(recommendation) = result.recommendation() {
        output.push_str("## Recommendation\n\n");
        output.push_str(recommendation);
        output.push('\n');
    }

    output
}
