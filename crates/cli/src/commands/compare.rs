use serde::Serialize;
use subscripter_core::catalog::Catalog;
use subscripter_core::comparison::{highlighted_index, CategoryFilter, ComparisonView, ViewMode};

use super::{render_json, CommandResult};

#[derive(Debug, Serialize)]
struct ComparisonRow {
    feature: String,
    category: String,
    description: Option<String>,
    advanced: bool,
    values: Vec<String>,
    highlighted_plan: Option<String>,
}

#[derive(Debug, Serialize)]
struct ComparisonReport {
    category: String,
    view_mode: String,
    plans: Vec<String>,
    rows: Vec<ComparisonRow>,
}

pub fn run(category: Option<&str>, differences: bool, json_output: bool) -> CommandResult {
    let filter = match category.map(str::parse::<CategoryFilter>).transpose() {
        Ok(filter) => filter.unwrap_or_default(),
        Err(error) => return CommandResult::domain_failure("compare", error),
    };
    let mode = if differences { ViewMode::Differences } else { ViewMode::All };

    let report = build_report(&Catalog::standard(), filter, mode);

    if json_output {
        return render_json("compare", &report);
    }

    CommandResult::text(render_human(&report))
}

fn build_report(catalog: &Catalog, filter: CategoryFilter, mode: ViewMode) -> ComparisonReport {
    let view = ComparisonView::new(filter, mode);
    let plans: Vec<String> = catalog.plans().iter().map(|plan| plan.name.clone()).collect();

    let rows = view
        .visible_rows(catalog)
        .into_iter()
        .map(|row| ComparisonRow {
            feature: row.name.clone(),
            category: row.category.to_string(),
            description: row.description.clone(),
            advanced: row.advanced,
            values: row.values.iter().map(|value| value.display().to_string()).collect(),
            highlighted_plan: highlighted_index(row).and_then(|index| plans.get(index).cloned()),
        })
        .collect();

    ComparisonReport {
        category: view.category().to_string(),
        view_mode: view.mode().to_string(),
        plans,
        rows,
    }
}

fn render_human(report: &ComparisonReport) -> String {
    let mut lines = vec![format!(
        "feature comparison (category: {}, view: {}):",
        report.category, report.view_mode
    )];

    if report.rows.is_empty() {
        lines.push("no features match the selected filters".to_string());
        return lines.join("\n");
    }

    lines.push(format!("{:<28}{}", "Feature", pad_columns(&report.plans)));
    for row in &report.rows {
        let marker = if row.advanced { "*" } else { "" };
        let name = format!("{}{marker}", row.feature);
        let mut line = format!("{name:<28}{}", pad_columns(&row.values));
        if let Some(plan) = &row.highlighted_plan {
            line.push_str(&format!("  (from {plan})"));
        }
        lines.push(line);
    }
    lines.push("* advanced feature".to_string());

    lines.join("\n")
}

fn pad_columns(cells: &[String]) -> String {
    cells.iter().map(|cell| format!("{cell:<14}")).collect::<Vec<_>>().join("")
}

#[cfg(test)]
mod tests {
    use subscripter_core::catalog::Catalog;
    use subscripter_core::comparison::{CategoryFilter, ViewMode};
    use subscripter_core::domain::feature::FeatureCategory;

    use super::{build_report, render_human};

    #[test]
    fn highlighted_plan_is_first_enabled_column() {
        let report = build_report(&Catalog::standard(), CategoryFilter::All, ViewMode::All);
        let api = report.rows.iter().find(|row| row.feature == "API Access").expect("api row");

        assert_eq!(api.highlighted_plan.as_deref(), Some("Pro"));
        assert_eq!(api.values, vec!["no", "yes", "yes", "yes"]);
    }

    #[test]
    fn security_filter_renders_two_rows() {
        let report = build_report(
            &Catalog::standard(),
            CategoryFilter::Only(FeatureCategory::Security),
            ViewMode::All,
        );
        let rendered = render_human(&report);

        assert_eq!(report.rows.len(), 2);
        assert!(rendered.contains("SSO Integration*"));
        assert!(!rendered.contains("Storage"));
    }
}
