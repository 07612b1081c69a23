//! Feature comparison table filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::feature::{FeatureCategory, FeatureRow, FeatureValue};
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(FeatureCategory),
}

impl CategoryFilter {
    pub fn matches(self, row: &FeatureRow) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => row.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    Differences,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Differences => f.write_str("differences"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "differences" | "diff" => Ok(Self::Differences),
            other => Err(DomainError::UnknownViewMode(other.to_string())),
        }
    }
}

/// True when at least two plans disagree on this feature.
pub fn values_differ(row: &FeatureRow) -> bool {
    match row.values.split_first() {
        Some((first, rest)) => rest.iter().any(|value| value != first),
        None => false,
    }
}

/// Rows visible for the selected category and view mode, in catalog order.
pub fn filter_rows(
    rows: &[FeatureRow],
    category: CategoryFilter,
    mode: ViewMode,
) -> Vec<&FeatureRow> {
    rows.iter()
        .filter(|row| category.matches(row))
        .filter(|row| mode == ViewMode::All || values_differ(row))
        .collect()
}

/// Plan column to emphasise: the first value that is exactly `Flag(true)`.
pub fn highlighted_index(row: &FeatureRow) -> Option<usize> {
    row.values.iter().position(FeatureValue::is_enabled)
}

/// Comparison panel state for one page session.
///
/// A new view, including `ComparisonView::default()`, starts open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonView {
    open: bool,
    category: CategoryFilter,
    mode: ViewMode,
}

impl Default for ComparisonView {
    fn default() -> Self {
        Self::new(CategoryFilter::All, ViewMode::All)
    }
}

impl ComparisonView {
    pub fn new(category: CategoryFilter, mode: ViewMode) -> Self {
        Self { open: true, category, mode }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Label of the button that shows or hides the table.
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Hide Detailed Comparison"
        } else {
            "Show Detailed Comparison"
        }
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn visible_rows<'a>(&self, catalog: &'a Catalog) -> Vec<&'a FeatureRow> {
        if !self.open {
            return Vec::new();
        }
        filter_rows(catalog.features(), self.category, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::domain::feature::{FeatureCategory, FeatureRow, FeatureValue};

    use super::*;

    fn names(rows: &[&FeatureRow]) -> Vec<String> {
        rows.iter().map(|row| row.name.clone()).collect()
    }

    fn row(name: &str, category: FeatureCategory, values: Vec<FeatureValue>) -> FeatureRow {
        FeatureRow::new(name, category, values)
    }

    #[test]
    fn all_all_returns_every_row_in_order() {
        let catalog = Catalog::standard();
        let rows = filter_rows(catalog.features(), CategoryFilter::All, ViewMode::All);

        let expected: Vec<String> = catalog.features().iter().map(|row| row.name.clone()).collect();
        assert_eq!(names(&rows), expected);
    }

    #[test]
    fn category_filter_keeps_only_matching_rows() {
        let catalog = Catalog::standard();
        let rows = filter_rows(
            catalog.features(),
            CategoryFilter::Only(FeatureCategory::Security),
            ViewMode::All,
        );

        assert_eq!(names(&rows), vec!["SSO Integration", "Audit Logs"]);
        assert!(rows.iter().all(|row| row.category == FeatureCategory::Security));
    }

    #[test]
    fn differences_mode_drops_uniform_rows() {
        let rows = vec![
            row("Status Page", FeatureCategory::Basic, vec![false.into(); 4]),
            row(
                "API Access",
                FeatureCategory::Basic,
                vec![false.into(), true.into(), true.into(), true.into()],
            ),
            row("Uptime SLA", FeatureCategory::Support, vec!["99.9%".into(); 4]),
        ];

        let visible = filter_rows(&rows, CategoryFilter::All, ViewMode::Differences);
        assert_eq!(names(&visible), vec!["API Access"]);

        let everything = filter_rows(&rows, CategoryFilter::All, ViewMode::All);
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn differences_use_strict_type_equality() {
        let rows = vec![row(
            "Exports",
            FeatureCategory::Basic,
            vec![false.into(), "false".into(), false.into(), false.into()],
        )];

        let visible = filter_rows(&rows, CategoryFilter::All, ViewMode::Differences);
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn highlight_picks_first_true_flag_only() {
        let api = row(
            "API Access",
            FeatureCategory::Basic,
            vec![false.into(), true.into(), true.into(), true.into()],
        );
        let storage = row(
            "Storage Space",
            FeatureCategory::Basic,
            vec!["5 GB".into(), "true".into(), "250 GB".into(), "Unlimited".into()],
        );

        assert_eq!(highlighted_index(&api), Some(1));
        assert_eq!(highlighted_index(&storage), None);
    }

    #[test]
    fn parses_filter_and_mode_strings() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "support".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(FeatureCategory::Support))
        );
        assert!("pricing".parse::<CategoryFilter>().is_err());
        assert_eq!("differences".parse::<ViewMode>(), Ok(ViewMode::Differences));
        assert!("changes".parse::<ViewMode>().is_err());
    }

    #[test]
    fn default_view_starts_open_like_new() {
        let view = ComparisonView::default();

        assert_eq!(view, ComparisonView::new(CategoryFilter::All, ViewMode::All));
        assert!(view.is_open());
        assert_eq!(view.toggle_label(), "Hide Detailed Comparison");
    }

    #[test]
    fn closed_view_shows_nothing() {
        let catalog = Catalog::standard();
        let mut view = ComparisonView::default();
        view.toggle();
        assert!(!view.is_open());
        assert!(view.visible_rows(&catalog).is_empty());
        assert_eq!(view.toggle_label(), "Show Detailed Comparison");

        view.toggle();
        view.set_category(CategoryFilter::Only(FeatureCategory::Support));
        view.set_mode(ViewMode::Differences);
        assert_eq!(
            names(&view.visible_rows(&catalog)),
            vec!["Support Response Time", "Dedicated Account Manager", "Priority Support"]
        );
    }
}
