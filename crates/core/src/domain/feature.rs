use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One cell of the comparison table: a capability flag or a display string.
///
/// Equality is strict on both variant and value, so `Flag(false)` never equals
/// `Text("false")`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Text(String),
}

impl FeatureValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Flag(true))
    }

    pub fn display(&self) -> &str {
        match self {
            Self::Flag(true) => "yes",
            Self::Flag(false) => "no",
            Self::Text(text) => text,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    Basic,
    Analytics,
    Security,
    Support,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 4] = [
        FeatureCategory::Basic,
        FeatureCategory::Analytics,
        FeatureCategory::Security,
        FeatureCategory::Support,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Analytics => "analytics",
            Self::Security => "security",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "analytics" => Ok(Self::Analytics),
            "security" => Ok(Self::Security),
            "support" => Ok(Self::Support),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// A comparison row. `values` is positional: index `i` belongs to the catalog's
/// `i`-th plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<FeatureValue>,
    pub category: FeatureCategory,
    pub advanced: bool,
}

impl FeatureRow {
    pub fn new(
        name: impl Into<String>,
        category: FeatureCategory,
        values: Vec<FeatureValue>,
    ) -> Self {
        Self { name: name.into(), description: None, values, category, advanced: false }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }
}
