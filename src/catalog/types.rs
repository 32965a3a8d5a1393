use std::fmt;

use serde::{Deserialize, Serialize};

pub type FeatureId = String;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureType {
    BugFix,
    Feature,
    Enhancement,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::BugFix => "bug-fix",
            FeatureType::Feature => "feature",
            FeatureType::Enhancement => "enhancement",
        }
    }

    /// Badge text shown next to a feature card.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureType::BugFix => "Bug Fix",
            FeatureType::Feature => "Feature",
            FeatureType::Enhancement => "Enhancement",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub title: String,
    pub description: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub category: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub recommended: bool,
}

impl Feature {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

/// Category selection driving the visible subset of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Features",
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, feature: &Feature) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => feature.category == *category,
        }
    }
}
