use serde::{Deserialize, Serialize};

use crate::catalog::{Feature, FeatureType};

pub const NOT_PROVIDED: &str = "Not provided";

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Record delivered to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub timestamp: String,
    pub project_info: ProjectInfo,
    pub selected_features: Vec<SelectedFeatureSnapshot>,
    pub non_selected_features: Vec<FeatureSnapshot>,
    pub comments_and_notes: Option<String>,
    pub summary: OrderSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub email: String,
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFeatureSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub category: String,
    pub comment: Option<String>,
    pub popular: bool,
    pub recommended: bool,
}

impl SelectedFeatureSnapshot {
    pub fn from_feature(feature: &Feature, comment: Option<&str>) -> Self {
        Self {
            id: feature.id.clone(),
            title: feature.title.clone(),
            description: feature.description.clone(),
            price: feature.price,
            kind: feature.kind,
            category: feature.category.clone(),
            comment: comment.map(str::to_string),
            popular: feature.popular,
            recommended: feature.recommended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u64,
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub category: String,
    pub popular: bool,
    pub recommended: bool,
}

impl From<&Feature> for FeatureSnapshot {
    fn from(feature: &Feature) -> Self {
        Self {
            id: feature.id.clone(),
            title: feature.title.clone(),
            description: feature.description.clone(),
            price: feature.price,
            kind: feature.kind,
            category: feature.category.clone(),
            popular: feature.popular,
            recommended: feature.recommended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_selected_features: usize,
    pub total_cost: u64,
    pub features_breakdown: FeaturesBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesBreakdown {
    pub free_features: usize,
    pub paid_features: usize,
    pub bug_fixes: usize,
    pub features: usize,
    pub enhancements: usize,
}
