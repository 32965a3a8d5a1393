use crate::{
    catalog::{Catalog, CategoryFilter, Feature},
    selection::SelectionState,
};

/// Features visible under `filter`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, filter: &CategoryFilter) -> Vec<&'a Feature> {
    catalog
        .iter()
        .filter(|feature| filter.matches(feature))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate<'a> {
    pub selected_features: Vec<&'a Feature>,
    pub total_cost: u64,
}

impl Aggregate<'_> {
    pub fn selected_count(&self) -> usize {
        self.selected_features.len()
    }
}

/// Recomputed from the current selection on every call.
pub fn aggregate<'a>(catalog: &'a Catalog, selection: &SelectionState) -> Aggregate<'a> {
    let selected_features: Vec<&Feature> = catalog
        .iter()
        .filter(|feature| selection.is_selected(&feature.id))
        .collect();
    let total_cost = selected_features.iter().map(|feature| feature.price).sum();

    Aggregate {
        selected_features,
        total_cost,
    }
}
