use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, FeatureId};

/// Session-scoped record of what the user picked and annotated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_ids: BTreeSet<FeatureId>,
    comments: BTreeMap<FeatureId, String>,
    comment_input_open: BTreeMap<FeatureId, bool>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Ids outside the catalog are ignored.
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            tracing::debug!(target: "selection", feature_id = id, "toggle_unknown_feature_ignored");
            return false;
        }

        if self.selected_ids.remove(id) {
            tracing::debug!(target: "selection", feature_id = id, "feature_deselected");
            false
        } else {
            self.selected_ids.insert(id.to_string());
            tracing::debug!(target: "selection", feature_id = id, "feature_selected");
            true
        }
    }

    /// Overwrites the note for `id`. An empty note is stored as-is.
    pub fn set_comment(&mut self, catalog: &Catalog, id: &str, text: impl Into<String>) {
        if !catalog.contains(id) {
            tracing::debug!(
                target: "selection",
                feature_id = id,
                "comment_unknown_feature_ignored"
            );
            return;
        }
        self.comments.insert(id.to_string(), text.into());
    }

    /// Presentation-only toggle; never part of submitted data.
    pub fn toggle_comment_visibility(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            return false;
        }
        let open = self.comment_input_open.entry(id.to_string()).or_insert(false);
        *open = !*open;
        *open
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn comment_for(&self, id: &str) -> Option<&str> {
        self.comments.get(id).map(String::as_str)
    }

    /// Stored note for `id`, treating an empty note as absent.
    pub fn note_for(&self, id: &str) -> Option<&str> {
        self.comment_for(id).filter(|comment| !comment.is_empty())
    }

    pub fn is_comment_input_open(&self, id: &str) -> bool {
        self.comment_input_open.get(id).copied().unwrap_or(false)
    }

    pub fn selected_ids(&self) -> &BTreeSet<FeatureId> {
        &self.selected_ids
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }
}
