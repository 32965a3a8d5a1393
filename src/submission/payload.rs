use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::{
    catalog::{Catalog, FeatureType},
    contact::ContactInfo,
    selection::SelectionState,
    submission::types::{
        FeatureSnapshot, FeaturesBreakdown, NOT_PROVIDED, OrderPayload, OrderSummary,
        ProjectInfo, SelectedFeatureSnapshot,
    },
};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Snapshots the whole session into the record sent to the collection endpoint.
/// Pure: the result depends only on the arguments.
pub fn build_payload(
    catalog: &Catalog,
    selection: &SelectionState,
    contact: &ContactInfo,
    requirements: &str,
    timestamp: OffsetDateTime,
) -> OrderPayload {
    let mut selected_features = Vec::new();
    let mut non_selected_features = Vec::new();
    let mut total_cost = 0_u64;
    let mut breakdown = FeaturesBreakdown::default();

    for feature in catalog {
        if !selection.is_selected(&feature.id) {
            non_selected_features.push(FeatureSnapshot::from(feature));
            continue;
        }

        total_cost += feature.price;
        if feature.is_free() {
            breakdown.free_features += 1;
        } else {
            breakdown.paid_features += 1;
        }
        match feature.kind {
            FeatureType::BugFix => breakdown.bug_fixes += 1,
            FeatureType::Feature => breakdown.features += 1,
            FeatureType::Enhancement => breakdown.enhancements += 1,
        }

        selected_features.push(SelectedFeatureSnapshot::from_feature(
            feature,
            selection.note_for(&feature.id),
        ));
    }

    OrderPayload {
        timestamp: format_timestamp(timestamp),
        project_info: ProjectInfo {
            name: or_placeholder(&contact.name),
            email: or_placeholder(&contact.email),
            project_name: or_placeholder(&contact.company),
        },
        summary: OrderSummary {
            total_selected_features: selected_features.len(),
            total_cost,
            features_breakdown: breakdown,
        },
        selected_features,
        non_selected_features,
        comments_and_notes: (!requirements.is_empty()).then(|| requirements.to_string()),
    }
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    let utc = timestamp.to_offset(UtcOffset::UTC);
    utc.format(TIMESTAMP_FORMAT).unwrap_or_else(|_| utc.to_string())
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        value.to_string()
    }
}
