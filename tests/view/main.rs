use order_form::{
    catalog::{Catalog, CategoryFilter, Feature, FeatureType},
    selection::SelectionState,
    view::{aggregate, filter},
};

fn feature(id: &str, price: u64, kind: FeatureType, category: &str) -> Feature {
    Feature {
        id: id.to_string(),
        title: format!("feature-{id}"),
        description: format!("description-{id}"),
        price,
        kind,
        category: category.to_string(),
        popular: false,
        recommended: false,
    }
}

fn two_feature_catalog() -> Catalog {
    Catalog::new(vec![
        feature("1", 0, FeatureType::BugFix, "Core"),
        feature("2", 200, FeatureType::Feature, "Integrations"),
    ])
    .expect("catalog should build")
}

#[test]
fn every_category_filter_keeps_only_matching_features_in_order() {
    let catalog = Catalog::builtin();

    for category in catalog.categories() {
        let visible = filter(&catalog, &category);
        match &category {
            CategoryFilter::All => {
                let all: Vec<&Feature> = catalog.iter().collect();
                assert_eq!(visible, all);
            }
            CategoryFilter::Category(name) => {
                assert!(!visible.is_empty(), "derived category {name} must match something");
                assert!(visible.iter().all(|feature| feature.category == *name));
                let expected: Vec<&Feature> = catalog
                    .iter()
                    .filter(|feature| feature.category == *name)
                    .collect();
                assert_eq!(visible, expected);
            }
        }
    }
}

#[test]
fn builtin_categories_follow_first_occurrence() {
    let catalog = Catalog::builtin();
    let names: Vec<String> = catalog
        .categories()
        .iter()
        .map(|category| category.as_str().to_string())
        .collect();

    assert_eq!(names[0], "all");
    assert_eq!(names[1], "UI/UX");
    assert_eq!(names[2], "Integrations");
    assert_eq!(names[3], "Core Functionality");
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len(), "categories must be distinct");
}

#[test]
fn filter_for_absent_category_is_empty() {
    let catalog = two_feature_catalog();
    let visible = filter(&catalog, &CategoryFilter::parse("Billing"));
    assert!(visible.is_empty());
}

#[test]
fn toggle_twice_restores_selection() {
    let catalog = Catalog::builtin();
    let mut selection = SelectionState::new();
    selection.toggle(&catalog, "5");
    let before = selection.clone();

    for id in ["1", "5", "18"] {
        selection.toggle(&catalog, id);
        selection.toggle(&catalog, id);
        assert_eq!(selection, before, "double toggle of {id} must be a no-op");
    }
}

#[test]
fn empty_selection_costs_nothing() {
    let catalog = Catalog::builtin();
    let totals = aggregate(&catalog, &SelectionState::new());
    assert!(totals.selected_features.is_empty());
    assert_eq!(totals.total_cost, 0);
}

#[test]
fn selecting_both_features_totals_their_prices() {
    let catalog = two_feature_catalog();
    let mut selection = SelectionState::new();
    selection.toggle(&catalog, "2");
    selection.toggle(&catalog, "1");

    let totals = aggregate(&catalog, &selection);
    assert_eq!(totals.total_cost, 200);
    assert_eq!(totals.selected_count(), 2);
    let ids: Vec<&str> = totals
        .selected_features
        .iter()
        .map(|feature| feature.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2"], "catalog order wins over toggle order");
}

#[test]
fn aggregate_reflects_each_mutation_immediately() {
    let catalog = Catalog::builtin();
    let mut selection = SelectionState::new();

    let mut expected = 0;
    for id in ["3", "12", "15", "1"] {
        selection.toggle(&catalog, id);
        expected += catalog.get(id).expect("builtin id").price;
        let totals = aggregate(&catalog, &selection);
        assert_eq!(totals.total_cost, expected);
        assert_eq!(
            totals.total_cost,
            totals.selected_features.iter().map(|f| f.price).sum::<u64>()
        );
    }

    selection.toggle(&catalog, "12");
    assert_eq!(aggregate(&catalog, &selection).total_cost, expected - 400);
}

#[test]
fn toggling_unknown_id_is_ignored() {
    let catalog = two_feature_catalog();
    let mut selection = SelectionState::new();
    assert!(!selection.toggle(&catalog, "99"));
    assert!(selection.is_empty());
    assert_eq!(aggregate(&catalog, &selection).total_cost, 0);
}

#[test]
fn largest_representable_total_aggregates_without_overflow() {
    let catalog = Catalog::new(vec![
        feature("1", u64::MAX - 5, FeatureType::Feature, "Core"),
        feature("2", 5, FeatureType::Enhancement, "Core"),
    ])
    .expect("catalog whose total fits in u64 should build");
    let mut selection = SelectionState::new();
    selection.toggle(&catalog, "1");
    selection.toggle(&catalog, "2");

    let summary = aggregate(&catalog, &selection);
    assert_eq!(summary.total_cost, u64::MAX);
    assert_eq!(summary.selected_count(), 2);

    let overflowing = Catalog::new(vec![
        feature("1", u64::MAX, FeatureType::Feature, "Core"),
        feature("2", 1, FeatureType::Feature, "Core"),
    ]);
    assert!(overflowing.is_err(), "catalog whose total overflows must be rejected");
}
