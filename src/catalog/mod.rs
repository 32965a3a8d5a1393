pub mod builtin;
pub mod error;
pub mod types;

use std::{collections::BTreeSet, fs, path::Path};

pub use error::{CatalogError, CatalogErrorKind};
pub use types::{ALL_CATEGORIES, CategoryFilter, Feature, FeatureId, FeatureType};

/// Fixed, ordered list of selectable features. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    features: Vec<Feature>,
}

impl Catalog {
    /// Validates ids and categories, and that the price of selecting everything fits in `u64`.
    /// Any selection's total is then safe to sum.
    pub fn new(features: Vec<Feature>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        let mut total_price = 0_u64;
        for feature in &features {
            if feature.id.trim().is_empty() {
                return Err(error::invalid_feature("feature id cannot be empty"));
            }
            if feature.category.trim().is_empty() {
                return Err(error::invalid_feature("feature category cannot be empty")
                    .with_feature_id(feature.id.clone()));
            }
            if !seen.insert(feature.id.as_str()) {
                return Err(error::duplicate_id(&feature.id));
            }
            total_price = total_price.checked_add(feature.price).ok_or_else(|| {
                error::invalid_feature("catalog total price exceeds the supported range")
                    .with_feature_id(feature.id.clone())
            })?;
        }

        Ok(Self { features })
    }

    pub fn builtin() -> Self {
        Self {
            features: builtin::features(),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|err| {
            CatalogError::new(
                CatalogErrorKind::Io,
                format!("failed to read catalog {}: {}", path.display(), err),
            )
        })?;
        let features: Vec<Feature> = serde_json::from_str(&content).map_err(|err| {
            CatalogError::new(
                CatalogErrorKind::Parse,
                format!("failed to parse catalog {}: {}", path.display(), err),
            )
        })?;

        let catalog = Self::new(features)?;
        tracing::info!(
            target: "catalog",
            path = %path.display(),
            features = catalog.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|feature| feature.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The `all` sentinel followed by each distinct category in first-occurrence order.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = BTreeSet::new();
        let mut categories = vec![CategoryFilter::All];
        for feature in &self.features {
            if seen.insert(feature.category.as_str()) {
                categories.push(CategoryFilter::Category(feature.category.clone()));
            }
        }
        categories
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
