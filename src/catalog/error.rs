use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogErrorKind {
    DuplicateId,
    InvalidFeature,
    Io,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogError {
    pub kind: CatalogErrorKind,
    pub message: String,
    pub feature_id: Option<String>,
}

impl CatalogError {
    pub fn new(kind: CatalogErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            feature_id: None,
        }
    }

    pub fn with_feature_id(mut self, feature_id: impl Into<String>) -> Self {
        self.feature_id = Some(feature_id.into());
        self
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.feature_id {
            Some(feature_id) => write!(f, "{} (feature={})", self.message, feature_id),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for CatalogError {}

pub fn duplicate_id(feature_id: &str) -> CatalogError {
    CatalogError::new(
        CatalogErrorKind::DuplicateId,
        "feature id appears more than once in catalog",
    )
    .with_feature_id(feature_id)
}

pub fn invalid_feature(message: impl Into<String>) -> CatalogError {
    CatalogError::new(CatalogErrorKind::InvalidFeature, message)
}
