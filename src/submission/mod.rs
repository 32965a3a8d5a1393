pub mod error;
pub mod gateway;
pub mod payload;
pub mod types;

pub use error::{SubmissionError, SubmissionErrorKind};
pub use gateway::{HttpSubmissionGateway, SubmissionGateway, deliver};
pub use payload::build_payload;
pub use types::{
    FeatureSnapshot, FeaturesBreakdown, NOT_PROVIDED, OrderPayload, OrderSummary, ProjectInfo,
    SelectedFeatureSnapshot, SubmissionConfig,
};
