pub mod badges;
pub mod cluster;
pub mod consolidate;
pub mod ingest;
pub mod metrics;
pub mod primary;
pub mod recommend;
pub mod variant;

mod error;

pub use badges::Badge;
pub use consolidate::consolidate;
pub use error::{Error, Result};
pub use metrics::ConsolidationMetrics;
pub use recommend::{ExperienceLevel, ExperienceRecommendation};
pub use variant::{CandidateVariant, ConsolidationOutcome, RelatedVariant, VariantGroup};
