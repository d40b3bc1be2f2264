#![deny(missing_docs)]
#![doc = "Translation of free-text complexity notation into calculator expressions, plus coarse performance tiers."]

/// Coarse performance tier estimation from raw runtime text.
pub mod metrics;
/// Ordered rule tables used by the translator.
pub mod rules;
/// The notation translator.
pub mod translate;

pub use metrics::{estimate_metrics, Metrics, PerformanceTier};
pub use rules::{ASYMPTOTIC_WRAPPERS, DENSE_EDGE_COUNT, VERTEX_COUNT};
pub use translate::{translate, translate_traced, Rejection, Translation};
