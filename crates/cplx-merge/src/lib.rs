#![doc = "Builds comparable algorithm variants and merges classical and quantum sources per problem."]

/// YAML pipeline configuration.
pub mod config;
/// Per-problem multi-source merge and acceptance policy.
pub mod merge;
/// Runs every configured problem.
pub mod pipeline;
/// Lookups over a finished result set.
pub mod query;
/// Result set container and JSON sink.
pub mod results;
/// Per-record variant construction.
pub mod variant;

pub use config::{default_problems, load_config, OutputConfig, PipelineConfig, ProblemConfig, SourceConfig};
pub use merge::{merge_problem, Coverage, MergeOptions, MergeOutcome, ProblemLabels, ProblemResult};
pub use pipeline::{run_pipeline, PipelineReport};
pub use query::{available_variants, best_variant, variant_by_key};
pub use results::{read_results, result_digest, write_json, write_results, OutputFormat, ResultSet};
pub use variant::{build_variant, variant_key, AlgorithmClass, AlgorithmVariant};
