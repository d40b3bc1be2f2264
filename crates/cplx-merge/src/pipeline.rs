use cplx_core::errors::CplxError;
use cplx_sources::SourceSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ProblemConfig;
use crate::merge::{merge_problem, Coverage, MergeOptions};
use crate::results::ResultSet;

/// Result set plus one coverage entry per processed problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub results: ResultSet,
    pub coverage: Vec<Coverage>,
}

impl PipelineReport {
    pub fn accepted(&self) -> usize {
        self.coverage.iter().filter(|entry| entry.accepted).count()
    }

    pub fn rejected(&self) -> impl Iterator<Item = &str> {
        self.coverage
            .iter()
            .filter(|entry| !entry.accepted)
            .map(|entry| entry.problem.as_str())
    }

    pub fn coverage_for(&self, problem: &str) -> Option<&Coverage> {
        self.coverage.iter().find(|entry| entry.problem == problem)
    }
}

/// Merges every problem in order. The first source failure aborts the run.
pub fn run_pipeline(
    problems: &[ProblemConfig],
    sources: &SourceSet,
    options: &MergeOptions,
) -> Result<PipelineReport, CplxError> {
    let mut report = PipelineReport::default();
    for problem in problems {
        let outcome = merge_problem(&problem.name, &problem.labels, sources, options)?;
        if let Some(result) = outcome.result {
            report.results.insert(problem.name.clone(), result);
        }
        report.coverage.push(outcome.coverage);
    }
    info!(
        problems = problems.len(),
        accepted = report.accepted(),
        "pipeline finished"
    );
    Ok(report)
}
