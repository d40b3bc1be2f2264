use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cplx_merge::{load_config, result_digest, run_pipeline, write_json, write_results};
use tracing::info;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// YAML pipeline configuration.
    #[arg(long)]
    pub config: PathBuf,
    /// Result document path, overriding `output.path`.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Also write per-problem coverage counts as JSON.
    #[arg(long)]
    pub coverage: Option<PathBuf>,
    /// Drop repeated records within each class list.
    #[arg(long)]
    pub dedupe: bool,
}

pub fn run(args: &MergeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_config(&args.config)?;
    if let Some(out) = &args.out {
        config.output.path = out.clone();
    }
    if let Some(coverage) = &args.coverage {
        config.output.coverage = Some(coverage.clone());
    }
    config.dedupe |= args.dedupe;

    let sources = config.build_sources();
    let report = run_pipeline(&config.problems, &sources, &config.merge_options())?;

    for entry in &report.coverage {
        info!(
            problem = %entry.problem,
            parallel = entry.parallel,
            sequential = entry.sequential,
            approximation = entry.approximation,
            quantum = entry.quantum,
            accepted = entry.accepted,
            "coverage"
        );
    }

    write_results(&config.output.path, &report.results, config.output.format)?;
    let digest = result_digest(&report.results)?;
    info!(
        path = %config.output.path.display(),
        problems = report.results.len(),
        %digest,
        "wrote results"
    );

    if let Some(path) = &config.output.coverage {
        write_json(path, &report.coverage, config.output.format)?;
        info!(path = %path.display(), "wrote coverage");
    }
    Ok(())
}
