use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use cplx_merge::{available_variants, best_variant, read_results, variant_by_key, AlgorithmClass};
use serde_json::Value;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Result document written by `cplx merge`.
    #[arg(long)]
    pub results: PathBuf,
    /// Problem name as configured.
    #[arg(long)]
    pub problem: String,
    /// Variant class to search: `classical` or `quantum`.
    #[arg(long)]
    pub class: AlgorithmClass,
    /// Print the variant with this key.
    #[arg(long, conflicts_with_all = ["best", "available"])]
    pub key: Option<String>,
    /// Print the most attractive variant.
    #[arg(long, conflicts_with = "available")]
    pub best: bool,
    /// Print only variants with both formulas.
    #[arg(long)]
    pub available: bool,
}

pub fn run(args: &QueryArgs) -> Result<(), Box<dyn Error>> {
    let results = read_results(&args.results)?;
    let Some(problem) = results.get(&args.problem) else {
        return Err(format!("problem `{}` not found in {}", args.problem, args.results.display()).into());
    };

    let output: Value = if let Some(key) = &args.key {
        let variant = variant_by_key(&results, &args.problem, args.class, key)
            .ok_or_else(|| format!("no {} variant with key `{key}`", args.class))?;
        serde_json::to_value(variant)?
    } else if args.best {
        serde_json::to_value(best_variant(problem.variants(args.class)))?
    } else if args.available {
        serde_json::to_value(available_variants(&results, &args.problem, args.class))?
    } else {
        serde_json::to_value(problem.variants(args.class))?
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
