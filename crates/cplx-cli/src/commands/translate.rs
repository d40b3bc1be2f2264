use std::error::Error;

use clap::Args;
use cplx_notation::{estimate_metrics, translate_traced, Metrics, Rejection};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Notation strings to translate; one JSON line is printed per input.
    #[arg(required = true)]
    pub notations: Vec<String>,
    /// Treat inputs as approximation runtimes when estimating metrics.
    #[arg(long)]
    pub approximation: bool,
}

#[derive(Debug, Serialize)]
struct TranslateLine<'a> {
    input: &'a str,
    formula: Option<String>,
    metrics: Metrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

pub fn run(args: &TranslateArgs) -> Result<(), Box<dyn Error>> {
    for input in &args.notations {
        let traced = translate_traced(input);
        let line = TranslateLine {
            input,
            formula: traced.formula,
            metrics: estimate_metrics(input, args.approximation),
            rejection: traced.rejection,
        };
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}
