use std::fmt;
use std::str::FromStr;

use cplx_notation::{estimate_metrics, translate, Metrics};
use cplx_sources::RawAlgorithmRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Display names are cut to this many characters.
pub const NAME_LIMIT: usize = 80;
/// Variant descriptions are cut to this many characters before prefixing.
pub const DESCRIPTION_LIMIT: usize = 150;
/// Key slugs are cut to this many characters before the index suffix.
pub const KEY_SLUG_LIMIT: usize = 50;
/// Length of the runtime excerpt carried by unavailable variants.
pub const NOTE_EXCERPT_LIMIT: usize = 50;

/// Description used when a record carries no variant text.
pub const DESCRIPTION_PLACEHOLDER: &str = "Algorithm variant";
/// Prepended to the descriptions of approximation and heuristic records.
pub const APPROXIMATION_PREFIX: &str = "Approximation/Heuristic: ";

/// Oracle query-count factor applied to quantum runtimes to obtain work.
pub const QUERY_FACTOR: &str = "q";

static NON_SLUG: Lazy<Regex> = Lazy::new(|| compile(r"[^a-z0-9]+"));
static PROCESSOR_DIVISOR: Lazy<Regex> = Lazy::new(|| compile(r"\s*/\s*p\b"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("variant pattern is a valid regex")
}

/// Algorithm class of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmClass {
    Classical,
    Quantum,
}

impl AlgorithmClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmClass::Classical => "classical",
            AlgorithmClass::Quantum => "quantum",
        }
    }
}

impl fmt::Display for AlgorithmClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmClass {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classical" => Ok(AlgorithmClass::Classical),
            "quantum" => Ok(AlgorithmClass::Quantum),
            other => Err(format!("unknown algorithm class `{other}`")),
        }
    }
}

/// Canonical, comparable algorithm entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmVariant {
    /// Identifier unique within its (problem, class) batch.
    pub key: String,
    pub name: String,
    pub description: String,
    /// True only when both formulas are present.
    pub available: bool,
    pub runtime_formula: Option<String>,
    pub work_formula: Option<String>,
    pub metrics: Metrics,
    pub reference: String,
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub approximation: bool,
    /// Excerpt of the untranslated runtime, present only when unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Builds the variant for the record at position `index` of its batch.
pub fn build_variant(
    record: RawAlgorithmRecord,
    index: usize,
    class: AlgorithmClass,
) -> AlgorithmVariant {
    let runtime_formula = translate(&record.runtime);
    let work_formula = translate(&record.work).or_else(|| {
        runtime_formula
            .as_deref()
            .map(|runtime| complete_work(runtime, record.parallel, class))
    });
    let available = runtime_formula.is_some() && work_formula.is_some();

    let note = (!available).then(|| {
        format!(
            "Formula unavailable - original: {}",
            truncate(&record.runtime, NOTE_EXCERPT_LIMIT)
        )
    });

    AlgorithmVariant {
        key: variant_key(&record.name, index),
        name: truncate(&record.name, NAME_LIMIT),
        description: describe(&record.variant, record.approximation),
        available,
        runtime_formula,
        work_formula,
        metrics: estimate_metrics(&record.runtime, record.approximation),
        reference: reference(&record.source, &record.variant),
        parallel: record.parallel,
        approximation: record.approximation,
        note,
    }
}

/// Lowercased slug of `name` with every run outside `[a-z0-9]` collapsed to
/// a single hyphen, cut to [`KEY_SLUG_LIMIT`] and suffixed with the index.
pub fn variant_key(name: &str, index: usize) -> String {
    let lowered = name.to_lowercase();
    let slug = NON_SLUG.replace_all(&lowered, "-");
    format!("{}-{index}", truncate(&slug, KEY_SLUG_LIMIT))
}

// Work for a translated runtime whose own work column did not translate.
fn complete_work(runtime: &str, parallel: bool, class: AlgorithmClass) -> String {
    match class {
        AlgorithmClass::Classical if parallel => PROCESSOR_DIVISOR
            .replace_all(runtime, "")
            .trim()
            .to_string(),
        AlgorithmClass::Classical => runtime.to_string(),
        AlgorithmClass::Quantum => format!("({runtime}) * {QUERY_FACTOR}"),
    }
}

fn describe(variant: &str, approximation: bool) -> String {
    let text = truncate(variant, DESCRIPTION_LIMIT);
    let text = if text.is_empty() {
        DESCRIPTION_PLACEHOLDER.to_string()
    } else {
        text
    };
    if approximation {
        format!("{APPROXIMATION_PREFIX}{text}")
    } else {
        text
    }
}

fn reference(source: &str, variant: &str) -> String {
    if variant.is_empty() {
        format!("Source: {source}")
    } else {
        format!("Source: {source} - {variant}")
    }
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_divisor_is_removed_everywhere() {
        assert_eq!(
            complete_work("n / p + log(n, e)/p", true, AlgorithmClass::Classical),
            "n + log(n, e)"
        );
        assert_eq!(
            complete_work("n/poly", true, AlgorithmClass::Classical),
            "n/poly"
        );
    }

    #[test]
    fn class_parses_case_insensitively() {
        assert_eq!("Quantum".parse::<AlgorithmClass>(), Ok(AlgorithmClass::Quantum));
        assert!("hybrid".parse::<AlgorithmClass>().is_err());
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("ααααα", 3), "ααα");
    }
}
