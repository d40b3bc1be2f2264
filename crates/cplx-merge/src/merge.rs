use std::collections::HashSet;

use cplx_core::errors::CplxError;
use cplx_sources::{RawAlgorithmRecord, SourceFamily, SourceSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::variant::{build_variant, AlgorithmClass, AlgorithmVariant};

/// Source-specific problem labels; an absent label means the source does
/// not cover the problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemLabels {
    #[serde(default)]
    pub parallel: Option<String>,
    #[serde(default, alias = "sheet1")]
    pub sequential: Option<String>,
    #[serde(default, alias = "approx")]
    pub approximation: Option<String>,
    #[serde(default)]
    pub quantum: Option<String>,
}

impl ProblemLabels {
    /// Uses the same label for every family.
    pub fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            parallel: Some(label.clone()),
            sequential: Some(label.clone()),
            approximation: Some(label.clone()),
            quantum: Some(label),
        }
    }

    pub fn label(&self, family: SourceFamily) -> Option<&str> {
        match family {
            SourceFamily::Parallel => self.parallel.as_deref(),
            SourceFamily::Sequential => self.sequential.as_deref(),
            SourceFamily::Approximation => self.approximation.as_deref(),
            SourceFamily::Quantum => self.quantum.as_deref(),
        }
    }

    pub fn set(&mut self, family: SourceFamily, label: Option<String>) {
        match family {
            SourceFamily::Parallel => self.parallel = label,
            SourceFamily::Sequential => self.sequential = label,
            SourceFamily::Approximation => self.approximation = label,
            SourceFamily::Quantum => self.quantum = label,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Drop records repeating an earlier `(lowercase name, runtime)` pair
    /// within the same class list.
    #[serde(default)]
    pub dedupe: bool,
}

/// Per-problem extraction and availability counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub problem: String,
    pub parallel: usize,
    pub sequential: usize,
    pub approximation: usize,
    pub quantum: usize,
    #[serde(default)]
    pub duplicates_dropped: usize,
    pub classical_available: usize,
    pub quantum_available: usize,
    pub accepted: bool,
}

impl Coverage {
    fn new(problem: &str) -> Self {
        Self {
            problem: problem.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, family: SourceFamily, count: usize) {
        match family {
            SourceFamily::Parallel => self.parallel = count,
            SourceFamily::Sequential => self.sequential = count,
            SourceFamily::Approximation => self.approximation = count,
            SourceFamily::Quantum => self.quantum = count,
        }
    }

    /// Classical records extracted before de-duplication.
    pub fn classical(&self) -> usize {
        self.parallel + self.sequential + self.approximation
    }
}

/// Both variant lists of an accepted problem. Neither list is ever empty,
/// and documents breaking that are rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProblemResultFields")]
pub struct ProblemResult {
    pub classical: Vec<AlgorithmVariant>,
    pub quantum: Vec<AlgorithmVariant>,
}

#[derive(Deserialize)]
struct ProblemResultFields {
    classical: Vec<AlgorithmVariant>,
    quantum: Vec<AlgorithmVariant>,
}

impl TryFrom<ProblemResultFields> for ProblemResult {
    type Error = String;

    fn try_from(fields: ProblemResultFields) -> Result<Self, Self::Error> {
        let (classical, quantum) = (fields.classical.len(), fields.quantum.len());
        ProblemResult::new(fields.classical, fields.quantum).ok_or_else(|| {
            format!("problem result needs classical and quantum variants (got {classical} and {quantum})")
        })
    }
}

impl ProblemResult {
    /// Returns `None` unless both lists are non-empty.
    pub fn new(classical: Vec<AlgorithmVariant>, quantum: Vec<AlgorithmVariant>) -> Option<Self> {
        if classical.is_empty() || quantum.is_empty() {
            return None;
        }
        Some(Self { classical, quantum })
    }

    pub fn variants(&self, class: AlgorithmClass) -> &[AlgorithmVariant] {
        match class {
            AlgorithmClass::Classical => &self.classical,
            AlgorithmClass::Quantum => &self.quantum,
        }
    }

    pub fn available_count(&self, class: AlgorithmClass) -> usize {
        self.variants(class).iter().filter(|v| v.available).count()
    }
}

/// Coverage is reported for every problem; `result` is present only when
/// the problem was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub coverage: Coverage,
    pub result: Option<ProblemResult>,
}

/// Gathers, builds and accepts or rejects one problem.
///
/// Classical records are concatenated parallel, then sequential, then
/// approximation; batch indices follow that order. A problem lacking either
/// classical or quantum records is rejected without error. Source failures on
/// a requested family are returned with the problem name attached.
pub fn merge_problem(
    problem: &str,
    labels: &ProblemLabels,
    sources: &SourceSet,
    options: &MergeOptions,
) -> Result<MergeOutcome, CplxError> {
    let mut coverage = Coverage::new(problem);
    let mut classical = Vec::new();
    for family in SourceFamily::CLASSICAL {
        classical.extend(gather(problem, labels, sources, family, &mut coverage)?);
    }
    let mut quantum = gather(problem, labels, sources, SourceFamily::Quantum, &mut coverage)?;

    if options.dedupe {
        coverage.duplicates_dropped += dedupe(&mut classical);
        coverage.duplicates_dropped += dedupe(&mut quantum);
    }

    if classical.is_empty() || quantum.is_empty() {
        warn!(
            problem,
            classical = classical.len(),
            quantum = quantum.len(),
            "skipping problem without both classical and quantum records"
        );
        return Ok(MergeOutcome {
            coverage,
            result: None,
        });
    }

    let result = ProblemResult::new(
        build_batch(classical, AlgorithmClass::Classical),
        build_batch(quantum, AlgorithmClass::Quantum),
    );
    if let Some(result) = &result {
        coverage.accepted = true;
        coverage.classical_available = result.available_count(AlgorithmClass::Classical);
        coverage.quantum_available = result.available_count(AlgorithmClass::Quantum);
        info!(
            problem,
            classical = result.classical.len(),
            quantum = result.quantum.len(),
            classical_available = coverage.classical_available,
            quantum_available = coverage.quantum_available,
            "merged problem"
        );
    }
    Ok(MergeOutcome { coverage, result })
}

fn gather(
    problem: &str,
    labels: &ProblemLabels,
    sources: &SourceSet,
    family: SourceFamily,
    coverage: &mut Coverage,
) -> Result<Vec<RawAlgorithmRecord>, CplxError> {
    let Some(label) = labels.label(family) else {
        return Ok(Vec::new());
    };
    let records = sources
        .extract(family, label)
        .map_err(|err| err.with_context("problem", problem))?;
    debug!(problem, family = %family, label, found = records.len(), "extracted records");
    coverage.record(family, records.len());
    Ok(records)
}

fn build_batch(records: Vec<RawAlgorithmRecord>, class: AlgorithmClass) -> Vec<AlgorithmVariant> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| build_variant(record, index, class))
        .collect()
}

// Keeps the first record of each (lowercase name, runtime) pair.
fn dedupe(records: &mut Vec<RawAlgorithmRecord>) -> usize {
    let before = records.len();
    let mut seen = HashSet::new();
    records.retain(|record| {
        let fresh = seen.insert((record.name.to_lowercase(), record.runtime.clone()));
        if !fresh {
            debug!(name = %record.name, "skipping duplicate record");
        }
        fresh
    });
    before - records.len()
}
