use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use cplx_core::errors::{CplxError, ErrorInfo};
use cplx_core::{from_json_slice, stable_hash_string, to_canonical_json_bytes, to_pretty_json_bytes};
use serde::{Deserialize, Serialize};

use crate::merge::ProblemResult;

/// Accepted problems keyed by problem name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    problems: BTreeMap<String, ProblemResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, problem: impl Into<String>, result: ProblemResult) {
        self.problems.insert(problem.into(), result);
    }

    pub fn get(&self, problem: &str) -> Option<&ProblemResult> {
        self.problems.get(problem)
    }

    pub fn contains(&self, problem: &str) -> bool {
        self.problems.contains_key(problem)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProblemResult)> {
        self.problems.iter().map(|(name, result)| (name.as_str(), result))
    }
}

/// Layout of written JSON documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Indented, fields in declaration order.
    #[default]
    Pretty,
    /// Compact with sorted keys.
    Canonical,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pretty" => Ok(OutputFormat::Pretty),
            "canonical" => Ok(OutputFormat::Canonical),
            other => Err(format!("unknown output format `{other}`")),
        }
    }
}

/// Writes any serializable document in one piece, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T, format: OutputFormat) -> Result<(), CplxError> {
    let bytes = match format {
        OutputFormat::Pretty => to_pretty_json_bytes(value)?,
        OutputFormat::Canonical => to_canonical_json_bytes(value)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| io_error("cplx_merge.output_dir", parent, err))?;
    }
    fs::write(path, bytes).map_err(|err| io_error("cplx_merge.write", path, err))
}

pub fn write_results(path: &Path, results: &ResultSet, format: OutputFormat) -> Result<(), CplxError> {
    write_json(path, results, format)
}

pub fn read_results(path: &Path) -> Result<ResultSet, CplxError> {
    let bytes = fs::read(path).map_err(|err| io_error("cplx_merge.read", path, err))?;
    from_json_slice(&bytes).map_err(|err| err.with_context("path", path.display().to_string()))
}

/// SHA-256 over the canonical encoding; independent of the written format.
pub fn result_digest(results: &ResultSet) -> Result<String, CplxError> {
    stable_hash_string(results)
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> CplxError {
    CplxError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}
