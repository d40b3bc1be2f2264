use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use cplx_core::errors::{CplxError, ErrorInfo};
use cplx_sources::{CsvSource, SchemaOverride, SourceFamily, SourceSchema, SourceSet};
use serde::{Deserialize, Serialize};

use crate::merge::{MergeOptions, ProblemLabels};
use crate::results::OutputFormat;

/// YAML-configurable description of a full pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Source table per family; families without an entry cannot be queried.
    #[serde(default)]
    pub sources: BTreeMap<SourceFamily, SourceConfig>,
    /// Problems to merge, in processing order.
    #[serde(default = "default_problems")]
    pub problems: Vec<ProblemConfig>,
    /// Drop repeated `(name, runtime)` records inside each class list.
    #[serde(default)]
    pub dedupe: bool,
    /// Where and how results are written.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sources: BTreeMap::new(),
            problems: default_problems(),
            dedupe: false,
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Column overrides on top of the family's stock layout.
    #[serde(default)]
    pub schema: SchemaOverride,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemConfig {
    pub name: String,
    #[serde(default)]
    pub labels: ProblemLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    /// Optional coverage report destination.
    #[serde(default)]
    pub coverage: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: OutputFormat::default(),
            coverage: None,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("parsed_algorithms.json")
}

/// Stock problem table used when a configuration lists no problems.
pub fn default_problems() -> Vec<ProblemConfig> {
    let problem = |name: &str, labels: [Option<&str>; 4]| {
        let mut mapped = ProblemLabels::default();
        for (family, label) in SourceFamily::ALL.into_iter().zip(labels) {
            mapped.set(family, label.map(str::to_string));
        }
        ProblemConfig {
            name: name.to_string(),
            labels: mapped,
        }
    };
    vec![
        problem(
            "Integer Factorization",
            [
                Some("Integer Factoring"),
                Some("Integer Factoring"),
                None,
                Some("Integer Factoring"),
            ],
        ),
        problem(
            "Database Search",
            [
                Some("String Search"),
                Some("String Search"),
                Some("String Search"),
                Some("String Search"),
            ],
        ),
        problem(
            "Traveling Salesman",
            [
                None,
                None,
                Some("The Traveling-Salesman Problem"),
                Some("The Traveling-Salesman Problem"),
            ],
        ),
    ]
}

fn config_error(code: &str, message: impl Into<String>) -> CplxError {
    CplxError::Config(ErrorInfo::new(code, message))
}

/// Reads a YAML configuration; relative paths resolve against its directory.
pub fn load_config(path: &Path) -> Result<PipelineConfig, CplxError> {
    let text = fs::read_to_string(path).map_err(|err| {
        config_error("cplx_config.read", err.to_string())
            .with_context("path", path.display().to_string())
    })?;
    let mut config = PipelineConfig::from_yaml_str(&text)
        .map_err(|err| err.with_context("path", path.display().to_string()))?;
    if let Some(base) = path.parent() {
        config.resolve_paths(base);
    }
    Ok(config)
}

impl PipelineConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, CplxError> {
        let config: PipelineConfig = serde_yaml::from_str(text)
            .map_err(|err| config_error("cplx_config.parse", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects unnamed or repeated problems and inconsistent schemas.
    pub fn validate(&self) -> Result<(), CplxError> {
        let mut seen = BTreeSet::new();
        for problem in &self.problems {
            if problem.name.trim().is_empty() {
                return Err(config_error("cplx_config.problem_name", "problem name is empty"));
            }
            if !seen.insert(problem.name.as_str()) {
                return Err(config_error(
                    "cplx_config.duplicate_problem",
                    format!("problem `{}` is listed twice", problem.name),
                ));
            }
        }
        for (family, source) in &self.sources {
            self.schema_for(*family, source).validate()?;
        }
        Ok(())
    }

    /// Joins relative source and output paths onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        for source in self.sources.values_mut() {
            resolve(&mut source.path);
        }
        resolve(&mut self.output.path);
        if let Some(coverage) = self.output.coverage.as_mut() {
            resolve(coverage);
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions { dedupe: self.dedupe }
    }

    /// One CSV source per configured family.
    pub fn build_sources(&self) -> SourceSet {
        let mut set = SourceSet::new();
        for (family, source) in &self.sources {
            set.insert(CsvSource::with_schema(
                *family,
                &source.path,
                self.schema_for(*family, source),
            ));
        }
        set
    }

    fn schema_for(&self, family: SourceFamily, source: &SourceConfig) -> SourceSchema {
        source.schema.apply(SourceSchema::for_family(family))
    }
}
