use cplx_core::errors::{CplxError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::family::SourceFamily;
use crate::record::RawAlgorithmRecord;

/// Quantum-flag values that mark a row of the sequential source as a quantum
/// algorithm; such rows are excluded from the sequential family.
pub const QUANTUM_FLAG_VALUES: &[&str] = &["1", "Y", "y", "Yes"];

/// Named-field extraction contract for one source layout.
///
/// Column indices are zero-based positions within a data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSchema {
    /// Provenance tag stamped on every extracted record.
    pub tag: String,
    /// Column holding the problem label.
    pub problem: usize,
    /// Column holding the algorithm name.
    pub name: usize,
    /// Column holding the variant description.
    pub variant: usize,
    /// Column holding the runtime notation.
    pub runtime: usize,
    /// Column holding the work notation; `None` copies the runtime.
    pub work: Option<usize>,
    /// Column whose value flags a row as quantum, if the layout has one.
    pub quantum_flag: Option<usize>,
    /// Whether records from this layout are parallel algorithms.
    pub parallel: bool,
    /// Whether records from this layout are approximations.
    pub approximation: bool,
}

impl SourceSchema {
    /// Returns the stock layout for a family.
    pub fn for_family(family: SourceFamily) -> Self {
        match family {
            SourceFamily::Parallel => Self {
                tag: "parallel_algos".into(),
                problem: 1,
                name: 17,
                variant: 7,
                runtime: 27,
                work: Some(31),
                quantum_flag: None,
                parallel: true,
                approximation: false,
            },
            SourceFamily::Sequential => Self {
                tag: "sheet1".into(),
                problem: 1,
                name: 14,
                variant: 4,
                runtime: 28,
                work: None,
                quantum_flag: Some(50),
                parallel: false,
                approximation: false,
            },
            SourceFamily::Approximation => Self {
                tag: "approx_algos".into(),
                problem: 1,
                name: 15,
                variant: 5,
                runtime: 28,
                work: None,
                quantum_flag: None,
                parallel: false,
                approximation: true,
            },
            SourceFamily::Quantum => Self {
                tag: "quantum".into(),
                problem: 1,
                name: 13,
                variant: 4,
                runtime: 27,
                work: Some(29),
                quantum_flag: None,
                parallel: false,
                approximation: false,
            },
        }
    }

    /// Rejects layouts where the problem or name column doubles as another field.
    pub fn validate(&self) -> Result<(), CplxError> {
        let key_columns = [("problem", self.problem), ("name", self.name)];
        let mut others = vec![("variant", self.variant), ("runtime", self.runtime)];
        others.extend(self.work.map(|idx| ("work", idx)));
        others.extend(self.quantum_flag.map(|idx| ("quantum_flag", idx)));
        if self.problem == self.name {
            return Err(overlap(&self.tag, "problem", "name", self.problem));
        }
        for (key, key_idx) in key_columns {
            if let Some((field, _)) = others.iter().find(|(_, idx)| *idx == key_idx) {
                return Err(overlap(&self.tag, key, field, key_idx));
            }
        }
        Ok(())
    }

    /// Maps one data row to a record when its problem field matches `label`.
    ///
    /// Missing trailing fields read as empty. Rows with an empty name, or
    /// rows flagged quantum by the layout's quantum-flag column, yield `None`.
    pub fn extract_row<F: AsRef<str>>(&self, fields: &[F], label: &str) -> Option<RawAlgorithmRecord> {
        let field = |idx: usize| fields.get(idx).map(|f| f.as_ref().trim()).unwrap_or("");
        if fields.len() <= self.problem || field(self.problem) != label.trim() {
            return None;
        }
        if let Some(flag_idx) = self.quantum_flag {
            if QUANTUM_FLAG_VALUES.contains(&field(flag_idx)) {
                return None;
            }
        }
        let name = field(self.name);
        if name.is_empty() {
            return None;
        }
        let runtime = field(self.runtime).to_string();
        let work = match self.work {
            Some(idx) => field(idx).to_string(),
            None => runtime.clone(),
        };
        Some(RawAlgorithmRecord {
            name: name.to_string(),
            variant: field(self.variant).to_string(),
            runtime,
            work,
            parallel: self.parallel,
            approximation: self.approximation,
            source: self.tag.clone(),
        })
    }
}

fn overlap(tag: &str, key: &str, field: &str, idx: usize) -> CplxError {
    CplxError::Schema(
        ErrorInfo::new(
            "cplx_sources.schema_overlap",
            format!("{key} column shares index {idx} with {field}"),
        )
        .with_context("source", tag),
    )
}

/// Partial layout read from configuration; unset fields keep the stock value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaOverride {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub problem: Option<usize>,
    #[serde(default)]
    pub name: Option<usize>,
    #[serde(default)]
    pub variant: Option<usize>,
    #[serde(default)]
    pub runtime: Option<usize>,
    #[serde(default)]
    pub work: Option<usize>,
    #[serde(default)]
    pub quantum_flag: Option<usize>,
}

impl SchemaOverride {
    pub fn apply(&self, mut schema: SourceSchema) -> SourceSchema {
        if let Some(tag) = &self.tag {
            schema.tag = tag.clone();
        }
        schema.problem = self.problem.unwrap_or(schema.problem);
        schema.name = self.name.unwrap_or(schema.name);
        schema.variant = self.variant.unwrap_or(schema.variant);
        schema.runtime = self.runtime.unwrap_or(schema.runtime);
        schema.work = self.work.or(schema.work);
        schema.quantum_flag = self.quantum_flag.or(schema.quantum_flag);
        schema
    }
}
