use serde::{Deserialize, Serialize};

/// One matching row extracted from a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlgorithmRecord {
    /// Display name; never empty.
    pub name: String,
    /// Free-text variant qualifier, possibly empty.
    pub variant: String,
    /// Free-text time-cost notation.
    pub runtime: String,
    /// Free-text work-cost notation; equals `runtime` for sources without a
    /// work column.
    pub work: String,
    pub parallel: bool,
    pub approximation: bool,
    /// Tag of the source that produced the record.
    pub source: String,
}

impl RawAlgorithmRecord {
    /// Convenience constructor for a sequential exact record whose work
    /// equals its runtime.
    pub fn new(name: impl Into<String>, runtime: impl Into<String>, source: impl Into<String>) -> Self {
        let runtime = runtime.into();
        Self {
            name: name.into(),
            variant: String::new(),
            work: runtime.clone(),
            runtime,
            parallel: false,
            approximation: false,
            source: source.into(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    pub fn with_work(mut self, work: impl Into<String>) -> Self {
        self.work = work.into();
        self
    }

    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    pub fn approximation(mut self) -> Self {
        self.approximation = true;
        self
    }
}
