use std::fmt;

use serde::{Deserialize, Serialize};

/// The four independent source families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFamily {
    /// Parallel classical algorithms.
    Parallel,
    /// Sequential exact classical algorithms.
    #[serde(alias = "sheet1")]
    Sequential,
    /// Approximation and heuristic classical algorithms.
    #[serde(alias = "approx")]
    Approximation,
    /// Quantum algorithms.
    Quantum,
}

impl SourceFamily {
    /// Classical families in concatenation order.
    pub const CLASSICAL: [SourceFamily; 3] = [
        SourceFamily::Parallel,
        SourceFamily::Sequential,
        SourceFamily::Approximation,
    ];

    /// All families, classical first.
    pub const ALL: [SourceFamily; 4] = [
        SourceFamily::Parallel,
        SourceFamily::Sequential,
        SourceFamily::Approximation,
        SourceFamily::Quantum,
    ];

    pub fn is_classical(self) -> bool {
        !matches!(self, SourceFamily::Quantum)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceFamily::Parallel => "parallel",
            SourceFamily::Sequential => "sequential",
            SourceFamily::Approximation => "approximation",
            SourceFamily::Quantum => "quantum",
        }
    }
}

impl fmt::Display for SourceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
