use std::collections::BTreeMap;

use cplx_core::errors::{CplxError, ErrorInfo};

use crate::family::SourceFamily;
use crate::record::RawAlgorithmRecord;

/// Extraction contract shared by every source family.
pub trait RecordSource {
    /// Family whose records this source produces.
    fn family(&self) -> SourceFamily;

    /// Returns every record whose problem field matches `label`, in row order.
    fn extract(&self, label: &str) -> Result<Vec<RawAlgorithmRecord>, CplxError>;
}

/// One optional source per family.
#[derive(Default)]
pub struct SourceSet {
    sources: BTreeMap<SourceFamily, Box<dyn RecordSource>>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a source under its own family, replacing any previous one.
    pub fn insert(&mut self, source: impl RecordSource + 'static) -> &mut Self {
        self.sources.insert(source.family(), Box::new(source));
        self
    }

    /// Builder-style variant of [`SourceSet::insert`].
    pub fn with(mut self, source: impl RecordSource + 'static) -> Self {
        self.insert(source);
        self
    }

    pub fn get(&self, family: SourceFamily) -> Option<&dyn RecordSource> {
        self.sources.get(&family).map(|source| source.as_ref())
    }

    pub fn families(&self) -> impl Iterator<Item = SourceFamily> + '_ {
        self.sources.keys().copied()
    }

    /// Extracts from the family's source; a family without a registered
    /// source is a configuration error, not an empty result.
    pub fn extract(
        &self,
        family: SourceFamily,
        label: &str,
    ) -> Result<Vec<RawAlgorithmRecord>, CplxError> {
        let source = self.get(family).ok_or_else(|| {
            CplxError::Config(
                ErrorInfo::new(
                    "cplx_sources.unconfigured",
                    format!("no {family} source configured"),
                )
                .with_context("family", family.as_str())
                .with_context("label", label),
            )
        })?;
        source.extract(label)
    }
}

impl std::fmt::Debug for SourceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceSet")
            .field("families", &self.sources.keys().collect::<Vec<_>>())
            .finish()
    }
}
