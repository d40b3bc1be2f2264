use std::path::{Path, PathBuf};

use cplx_core::errors::{CplxError, ErrorInfo};
use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::family::SourceFamily;
use crate::record::RawAlgorithmRecord;
use crate::schema::SourceSchema;
use crate::set::RecordSource;

/// Comma-separated table whose first row is a header.
///
/// The file is read on every [`RecordSource::extract`] call, so a missing
/// file only surfaces when a problem actually asks this family for rows.
#[derive(Debug, Clone)]
pub struct CsvSource {
    family: SourceFamily,
    path: PathBuf,
    schema: SourceSchema,
}

impl CsvSource {
    /// Source with the family's stock layout.
    pub fn new(family: SourceFamily, path: impl Into<PathBuf>) -> Self {
        Self::with_schema(family, path, SourceSchema::for_family(family))
    }

    pub fn with_schema(family: SourceFamily, path: impl Into<PathBuf>, schema: SourceSchema) -> Self {
        Self {
            family,
            path: path.into(),
            schema,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> &SourceSchema {
        &self.schema
    }

    fn open_error(&self, err: csv::Error) -> CplxError {
        CplxError::Source(
            ErrorInfo::new("cplx_sources.open", "failed to open source table")
                .with_context("family", self.family.as_str())
                .with_context("path", self.path.display().to_string())
                .with_hint(err.to_string()),
        )
    }
}

impl RecordSource for CsvSource {
    fn family(&self) -> SourceFamily {
        self.family
    }

    fn extract(&self, label: &str) -> Result<Vec<RawAlgorithmRecord>, CplxError> {
        self.schema.validate()?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|err| self.open_error(err))?;
        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (row_idx, result) in reader.records().enumerate() {
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    skipped += 1;
                    warn!(
                        family = %self.family,
                        row = row_idx + 1,
                        error = %err,
                        "skipping malformed source row"
                    );
                    continue;
                }
            };
            let fields: Vec<&str> = row.iter().collect();
            if let Some(record) = self.schema.extract_row(&fields, label) {
                records.push(record);
            }
        }
        debug!(
            family = %self.family,
            path = %self.path.display(),
            label,
            matched = records.len(),
            skipped,
            "scanned source table"
        );
        Ok(records)
    }
}
