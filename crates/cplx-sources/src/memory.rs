use cplx_core::errors::CplxError;

use crate::family::SourceFamily;
use crate::record::RawAlgorithmRecord;
use crate::schema::SourceSchema;
use crate::set::RecordSource;

/// Data rows held in memory, without a header row.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    family: SourceFamily,
    schema: SourceSchema,
    rows: Vec<Vec<String>>,
}

impl InMemorySource {
    pub fn new(family: SourceFamily, rows: Vec<Vec<String>>) -> Self {
        Self {
            family,
            schema: SourceSchema::for_family(family),
            rows,
        }
    }

    pub fn with_schema(mut self, schema: SourceSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Appends a row built from `(column, value)` cells; unset columns are empty.
    pub fn push_cells(&mut self, cells: &[(usize, &str)]) {
        let width = cells.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0);
        let mut row = vec![String::new(); width];
        for (idx, value) in cells {
            row[*idx] = (*value).to_string();
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordSource for InMemorySource {
    fn family(&self) -> SourceFamily {
        self.family
    }

    fn extract(&self, label: &str) -> Result<Vec<RawAlgorithmRecord>, CplxError> {
        self.schema.validate()?;
        Ok(self
            .rows
            .iter()
            .filter_map(|row| self.schema.extract_row(row, label))
            .collect())
    }
}
