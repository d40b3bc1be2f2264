//! Source record extractors for the four source families.
//!
//! Each extractor scans a table and returns the rows whose problem field
//! matches a requested label, mapped through a [`SourceSchema`].

mod family;
mod memory;
mod record;
mod schema;
mod set;
mod table;

pub use family::SourceFamily;
pub use memory::InMemorySource;
pub use record::RawAlgorithmRecord;
pub use schema::{SchemaOverride, SourceSchema, QUANTUM_FLAG_VALUES};
pub use set::{RecordSource, SourceSet};
pub use table::CsvSource;
