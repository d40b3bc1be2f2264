use cplx_core::CplxError;
use cplx_sources::{InMemorySource, RecordSource, SchemaOverride, SourceFamily, SourceSchema, SourceSet};

fn quantum_source() -> InMemorySource {
    let mut source = InMemorySource::new(SourceFamily::Quantum, Vec::new());
    source.push_cells(&[(1, "Search"), (4, "oracle"), (13, "Grover"), (27, "O(sqrt(n))")]);
    source.push_cells(&[(1, "Factoring"), (13, "Shor"), (27, "O(n^3)"), (29, "O(n^3 log n)")]);
    source
}

#[test]
fn set_dispatches_by_family() -> Result<(), CplxError> {
    let set = SourceSet::new().with(quantum_source());
    let records = set.extract(SourceFamily::Quantum, "Search")?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].variant, "oracle");
    assert_eq!(records[0].work, "");
    assert_eq!(set.families().collect::<Vec<_>>(), vec![SourceFamily::Quantum]);
    Ok(())
}

#[test]
fn unconfigured_family_is_reported() {
    let set = SourceSet::new().with(quantum_source());
    let err = set.extract(SourceFamily::Parallel, "Search").unwrap_err();
    assert!(matches!(err, CplxError::Config(_)));
    assert_eq!(err.info().code, "cplx_sources.unconfigured");
}

#[test]
fn in_memory_source_validates_its_schema() {
    let mut schema = SourceSchema::for_family(SourceFamily::Quantum);
    schema.problem = schema.name;
    let source = quantum_source().with_schema(schema);
    assert!(matches!(source.extract("Search"), Err(CplxError::Schema(_))));
}

#[test]
fn family_names_accept_legacy_aliases() {
    let families: Vec<SourceFamily> =
        serde_yaml::from_str("[parallel, sheet1, approx, quantum, sequential, approximation]")
            .expect("families");
    assert_eq!(
        families,
        vec![
            SourceFamily::Parallel,
            SourceFamily::Sequential,
            SourceFamily::Approximation,
            SourceFamily::Quantum,
            SourceFamily::Sequential,
            SourceFamily::Approximation,
        ]
    );
}

#[test]
fn schema_override_rejects_unknown_columns() {
    let parsed: Result<SchemaOverride, _> = serde_yaml::from_str("runtime: 3\ncolour: 4\n");
    assert!(parsed.is_err());
    let parsed: SchemaOverride = serde_yaml::from_str("runtime: 3\n").expect("override");
    assert_eq!(parsed.runtime, Some(3));
}
