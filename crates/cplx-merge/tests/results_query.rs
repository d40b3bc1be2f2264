use std::fs;

use cplx_core::CplxError;
use cplx_merge::{
    available_variants, best_variant, build_variant, read_results, result_digest, variant_by_key,
    write_results, AlgorithmClass, AlgorithmVariant, OutputFormat, ProblemResult, ResultSet,
};
use cplx_sources::RawAlgorithmRecord;

fn classical_batch() -> Vec<AlgorithmVariant> {
    let records = [
        RawAlgorithmRecord::new("Trial division", "O(2^n)", "sheet1"),
        RawAlgorithmRecord::new("Unknown", "?", "sheet1"),
        RawAlgorithmRecord::new("Number field sieve", "O(n^2)", "sheet1"),
        RawAlgorithmRecord::new("Pollard rho", "O(n^3)", "sheet1"),
    ];
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| build_variant(record, index, AlgorithmClass::Classical))
        .collect()
}

fn quantum_batch() -> Vec<AlgorithmVariant> {
    vec![build_variant(
        RawAlgorithmRecord::new("Shor", "O(n^3)", "quantum").with_work("O(n^3 log n)"),
        0,
        AlgorithmClass::Quantum,
    )]
}

fn sample() -> ResultSet {
    let mut results = ResultSet::new();
    let result = ProblemResult::new(classical_batch(), quantum_batch()).expect("both lists");
    results.insert("Integer Factorization", result);
    results
}

#[test]
fn problem_result_requires_both_lists() {
    assert!(ProblemResult::new(classical_batch(), Vec::new()).is_none());
    assert!(ProblemResult::new(Vec::new(), quantum_batch()).is_none());
}

#[test]
fn best_prefers_lowest_tier_and_earliest_tie() {
    let batch = classical_batch();
    let best = best_variant(&batch).expect("non-empty");
    assert_eq!(best.key, "number-field-sieve-2");
}

#[test]
fn best_falls_back_to_first_when_nothing_is_available() {
    let batch: Vec<AlgorithmVariant> = ["?", "-"]
        .into_iter()
        .enumerate()
        .map(|(index, runtime)| {
            build_variant(
                RawAlgorithmRecord::new(format!("algo {index}"), runtime, "sheet1"),
                index,
                AlgorithmClass::Classical,
            )
        })
        .collect();
    assert_eq!(best_variant(&batch).map(|v| v.key.as_str()), Some("algo-0-0"));
    assert!(best_variant(&[]).is_none());
}

#[test]
fn lookups_by_problem_class_and_key() {
    let results = sample();
    let available = available_variants(&results, "Integer Factorization", AlgorithmClass::Classical);
    assert_eq!(available.len(), 3);
    assert!(available.iter().all(|v| v.available));
    assert!(available_variants(&results, "Sorting", AlgorithmClass::Classical).is_empty());

    let shor = variant_by_key(&results, "Integer Factorization", AlgorithmClass::Quantum, "shor-0")
        .expect("shor");
    assert_eq!(shor.work_formula.as_deref(), Some("n^3 log n"));
    assert!(variant_by_key(&results, "Integer Factorization", AlgorithmClass::Classical, "shor-0").is_none());
}

#[test]
fn results_round_trip_through_both_formats() -> Result<(), CplxError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let results = sample();
    let pretty = dir.path().join("nested/pretty.json");
    let canonical = dir.path().join("canonical.json");
    write_results(&pretty, &results, OutputFormat::Pretty)?;
    write_results(&canonical, &results, OutputFormat::Canonical)?;

    let pretty_text = fs::read_to_string(&pretty).expect("pretty text");
    assert!(pretty_text.contains("\n  \"Integer Factorization\""));
    assert!(pretty_text.contains("\"runtimeFormula\""));
    let canonical_text = fs::read_to_string(&canonical).expect("canonical text");
    assert!(!canonical_text.contains('\n'));

    assert_eq!(read_results(&pretty)?, results);
    assert_eq!(read_results(&canonical)?, results);
    Ok(())
}

#[test]
fn digest_ignores_output_format() -> Result<(), CplxError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let results = sample();
    let path = dir.path().join("results.json");
    write_results(&path, &results, OutputFormat::Pretty)?;
    let reread = read_results(&path)?;
    let digest = result_digest(&results)?;
    assert_eq!(digest.len(), 64);
    assert_eq!(digest, result_digest(&reread)?);
    assert_ne!(digest, result_digest(&ResultSet::new())?);
    Ok(())
}

#[test]
fn documents_with_an_empty_class_list_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty_lists.json");
    fs::write(&path, br#"{"X":{"classical":[],"quantum":[]}}"#).expect("write");
    let err = read_results(&path).unwrap_err();
    assert!(matches!(err, CplxError::Serde(_)));

    let mut results = sample();
    let mut value = serde_json::to_value(&results).expect("json");
    value["Integer Factorization"]["quantum"] = serde_json::json!([]);
    assert!(serde_json::from_value::<ResultSet>(value).is_err());

    results.insert("Copy", sample().get("Integer Factorization").cloned().expect("present"));
    let value = serde_json::to_value(&results).expect("json");
    assert_eq!(serde_json::from_value::<ResultSet>(value).expect("valid"), results);
}

#[test]
fn unreadable_results_report_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.json");
    fs::write(&path, b"not json").expect("write");
    let err = read_results(&path).unwrap_err();
    assert!(matches!(err, CplxError::Serde(_)));
    assert!(err.info().context.contains_key("path"));
    let err = read_results(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CplxError::Io(_)));
}
