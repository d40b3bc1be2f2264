use cplx_core::errors::{CplxError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "data/parallel.csv")
        .with_context("family", "parallel")
}

#[test]
fn source_error_surface() {
    let err = CplxError::Source(sample_info("cplx_sources.open", "file missing"));
    assert_eq!(err.info().code, "cplx_sources.open");
    assert!(err.info().context.contains_key("path"));
}

#[test]
fn config_error_surface() {
    let err = CplxError::Config(sample_info("cplx_config.parse", "bad yaml"));
    assert_eq!(err.info().code, "cplx_config.parse");
    assert!(err.info().context.contains_key("family"));
}

#[test]
fn context_is_added_to_any_family() {
    let err = CplxError::Io(ErrorInfo::new("cplx_merge.write", "denied"))
        .with_context("problem", "Database Search");
    assert_eq!(
        err.info().context.get("problem").map(String::as_str),
        Some("Database Search")
    );
    assert!(matches!(err, CplxError::Io(_)));
}

#[test]
fn display_includes_code_context_and_hint() {
    let err = CplxError::Schema(
        ErrorInfo::new("cplx_sources.schema", "column overlap")
            .with_context("column", "17")
            .with_hint("check the source layout"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("schema error: column overlap (code: cplx_sources.schema)"));
    assert!(rendered.contains("column=17"));
    assert!(rendered.contains("hint: check the source layout"));
}

#[test]
fn error_round_trips_through_json() {
    let err = CplxError::Serde(sample_info("json_deserialize", "eof"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: CplxError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
