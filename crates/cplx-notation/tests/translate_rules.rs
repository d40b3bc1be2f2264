use cplx_notation::{translate, translate_traced, Rejection};

fn tr(input: &str) -> Option<String> {
    translate(input)
}

#[test]
fn sentinels_translate_to_nothing() {
    for input in ["", "-", "?", "derived", "   ", " - "] {
        assert_eq!(tr(input), None, "input {input:?}");
    }
}

#[test]
fn asymptotic_wrappers_are_stripped() {
    assert_eq!(tr("O(n log n)").as_deref(), Some("n log n"));
    assert_eq!(tr("Theta(n^2)").as_deref(), Some("n^2"));
    assert_eq!(tr("Omega(n)").as_deref(), Some("n"));
    assert_eq!(tr("$O(n)$").as_deref(), Some("n"));
}

#[test]
fn logarithms_collapse_to_call_form() {
    assert_eq!(tr("\\log_2\\{n\\}").as_deref(), Some("log(n, 2)"));
    assert_eq!(tr("\\log_2{n}").as_deref(), Some("log(n, 2)"));
    assert_eq!(tr("\\log_2(n)").as_deref(), Some("log(n, 2)"));
    assert_eq!(tr("\\log{n}").as_deref(), Some("log(n, e)"));
    assert_eq!(tr("\\ln(n)").as_deref(), Some("log(n, e)"));
    assert_eq!(tr("ln(n)").as_deref(), Some("log(n, e)"));
    assert_eq!(tr("O(n ln n)").as_deref(), Some("n log(n, e)"));
    assert_eq!(tr("ln n").as_deref(), Some("log(n, e)"));
    assert_eq!(tr("log(n)").as_deref(), Some("log(n, e)"));
    assert_eq!(tr("$O(n \\log n)$").as_deref(), Some("n log(n, e)"));
    assert_eq!(tr("O(V \\log V)").as_deref(), Some("n log(n, e)"));
}

#[test]
fn roots_ceilings_and_exponents() {
    assert_eq!(tr("\\sqrt{n}").as_deref(), Some("sqrt(n)"));
    assert_eq!(tr("O(\\sqrt{N})").as_deref(), Some("sqrt(N)"));
    assert_eq!(tr("\\lceil n/2 \\rceil").as_deref(), Some("ceil( n/2 )"));
    assert_eq!(tr("2^{n}").as_deref(), Some("2^(n)"));
    assert_eq!(tr("O(2^{n/2})").as_deref(), Some("2^(n/2)"));
    assert_eq!(tr("n^\\{3\\}").as_deref(), Some("n^(3)"));
}

#[test]
fn exponentials_normalize() {
    assert_eq!(tr("\\exp{n}").as_deref(), Some("e^(n)"));
    assert_eq!(tr("\\exp(n^{1/3})").as_deref(), Some("e^(n^(1/3))"));
    assert_eq!(tr("exp (n)").as_deref(), Some("e^(n)"));
}

#[test]
fn graph_size_convention() {
    assert_eq!(tr("V").as_deref(), Some("n"));
    assert_eq!(tr("E").as_deref(), Some("n^2"));
    assert_eq!(tr("O(V + E)").as_deref(), Some("n + n^2"));
    assert_eq!(tr("O(VE)").as_deref(), Some("VE"));
}

#[test]
fn whitespace_collapses() {
    assert_eq!(tr("  n   *   m  ").as_deref(), Some("n * m"));
}

#[test]
fn non_standard_parameters_are_rejected() {
    for input in [
        "O(M^a)",
        "r(a) n",
        "T_1 / p",
        "O(TP)",
        "B \\log n",
        "pi(n)",
        "n^2 under assumption",
        "O(p(n))",
    ] {
        assert_eq!(tr(input), None, "input {input:?}");
    }
}

#[test]
fn residual_markup_is_rejected() {
    assert_eq!(tr("n^{1+o(1)}"), None);
    assert_eq!(tr("x_{i} + n"), None);
    assert_eq!(tr("n where n is large"), None);
    assert_eq!(tr("\\tilde{O}(n) under SETH"), None);
}

#[test]
fn iterated_log_is_all_or_nothing() {
    let translated =
        tr("$L_n[1/2, 1] = exp((ln n ln ln n)^(1/2))$").expect("exponent present");
    assert_eq!(translated, "e^(log(n, e) ln log(n, e))^(1/2)");
    assert!(translated.contains("log(n, e)"), "{translated}");
    assert!(!translated.contains("ln n"), "{translated}");

    let rejected = translate_traced("L_n[1/3, 1.923]");
    assert_eq!(rejected.formula, None);
    assert_eq!(rejected.rejection, Some(Rejection::IteratedLogUnmatched));
}

#[test]
fn rejection_reason_is_reported() {
    assert_eq!(translate_traced("?").rejection, Some(Rejection::Sentinel));
    assert_eq!(translate_traced("$$").rejection, Some(Rejection::Empty));
    assert_eq!(
        translate_traced("O(TP)").rejection,
        Some(Rejection::NonStandardParameter("TP"))
    );
    assert_eq!(translate_traced("n^2").rejection, None);
}
