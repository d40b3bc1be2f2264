//! Every table here is applied in declaration order. Reordering entries
//! changes translator output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Inputs that always mean "no formula recorded".
pub const SENTINELS: &[&str] = &["", "-", "?", "derived"];

/// Inline-math delimiter removed before any other processing.
pub const MATH_DELIMITER: char = '$';

/// Markers of the iterated-logarithm `L_n[...]` notation.
pub const ITERATED_LOG_MARKERS: &[&str] = &["L_n[", "L_n\\["];

/// Markers of runtimes stated under non-standard parameters or conditional
/// assumptions. Any hit rejects the notation before rewriting.
pub const NON_STANDARD_MARKERS: &[&str] = &[
    "M^a",
    "r(a)",
    "T_1",
    "TP",
    "B \\",
    "pi(",
    "under assumption",
    "p(n)",
    "2^{(p(n)}",
];

/// Asymptotic wrappers stripped by the first rewrite rules. Big-O, big-Omega
/// and big-Theta are treated as the same bound.
pub const ASYMPTOTIC_WRAPPERS: &[&str] = &["O", "Omega", "Theta"];

/// Replacement for the whole-word vertex count `V`.
pub const VERTEX_COUNT: &str = "n";

/// Replacement for the whole-word edge count `E`. Every graph is modelled as
/// dense, so `E` grows with the square of the vertex count.
pub const DENSE_EDGE_COUNT: &str = "n^2";

/// Leftovers that make a rewritten formula unsafe to hand out.
pub const RESIDUAL_MARKERS: &[&str] = &["\\", "_{", "under", "assumption", "o(1)", "where"];

/// Ordered `(pattern, replacement)` rewrite table. Brace-group patterns accept
/// both `{x}` and the escaped `\{x\}` spelling.
pub const REWRITE_RULES: &[(&str, &str)] = &[
    // asymptotic wrappers
    (r"O\((.*?)\)", "${1}"),
    (r"Omega\((.*?)\)", "${1}"),
    (r"Theta\((.*?)\)", "${1}"),
    // exponentials
    (r"\\exp\s*\\?\{([^}]+?)\\?\}", "e^(${1})"),
    (r"\\exp\s*\(([^)]+)\)", "e^(${1})"),
    (r"exp\s*\(([^)]+)\)", "e^(${1})"),
    // logarithms
    (r"\\log_2\s*\\?\{([^}]+?)\\?\}", "log(${1}, 2)"),
    (r"\\log_2\s*\(([^)]+)\)", "log(${1}, 2)"),
    (r"\\log\s*\\?\{([^}]+?)\\?\}", "log(${1}, e)"),
    (r"\\log\s*\(([^)]+)\)", "log(${1}, e)"),
    (r"\\ln\s*\\?\{([^}]+?)\\?\}", "log(${1}, e)"),
    (r"\\ln\s*\(([^)]+)\)", "log(${1}, e)"),
    (r"ln\(([^)]+)\)", "log(${1}, e)"),
    (r"\\ln n", "log(n, e)"),
    (r"ln n", "log(n, e)"),
    (r"\\log n", "log(n, e)"),
    (r"log\(n\)", "log(n, e)"),
    (r"\\log V", "log(V, e)"),
    // roots and rounding
    (r"\\sqrt\\?\{([^}]+?)\\?\}", "sqrt(${1})"),
    (r"\\lceil([^\\]+)\\rceil", "ceil(${1})"),
    // exponent groups
    (r"\^\\?\{([^}]+?)\\?\}", "^(${1})"),
    (r"\\\{", "("),
    (r"\\\}", ")"),
    // cleanup
    (r"\\", ""),
    (r"\s+", " "),
];

/// Locates the exponent of the iterated-logarithm form: `exp((inner))`.
pub(crate) static ITERATED_LOG_EXP: Lazy<Regex> = Lazy::new(|| compile(r"exp\(\((.+?)\)\)"));

/// Natural-log rewrites applied inside the iterated-logarithm exponent.
pub(crate) static ITERATED_LOG_INNER: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\\?ln\s+n", "log(n, e)"),
        (r"\(ln n\)", "(log(n, e))"),
        (r"ln\s*n", "log(n, e)"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (compile(pattern), replacement))
    .collect()
});

pub(crate) static COMPILED_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    REWRITE_RULES
        .iter()
        .map(|(pattern, replacement)| (compile(pattern), *replacement))
        .collect()
});

pub(crate) static VERTEX_WORD: Lazy<Regex> = Lazy::new(|| compile(r"\bV\b"));

pub(crate) static EDGE_WORD: Lazy<Regex> = Lazy::new(|| compile(r"\bE\b"));

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants covered by the rule table tests.
    Regex::new(pattern).expect("rule table pattern is a valid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_compiles() {
        assert_eq!(COMPILED_RULES.len(), REWRITE_RULES.len());
        assert_eq!(ITERATED_LOG_INNER.len(), 3);
        assert!(ITERATED_LOG_EXP.is_match("exp((x))"));
        assert!(VERTEX_WORD.is_match("V + E"));
        assert!(EDGE_WORD.is_match("V + E"));
    }

    #[test]
    fn asymptotic_rules_lead_the_table() {
        for (idx, wrapper) in ASYMPTOTIC_WRAPPERS.iter().enumerate() {
            assert!(REWRITE_RULES[idx].0.starts_with(wrapper));
        }
    }
}
