use serde::Serialize;
use tracing::trace;

use crate::rules::{
    COMPILED_RULES, DENSE_EDGE_COUNT, EDGE_WORD, ITERATED_LOG_EXP, ITERATED_LOG_INNER,
    ITERATED_LOG_MARKERS, MATH_DELIMITER, NON_STANDARD_MARKERS, RESIDUAL_MARKERS, SENTINELS,
    VERTEX_COUNT, VERTEX_WORD,
};

/// Reason a notation was not translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "marker", rename_all = "snake_case")]
pub enum Rejection {
    /// Empty text or one of the "no formula" sentinels.
    Sentinel,
    /// Iterated-logarithm notation without an `exp((...))` exponent.
    IteratedLogUnmatched,
    /// A non-standard parameter marker was found before rewriting.
    NonStandardParameter(&'static str),
    /// A residual marker survived the rewrite table.
    Residual(&'static str),
    /// Nothing was left after rewriting.
    Empty,
}

/// Result of translating one notation string, with the rejection reason
/// when no formula was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Canonical expression, when translation succeeded.
    pub formula: Option<String>,
    /// Why the notation was rejected, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

impl Translation {
    fn translated(formula: String) -> Self {
        Self {
            formula: Some(formula),
            rejection: None,
        }
    }

    fn rejected(reason: Rejection) -> Self {
        Self {
            formula: None,
            rejection: Some(reason),
        }
    }
}

/// Converts free-text complexity notation into a canonical calculator
/// expression such as `n log(n, e)` or `e^(sqrt(n))`.
///
/// Returns `None` for notations outside the rule set; callers treat this as
/// "formula unavailable", not as an error.
pub fn translate(notation: &str) -> Option<String> {
    let traced = translate_traced(notation);
    if let Some(rejection) = traced.rejection {
        trace!(notation, ?rejection, "notation not translated");
    }
    traced.formula
}

/// Same as [`translate`] but reports which step rejected the notation.
pub fn translate_traced(notation: &str) -> Translation {
    let trimmed = notation.trim();
    if SENTINELS.contains(&trimmed) {
        return Translation::rejected(Rejection::Sentinel);
    }

    let text: String = trimmed.chars().filter(|c| *c != MATH_DELIMITER).collect();

    if ITERATED_LOG_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
    {
        return translate_iterated_log(&text);
    }

    if let Some(marker) = NON_STANDARD_MARKERS
        .iter()
        .copied()
        .find(|marker| text.contains(*marker))
    {
        return Translation::rejected(Rejection::NonStandardParameter(marker));
    }

    let mut formula = text;
    for (pattern, replacement) in COMPILED_RULES.iter() {
        formula = pattern.replace_all(&formula, *replacement).into_owned();
    }
    let formula = formula.trim();
    let formula = VERTEX_WORD.replace_all(formula, VERTEX_COUNT);
    let formula = EDGE_WORD.replace_all(&formula, DENSE_EDGE_COUNT);

    if let Some(marker) = RESIDUAL_MARKERS
        .iter()
        .copied()
        .find(|marker| formula.contains(*marker))
    {
        return Translation::rejected(Rejection::Residual(marker));
    }

    match formula.trim() {
        "" => Translation::rejected(Rejection::Empty),
        done => Translation::translated(done.to_string()),
    }
}

// The iterated-logarithm form is all-or-nothing: either the exponent is
// found and wrapped in e^(...), or the notation is rejected.
fn translate_iterated_log(text: &str) -> Translation {
    let Some(captures) = ITERATED_LOG_EXP.captures(text) else {
        return Translation::rejected(Rejection::IteratedLogUnmatched);
    };
    let mut inner = captures[1].to_string();
    for (pattern, replacement) in ITERATED_LOG_INNER.iter() {
        inner = pattern.replace_all(&inner, *replacement).into_owned();
    }
    Translation::translated(format!("e^({inner})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_checked_before_delimiters() {
        assert_eq!(
            translate_traced(" derived ").rejection,
            Some(Rejection::Sentinel)
        );
        assert_eq!(translate("$n$").as_deref(), Some("n"));
    }

    #[test]
    fn non_standard_marker_is_reported() {
        let result = translate_traced("O(n^2) under assumption of SETH");
        assert_eq!(result.formula, None);
        assert_eq!(
            result.rejection,
            Some(Rejection::NonStandardParameter("under assumption"))
        );
    }

    #[test]
    fn residual_subscript_is_reported() {
        let result = translate_traced("n^{1+o(1)} \\cdot x_{i}");
        assert_eq!(result.formula, None);
        assert!(matches!(result.rejection, Some(Rejection::Residual(_))));
    }
}
