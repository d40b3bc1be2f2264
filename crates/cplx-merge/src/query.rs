use crate::results::ResultSet;
use crate::variant::{AlgorithmClass, AlgorithmVariant};

/// Most attractive variant by `(speed, work, span, space)`, earliest first on
/// ties. Falls back to the first variant when none is available.
pub fn best_variant(variants: &[AlgorithmVariant]) -> Option<&AlgorithmVariant> {
    variants
        .iter()
        .filter(|variant| variant.available)
        .min_by_key(|variant| variant.metrics.rank())
        .or_else(|| variants.first())
}

pub fn available_variants<'a>(
    results: &'a ResultSet,
    problem: &str,
    class: AlgorithmClass,
) -> Vec<&'a AlgorithmVariant> {
    results
        .get(problem)
        .map(|result| {
            result
                .variants(class)
                .iter()
                .filter(|variant| variant.available)
                .collect()
        })
        .unwrap_or_default()
}

pub fn variant_by_key<'a>(
    results: &'a ResultSet,
    problem: &str,
    class: AlgorithmClass,
    key: &str,
) -> Option<&'a AlgorithmVariant> {
    results
        .get(problem)?
        .variants(class)
        .iter()
        .find(|variant| variant.key == key)
}
