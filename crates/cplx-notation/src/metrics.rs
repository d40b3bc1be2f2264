use serde::{Deserialize, Serialize};

/// Ordinal tier used for coarse display and sorting, serialized as `1..=3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum PerformanceTier {
    /// Fast runtime or low cost.
    Fast = 1,
    /// Moderate runtime or cost; the default tier.
    #[default]
    Moderate = 2,
    /// Slow runtime or high cost.
    Slow = 3,
}

impl From<PerformanceTier> for u8 {
    fn from(tier: PerformanceTier) -> Self {
        tier as u8
    }
}

impl TryFrom<u8> for PerformanceTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PerformanceTier::Fast),
            2 => Ok(PerformanceTier::Moderate),
            3 => Ok(PerformanceTier::Slow),
            other => Err(format!("performance tier {other} outside 1..=3")),
        }
    }
}

/// Performance tiers attached to every algorithm variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Metrics {
    /// Tier derived from the runtime shape.
    pub speed: PerformanceTier,
    /// Mirrors `speed`.
    pub work: PerformanceTier,
    /// Not derived from text; always moderate.
    pub span: PerformanceTier,
    /// Not derived from text; always moderate.
    pub space: PerformanceTier,
}

impl Metrics {
    /// Sort key ordering variants from most to least attractive.
    pub fn rank(&self) -> (PerformanceTier, PerformanceTier, PerformanceTier, PerformanceTier) {
        (self.speed, self.work, self.span, self.space)
    }
}

/// Marker groups checked in order against the lowercased runtime text; the
/// first group with a hit decides the speed tier.
const SHAPE_TIERS: &[(&[&str], PerformanceTier)] = &[
    (
        &["n log n", "nlog", "m+n", "v^2 log v", "v log v"],
        PerformanceTier::Fast,
    ),
    (&["n^2", "v^2", "n^3", "v^3"], PerformanceTier::Moderate),
    (&["2^n", "e^", "exp", "v^2 e"], PerformanceTier::Slow),
    (&["sqrt(n)", "n/2"], PerformanceTier::Fast),
];

/// Estimates coarse tiers from the untranslated runtime text.
///
/// Approximation algorithms start in the fast tier; a recognised runtime
/// shape overrides that baseline.
pub fn estimate_metrics(runtime: &str, approximation: bool) -> Metrics {
    let lowered = runtime.to_lowercase();
    let baseline = if approximation {
        PerformanceTier::Fast
    } else {
        PerformanceTier::Moderate
    };
    let speed = SHAPE_TIERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| lowered.contains(marker)))
        .map(|(_, tier)| *tier)
        .unwrap_or(baseline);
    Metrics {
        speed,
        work: speed,
        ..Metrics::default()
    }
}
