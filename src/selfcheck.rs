//! Regression battery for the scanning pipeline.
//!
//! A fixed list of inputs with known-good coordinate counts, run through the
//! full pipeline on demand. The harness reports pass/fail per case together
//! with actual vs. expected counts; it never asserts or panics, so it is
//! safe to run inside a live process (the CLI exposes it as `--self-check`).

use crate::scan;

const CASES: &[(&str, usize, &str)] = &[
    (
        "Coordinates: [60.1691, 24.9522], [60.1669, 24.9525], [60.1678, 24.9590]",
        3,
        "bracketed Helsinki pairs",
    ),
    (
        "This route is 10,000 meters long and goes through 1,000 different places",
        0,
        "round counts in prose are not coordinates",
    ),
    (
        "Visit these locations: (40.7128, -74.0060) and (40.7589, -73.9851)",
        2,
        "parenthesized pairs with negative longitude",
    ),
    (
        "Here is a wonderful walk through the old town (around 10,000 steps). \
         [60.1691, 24.9522], [60.1669, 24.9525], [60.1678, 24.9590]",
        3,
        "step count adjacent to bracketed pairs is ignored",
    ),
    ("A pleasant stroll along the waterfront with no stops.", 0, "no numeric pairs at all"),
    ("Helsinki city centre sits at 60.1691N, 24.9522E.", 1, "compass-suffixed pair"),
    (
        "Start at [60.1691, 24.9522] and loop back to [60.1691, 24.9522].",
        1,
        "verbatim repeats collapse to one point",
    ),
    ("[91.5, 24.9522] and (60.1691, 200.123)", 0, "out-of-range pairs are rejected"),
    ("roughly (60.5, 24.8) if you squint", 1, "low-precision pair inside the temperate band"),
    ("the grid cell (45, 120) is free", 0, "low-precision integer pair is rejected"),
];

/// Outcome of a single battery case.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub description: &'static str,
    pub input: &'static str,
    pub expected: usize,
    pub actual: usize,
    pub passed: bool,
}

/// Outcome of a full battery run.
#[derive(Debug, Clone)]
pub struct SelfCheckReport {
    pub cases: Vec<CaseOutcome>,
}

impl SelfCheckReport {
    /// True when every case produced its expected count.
    pub fn all_passed(&self) -> bool {
        self.cases.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.cases.iter().filter(|c| !c.passed)
    }
}

/// Run the full battery and report per-case outcomes.
pub fn run() -> SelfCheckReport {
    let cases = CASES
        .iter()
        .map(|&(input, expected, description)| {
            let actual = scan(input).coordinates.len();
            CaseOutcome { description, input, expected, actual, passed: actual == expected }
        })
        .collect();

    SelfCheckReport { cases }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_is_green() {
        let report = run();
        let failed: Vec<_> = report.failures().collect();
        assert!(failed.is_empty(), "failing self-check cases: {failed:#?}");
        assert!(report.all_passed());
    }

    #[test]
    fn report_covers_every_case() {
        assert_eq!(run().cases.len(), CASES.len());
    }
}
