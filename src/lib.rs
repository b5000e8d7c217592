//! Shared helpers for the workspace-level integration tests.

use serde::Deserialize;

/// Golden values for the area and Fibonacci calculators.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub areas: Vec<AreaEntry>,
    pub fibonacci: Vec<FibEntry>,
}

/// One expected area.
#[derive(Debug, Deserialize)]
pub struct AreaEntry {
    #[serde(flatten)]
    pub shape: ypp_math::Shape,
    pub area: f64,
}

/// One expected Fibonacci value. `fib` is absent when F(n) overflows u64.
#[derive(Debug, Deserialize)]
pub struct FibEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<u64>,
}

/// Load `tests/testdata/math_golden.json`.
pub fn load_golden_data() -> GoldenData {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/math_golden.json");
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}
