//! Test utilities for wasm-bstring

/// Load a JSON fixture from the test fixtures directory.
///
/// `path` is relative to test/fixtures/ (e.g., "cashaddr/valid.json").
pub fn load_fixture(path: &str) -> serde_json::Value {
    let full_path = format!("{}/test/fixtures/{}", env!("CARGO_MANIFEST_DIR"), path);
    let contents = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", full_path, e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", full_path, e))
}

/// Fixture entries as an array, panicking on anything else.
pub fn fixture_cases(path: &str) -> Vec<serde_json::Value> {
    match load_fixture(path) {
        serde_json::Value::Array(cases) => cases,
        other => panic!("Expected an array in {}, got {}", path, other),
    }
}
