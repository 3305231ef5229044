use std::fs;
use std::path::{Path, PathBuf};

use number_mask::options::MaskOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    expected: String,
    #[serde(flatten)]
    options: MaskOptions,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

fn run_test_case(case: &TestCase) -> Result<(), String> {
    let builder = case
        .options
        .build()
        .map_err(|e| format!("Build error: {e}"))?;
    let result = builder.format();

    if result != case.expected {
        return Err(format!(
            "\n✗ Mismatch for case: {}\nExpected:   \"{}\"\nActual:     \"{}\"",
            case.name, case.expected, result
        ));
    }

    Ok(())
}

#[test]
fn test_mask_cases() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("mask-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

    assert!(!test_suite.cases.is_empty());

    let failures: Vec<String> = test_suite
        .cases
        .iter()
        .filter_map(|case| run_test_case(case).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:{}",
        failures.len(),
        test_suite.cases.len(),
        failures.concat()
    );
}
