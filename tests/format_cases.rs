#[cfg(test)]
mod tests {
    use locale_number_format::types::{FormatSpec, PluralCategory};
    use locale_number_format::{SpecCatalog, format_number};
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Deserialize)]
    struct TestCase {
        spec: String,
        value: f64,
        #[serde(default)]
        plural: Option<PluralCategory>,
        expected: String,
    }

    #[derive(Debug, Deserialize)]
    struct TestCases {
        specs: toml::Table,
        cases: Vec<TestCase>,
    }

    fn run_test_case(case: &TestCase, spec: &FormatSpec) -> Result<(), String> {
        let result = match case.plural {
            Some(category) => {
                let selector = move |_: f64| category;
                format_number(case.value, spec, Some(&selector))
            }
            None => format_number(case.value, spec, None),
        }
        .map_err(|e| format!("Format error: {e}"))?;

        if result != case.expected {
            return Err(format!(
                "\n✗ Mismatch for value: {}\nSpec:       \"{}\"\nExpected:   \"{}\"\nActual:     \"{}\"",
                case.value, case.spec, case.expected, result
            ));
        }

        Ok(())
    }

    #[test]
    fn test_format_cases() {
        let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("format_cases.toml");

        let toml_content = fs::read_to_string(&toml_path)
            .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

        let test_suite: TestCases = toml::from_str(&toml_content)
            .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

        let catalog = SpecCatalog::from_toml_str(&toml::to_string(&test_suite.specs).unwrap())
            .unwrap_or_else(|e| panic!("Failed to load specs: {e}"));

        let mut failures = Vec::new();
        for (i, case) in test_suite.cases.iter().enumerate() {
            let Some(spec) = catalog.get(&case.spec) else {
                failures.push(format!("\n[Case {}] unknown spec '{}'", i + 1, case.spec));
                continue;
            };
            if let Err(msg) = run_test_case(case, spec) {
                failures.push(format!("\n[Case {}] {}", i + 1, msg));
            }
        }

        assert!(
            failures.is_empty(),
            "{} of {} cases failed:{}",
            failures.len(),
            test_suite.cases.len(),
            failures.concat()
        );
    }
}
