use super::types::ResponseSet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a response set from a file
///
/// Files ending in `.json` are read as JSON; anything else is read as YAML.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The contents do not describe a response set
pub fn load_responses(path: &Path) -> Result<ResponseSet> {
    if !path.exists() {
        anyhow::bail!("Responses file not found at {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses file at {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let responses = if is_json {
        serde_json::from_str(&content).with_context(|| {
            format!("Failed to parse responses: invalid JSON in {}", path.display())
        })?
    } else {
        serde_saphyr::from_str(&content).with_context(|| {
            format!("Failed to parse responses: invalid YAML in {}", path.display())
        })?
    };

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Dimension, TechnicalAnswer};
    use crate::scoring::{calculate_report, ScoringConfig};
    use std::env;

    #[test]
    fn test_load_missing_file_errors() {
        let temp_path = env::temp_dir().join("career_compass_test_missing.json");
        let _ = fs::remove_file(&temp_path);

        let err = load_responses(&temp_path).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_json_responses() {
        let temp_path = env::temp_dir().join("career_compass_test_load.json");
        fs::write(
            &temp_path,
            r#"{
                "psychometric": {"0": 4, "1": 2},
                "technical": {"0": "1", "1": 2, "2": "x"},
                "wiscar": {"S": {"0": 5}}
            }"#,
        )
        .unwrap();

        let responses = load_responses(&temp_path).unwrap();
        assert_eq!(responses.psychometric[&1], 2);
        assert_eq!(responses.technical.len(), 3);
        assert_eq!(responses.technical[&1], TechnicalAnswer::Index(2));
        assert_eq!(responses.technical[&2].option_index(), None);
        assert_eq!(responses.wiscar[&Dimension::Skill][&0], 5);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_non_index_technical_answers_still_scores() {
        let temp_path = env::temp_dir().join("career_compass_test_malformed.json");
        fs::write(&temp_path, r#"{"technical": {"0": "1", "1": null}}"#).unwrap();

        let responses = load_responses(&temp_path).unwrap();
        assert_eq!(responses.technical.len(), 2);
        assert_eq!(responses.technical[&1].option_index(), None);

        let report = calculate_report(&responses, &ScoringConfig::default());
        assert!((report.technical_score - 50.0).abs() < 1e-9);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_float_and_bool_technical_answers() {
        let temp_path = env::temp_dir().join("career_compass_test_float_bool.json");
        fs::write(
            &temp_path,
            r#"{"technical": {"0": "1", "1": 1.5, "2": true, "3": 2}}"#,
        )
        .unwrap();

        let responses = load_responses(&temp_path).unwrap();
        let report = calculate_report(&responses, &ScoringConfig::default());
        // 0 and 3 match the key [1, 2, 1, 2, ...]; 1 and 2 count as incorrect
        assert!((report.technical_score - 50.0).abs() < 1e-9);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_yaml_responses() {
        let temp_path = env::temp_dir().join("career_compass_test_load.yaml");
        fs::write(
            &temp_path,
            r#"
psychometric:
  0: 5
  1: 3
wiscar:
  W:
    0: 4
    1: 4
  R:
    0: 1
"#,
        )
        .unwrap();

        let responses = load_responses(&temp_path).unwrap();
        assert_eq!(responses.psychometric.len(), 2);
        assert!(responses.technical.is_empty());
        assert_eq!(responses.wiscar[&Dimension::Will].len(), 2);
        assert_eq!(responses.wiscar[&Dimension::RealWorld][&0], 1);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let temp_path = env::temp_dir().join("career_compass_test_invalid.json");
        fs::write(&temp_path, "{ not json").unwrap();

        let err = load_responses(&temp_path).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
        assert!(err.to_string().contains("career_compass_test_invalid.json"));

        let _ = fs::remove_file(&temp_path);
    }
}
