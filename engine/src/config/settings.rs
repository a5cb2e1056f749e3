// Engine settings, loaded from a JSON file or taken from defaults.
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    /// Path to the scenario workbook (.xlsx).
    pub workbook_path: String,
    /// Scenario opened when none is requested; falls back to the first
    /// non-reserved sheet.
    pub default_scenario: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            workbook_path: "cenarios.xlsx".to_string(),
            default_scenario: None,
        }
    }
}

impl EngineSettings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            EngineError::Config(format!("cannot parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.workbook_path, "cenarios.xlsx");
        assert!(settings.default_scenario.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "workbook_path": "fazenda.xlsx", "default_scenario": "Cenário Atual" }}"#
        )
        .unwrap();

        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.workbook_path, "fazenda.xlsx");
        assert_eq!(settings.default_scenario.as_deref(), Some("Cenário Atual"));
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "workbook_path": "fazenda.xlsx" }}"#).unwrap();

        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.workbook_path, "fazenda.xlsx");
        assert!(settings.default_scenario.is_none());
    }

    #[test]
    fn test_from_file_missing() {
        let result = EngineSettings::from_file("no_such_settings.json");
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
