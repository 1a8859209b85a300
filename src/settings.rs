use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::scoring::ScoringConfig;
use crate::segmentation::SegmentationConfig;

/// Packing and scoring configuration for a benchmark run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchSettings {
    pub segmentation: SegmentationConfig,
    pub scoring: ScoringConfig,
}

impl BenchSettings {
    /// Load from a JSON file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse settings in {}", path.display()))?
        } else {
            Self::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        self.segmentation
            .validate()
            .context("Invalid segmentation settings")?;
        self.scoring.validate().context("Invalid scoring settings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TermGroup;
    use crate::segmentation::BoundaryPolicy;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("subbench-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = BenchSettings::load(&temp_path("missing")).unwrap();
        assert_eq!(settings, BenchSettings::default());
    }

    #[test]
    fn save_then_load_keeps_policy_and_terms() {
        let path = temp_path("roundtrip");
        let settings = BenchSettings {
            segmentation: SegmentationConfig::punctuation_aware(25),
            scoring: ScoringConfig::balanced()
                .with_terms(vec![TermGroup::new("TSMC", ["台積電", "台积电"])]),
        };

        settings.save(&path).unwrap();
        let loaded = BenchSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, settings);
        assert!(matches!(
            loaded.segmentation.policy,
            BoundaryPolicy::Punctuation { .. }
        ));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_path("partial");
        fs::write(
            &path,
            r#"{"segmentation": {"maxChars": 20, "policy": {"kind": "lengthDuration"}}}"#,
        )
        .unwrap();
        let loaded = BenchSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.segmentation.max_chars, 20);
        assert_eq!(loaded.scoring, ScoringConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = temp_path("invalid");
        fs::write(
            &path,
            r#"{"segmentation": {"maxChars": 0, "policy": {"kind": "lengthDuration"}}}"#,
        )
        .unwrap();
        let result = BenchSettings::load(&path);
        let _ = fs::remove_file(&path);

        assert!(result.is_err());
    }
}
