use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Knobs for one import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Apply known corrections for stock scenario files
    #[serde(default = "default_true")]
    pub apply_scenario_patches: bool,
    /// Extra patch database merged over the built-in one
    #[serde(default)]
    pub patch_file: Option<PathBuf>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { apply_scenario_patches: true, patch_file: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let options: ImportOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ImportOptions::default());
        assert!(options.apply_scenario_patches);
    }

    #[test]
    fn test_patch_file() {
        let options: ImportOptions =
            serde_json::from_str(r#"{ "apply_scenario_patches": false, "patch_file": "fixes.json" }"#).unwrap();
        assert!(!options.apply_scenario_patches);
        assert_eq!(options.patch_file, Some(PathBuf::from("fixes.json")));
    }
}
