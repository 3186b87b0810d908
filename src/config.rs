use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET_COLUMN: &str = "weather";
pub const DEFAULT_DATE_COLUMN: &str = "date";
pub const DEFAULT_OUTPUT_DIR: &str = "weather_preprocessing";
pub const OUTPUT_FILE_NAME: &str = "seattle_weather_processed.csv";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;
/// Name of the encoded target column in the processed table, whatever the
/// input target column is called.
pub const OUTPUT_TARGET_COLUMN: &str = "weather";

/// Names of the two columns the transformer treats specially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRoles {
    /// Categorical column that gets label-encoded and placed last
    pub target: String,
    /// Excluded from the features, otherwise untouched
    pub date: String,
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET_COLUMN.to_owned(),
            date: DEFAULT_DATE_COLUMN.to_owned(),
        }
    }
}

impl ColumnRoles {
    pub fn is_reserved(&self, name: &str) -> bool {
        name == self.target || name == self.date
    }
}

/// Everything one pipeline run needs, passed explicitly into
/// [`crate::pipeline::run_pipeline`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub output_file_name: String,
    pub roles: ColumnRoles,
    /// Rows kept in the report preview
    pub preview_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(&executable_dir()),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_file_name: OUTPUT_FILE_NAME.to_owned(),
            roles: ColumnRoles::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl PipelineConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrepError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Final location of the processed file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file_name)
    }
}

/// Raw dataset location relative to `base`: one level up, then
/// `Weather_datasets_raw/seattle-weather.csv`.
pub fn default_input_path(base: &Path) -> PathBuf {
    base.join("..")
        .join("Weather_datasets_raw")
        .join("seattle-weather.csv")
}

/// Directory holding the running executable, or `.` if it cannot be found.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() -> Result<()> {
        let config = PipelineConfig::from_json(r#"{ "output_dir": "out", "preview_rows": 3 }"#)?;
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.preview_rows, 3);
        assert_eq!(config.output_file_name, OUTPUT_FILE_NAME);
        assert_eq!(config.roles, ColumnRoles::default());
        Ok(())
    }

    #[test]
    fn test_config_without_input_uses_executable_default() -> Result<()> {
        let config = PipelineConfig::from_json(r#"{ "output_dir": "out" }"#)?;
        assert_eq!(
            config.input_path,
            default_input_path(&executable_dir())
        );
        assert_eq!(config.input_path, PipelineConfig::default().input_path);
        assert!(config.input_path.is_absolute());
        Ok(())
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let result = PipelineConfig::from_json("{ not json");
        assert!(matches!(result, Err(PrepError::Config(_))));
    }

    #[test]
    fn test_default_input_path_goes_up_one_level() {
        let path = default_input_path(Path::new("/opt/tools/bin"));
        assert_eq!(
            path,
            PathBuf::from("/opt/tools/bin/../Weather_datasets_raw/seattle-weather.csv")
        );
    }

    #[test]
    fn test_output_path_joins_dir_and_file() {
        let config = PipelineConfig {
            output_dir: PathBuf::from("processed"),
            ..Default::default()
        };
        assert_eq!(
            config.output_path(),
            PathBuf::from("processed").join(OUTPUT_FILE_NAME)
        );
    }
}
