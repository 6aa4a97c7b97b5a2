use std::path::Path;
use tracing::info;

use crate::error::FrobeniusError;
use crate::models::{Config, OutputFormat};

/// Load configuration from the working directory with CLI overrides
pub fn load_config(
    project_root: &Path,
    format: Option<OutputFormat>,
    max_concurrent: Option<usize>,
    stop_on_error: bool,
) -> Result<Config, FrobeniusError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(format, max_concurrent, stop_on_error);

    info!(
        "Configuration loaded: format={}, max_concurrent={}, max_generators={}",
        config.output.format, config.batch.max_concurrent, config.limits.max_generators
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config(temp_dir.path(), None, None, false).unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.limits.max_generators, 25);
    }

    #[test]
    fn test_load_config_with_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("frobenius.toml"),
            r#"
[limits]
max_anchor = 5000

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = load_config(temp_dir.path(), None, None, false).unwrap();

        assert_eq!(config.limits.max_anchor, 5000);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_with_overrides() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("frobenius.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = load_config(temp_dir.path(), Some(OutputFormat::Text), Some(3), true).unwrap();

        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.batch.max_concurrent, 3);
        assert!(config.batch.stop_on_error);
    }

    #[test]
    fn test_load_config_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("frobenius.toml"), "[limits\n").unwrap();

        let result = load_config(temp_dir.path(), None, None, false);
        assert!(matches!(result, Err(FrobeniusError::Config(_))));
    }
}
