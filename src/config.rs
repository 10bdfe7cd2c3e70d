use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub force_placeholder: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            force_placeholder: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".speaker-icons"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.yaml"))
    }

    /// Load an explicit settings file, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    /// Load `~/.speaker-icons/settings.yaml` if there is one, defaults otherwise.
    /// Nothing is written to disk.
    pub fn load_user() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Pick the settings for a run. Without an explicit file or the
    /// user-settings opt-in, no file is read at all.
    pub fn resolve(path: Option<&Path>, user_config: bool) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if user_config => Self::load_user(),
            None => Ok(Config::default()),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config =
            serde_yaml::from_str(contents).context("Failed to parse config file")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            bail!("output_dir must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_write_to_working_directory() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.force_placeholder);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::from_yaml("force_placeholder: true\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.force_placeholder);
    }

    #[test]
    fn test_full_yaml() {
        let config = Config::from_yaml("output_dir: assets/icons\nforce_placeholder: false\n").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("assets/icons"));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let err = Config::from_yaml("output_dir: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("output_dir"));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        assert!(Config::from_yaml("output_dir: [unclosed\n").is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_without_flags_reads_nothing() {
        let config = Config::resolve(None, false).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_prefers_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.yaml");
        fs::write(&path, "force_placeholder: true\n").unwrap();

        let config = Config::resolve(Some(&path), true).unwrap();
        assert!(config.force_placeholder);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "output_dir: out\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
