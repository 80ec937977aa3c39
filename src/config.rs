use crate::core::TutorialError;
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Searched in order when no explicit config file is given; first hit wins.
pub const CONFIG_PATHS: [&str; 2] = ["/etc/pgtutor/pgtutor.toml", "./pgtutor.toml"];

pub const ENV_PREFIX: &str = "PGTUTOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Utf8,
    Ascii,
}

/// Tutor configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    /// Lesson opened at startup (part number or slug)
    pub lesson: Option<String>,
    /// Directory whose JSON files replace the embedded content
    pub content_dir: Option<PathBuf>,
    pub table_style: TableStyle,
    pub log_level: String,
    pub history: bool,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            lesson: None,
            content_dir: None,
            table_style: TableStyle::Utf8,
            log_level: "warn".to_string(),
            history: true,
        }
    }
}

/// Values given on the command line; they beat every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub lesson: Option<String>,
    pub content_dir: Option<PathBuf>,
    pub table_style: Option<TableStyle>,
    pub log_level: Option<String>,
    pub no_history: bool,
}

impl TutorConfig {
    /// Load configuration with priority: CLI args > ENV > config file > defaults
    pub fn load(overrides: &ConfigOverrides) -> Result<Self, TutorialError> {
        let file = overrides.config_file.clone().or_else(|| {
            CONFIG_PATHS
                .iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
        });
        Self::load_from(file.as_deref(), Some(ENV_PREFIX), overrides)
    }

    /// Same as `load` with an explicit file and environment prefix.
    pub fn load_from(
        file: Option<&Path>,
        env_prefix: Option<&str>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, TutorialError> {
        let mut builder = Config::builder();

        if let Some(path) = file {
            debug!(path = %path.display(), "loading config file");
            builder = builder.add_source(File::from(path));
        }

        if let Some(prefix) = env_prefix {
            builder = builder.add_source(Environment::with_prefix(prefix).try_parsing(true));
        }

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply(overrides);
        Ok(config)
    }

    fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(lesson) = &overrides.lesson {
            self.lesson = Some(lesson.clone());
        }
        if let Some(dir) = &overrides.content_dir {
            self.content_dir = Some(dir.clone());
        }
        if let Some(style) = overrides.table_style {
            self.table_style = style;
        }
        if let Some(level) = &overrides.log_level {
            self.log_level.clone_from(level);
        }
        if overrides.no_history {
            self.history = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = TutorConfig::load_from(None, None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, TutorConfig::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.history);
    }

    #[test]
    fn test_file_values() {
        let file = write_config("lesson = \"3\"\ntable_style = \"ascii\"\nhistory = false\n");
        let config = TutorConfig::load_from(Some(file.path()), None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.lesson.as_deref(), Some("3"));
        assert_eq!(config.table_style, TableStyle::Ascii);
        assert!(!config.history);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = write_config("lesson = \"3\"\nlog_level = \"info\"\n");
        let overrides = ConfigOverrides {
            lesson: Some("5".to_string()),
            table_style: Some(TableStyle::Ascii),
            no_history: true,
            ..ConfigOverrides::default()
        };
        let config = TutorConfig::load_from(Some(file.path()), None, &overrides).unwrap();
        assert_eq!(config.lesson.as_deref(), Some("5"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.table_style, TableStyle::Ascii);
        assert!(!config.history);
    }

    #[test]
    fn test_env_overrides_file() {
        // No other test reads this prefix.
        unsafe {
            std::env::set_var("PGTUTORENVTEST_LESSON", "4");
            std::env::set_var("PGTUTORENVTEST_TABLE_STYLE", "ascii");
        }
        let file = write_config("lesson = \"3\"\nlog_level = \"debug\"\n");
        let config =
            TutorConfig::load_from(Some(file.path()), Some("PGTUTORENVTEST"), &ConfigOverrides::default()).unwrap();
        unsafe {
            std::env::remove_var("PGTUTORENVTEST_LESSON");
            std::env::remove_var("PGTUTORENVTEST_TABLE_STYLE");
        }

        assert_eq!(config.lesson.as_deref(), Some("4"));
        assert_eq!(config.table_style, TableStyle::Ascii);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_value_is_an_error() {
        let file = write_config("table_style = \"sparkly\"\n");
        let result = TutorConfig::load_from(Some(file.path()), None, &ConfigOverrides::default());
        assert!(matches!(result, Err(TutorialError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let result = TutorConfig::load_from(Some(&path), None, &ConfigOverrides::default());
        assert!(result.is_err());
    }
}
