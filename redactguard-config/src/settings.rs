//! Mask engine settings: the asterisk-run cap and where patterns come
//! from.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ConfigError;
use crate::validation;

fn default_limit() -> usize {
    redactguard_core::DEFAULT_LIMIT
}

/// Configuration for one masking engine instance.
///
/// Patterns may be given inline (`patterns`), loaded from a
/// newline-delimited file (`pattern_file`), or both — the file's
/// patterns are appended to the inline list. Blank lines in the file
/// are discarded, consistent with the engine's own empty-pattern
/// filtering (spec.md §4.1).
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct MaskSettings {
    /// Maximum number of asterisks emitted per Mask Run. `0` deletes
    /// matched regions entirely.
    #[serde(default = "default_limit")]
    #[validate(range(max = 1_048_576))]
    pub limit: usize,

    /// Inline patterns, given directly in config or via environment
    /// overrides.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Optional newline-delimited pattern file.
    #[serde(default)]
    #[validate(custom(function = validation::validate_pattern_file))]
    pub pattern_file: Option<PathBuf>,
}

impl Default for MaskSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            patterns: Vec::new(),
            pattern_file: None,
        }
    }
}

impl MaskSettings {
    /// Load settings from defaults, an optional
    /// `config/redactguard.yaml`, and `REDACTGUARD_*` environment
    /// overrides.
    pub fn load() -> Result<Self, ConfigError> {
        use figment::providers::{Env, Format, Serialized, Yaml};
        use figment::Figment;
        use std::path::Path;

        let figment = Figment::from(Serialized::defaults(MaskSettings::default()));

        let figment = if Path::new("config/redactguard.yaml").exists() {
            figment.merge(Yaml::file("config/redactguard.yaml"))
        } else {
            figment
        };

        let settings: Self = figment
            .merge(Env::prefixed("REDACTGUARD_").split("__"))
            .extract()
            .map_err(ConfigError::from)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a specific YAML file, for tests or explicit
    /// `--config` flags.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        use figment::providers::{Env, Format, Yaml};
        use figment::Figment;

        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let settings: Self = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("REDACTGUARD_").split("__"))
            .extract()
            .map_err(ConfigError::from)?;

        settings.validate()?;
        Ok(settings)
    }

    /// Resolve the full pattern list: inline patterns followed by the
    /// contents of `pattern_file` (one pattern per line, blank lines
    /// discarded).
    pub fn resolved_patterns(&self) -> Result<Vec<Vec<u8>>, ConfigError> {
        let mut out: Vec<Vec<u8>> = self.patterns.iter().map(|p| p.as_bytes().to_vec()).collect();

        if let Some(path) = &self.pattern_file {
            let contents = fs::read_to_string(path)?;
            out.extend(
                contents
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(|line| line.as_bytes().to_vec()),
            );
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let settings = MaskSettings::default();
        settings.validate().expect("default settings should validate");
        assert_eq!(settings.limit, redactguard_core::DEFAULT_LIMIT);
    }

    #[test]
    fn inline_patterns_resolve_without_a_file() {
        let settings = MaskSettings {
            patterns: vec!["token".into(), "secret".into()],
            ..MaskSettings::default()
        };
        let resolved = settings.resolved_patterns().unwrap();
        assert_eq!(resolved, vec![b"token".to_vec(), b"secret".to_vec()]);
    }

    #[test]
    fn missing_pattern_file_fails_validation() {
        let settings = MaskSettings {
            pattern_file: Some(PathBuf::from("/nonexistent/patterns.txt")),
            ..MaskSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
