use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// File looked up in the working directory when no other config is given
pub const DEFAULT_CONFIG_FILE: &str = "molecules.json";

/// Options for a run of the command line tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// First letter of the token that ends the input
    pub sentinel: char,
    /// Solve datasets (and assignments within one) on the rayon pool
    pub parallel: bool,
    /// Draw every molecule of a dataset whose result disagrees with the expected output
    pub render_failures: bool,
    /// Wait for Enter after each drawing
    pub pause_between_renders: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sentinel: 'Q',
            parallel: true,
            render_failures: true,
            pause_between_renders: false,
        }
    }
}

impl RunConfig {
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads `path` if it exists, otherwise falls back to the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = RunConfig::from_json(r#"{ "parallel": false }"#).unwrap();
        assert_eq!(
            config,
            RunConfig {
                parallel: false,
                ..RunConfig::default()
            }
        );
    }

    #[test]
    fn test_full_config() {
        let config = RunConfig::from_json(
            r#"{ "sentinel": "Z", "parallel": true, "render_failures": false, "pause_between_renders": true }"#,
        )
        .unwrap();
        assert_eq!(config.sentinel, 'Z');
        assert!(!config.render_failures);
        assert!(config.pause_between_renders);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(matches!(
            RunConfig::from_json(r#"{ "paralel": false }"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = RunConfig::load_or_default("this/file/does/not/exist.json").unwrap();
        assert_eq!(config, RunConfig::default());
    }
}
