//! Configuration
//!
//! Peer requirements and warning behavior, loaded from TOML.
//!
//! ```toml
//! warn_once = false
//!
//! [[peers]]
//! name = "html-host"
//! requirement = ">=1.0.0"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::helpers::default_config_path;
use crate::peer::{self, DEFAULT_PEER_NAME, PeerGuard, PeerRequirement};

/// One required peer as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    pub name: String,
    pub requirement: String,
}

impl Default for PeerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PEER_NAME.to_string(),
            requirement: ">=1.0.0".to_string(),
        }
    }
}

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Log unmet peers only once per process instead of on every render
    pub warn_once: bool,
    /// Peers the host must provide
    pub peers: Vec<PeerConfig>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            warn_once: false,
            peers: vec![PeerConfig::default()],
        }
    }
}

impl WidgetConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), peers = config.peers.len(), "Loaded widget config");
        Ok(config)
    }

    /// Load `widget-kit.toml` from the platform config directory, or defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No widget config, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Build a guard from the configured peers
    pub fn guard(&self) -> Result<PeerGuard> {
        let requirements = self
            .peers
            .iter()
            .map(|p| PeerRequirement::parse(p.name.as_str(), &p.requirement))
            .collect::<Result<Vec<_>>>()?;
        Ok(PeerGuard::new(requirements).warn_once(self.warn_once))
    }

    /// Build the guard and install it process-wide
    pub fn install(&self) -> Result<()> {
        peer::install_guard(self.guard()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_default_matches_default_guard() {
        let guard = WidgetConfig::default().guard().expect("default config is valid");
        assert_eq!(guard.requirements(), [PeerRequirement::default()].as_slice());
    }

    #[test]
    fn test_parse_full_config() {
        let config = WidgetConfig::from_toml(
            r#"
            warn_once = true

            [[peers]]
            name = "html-host"
            requirement = "^2.1"

            [[peers]]
            name = "css-runtime"
            requirement = ">=3, <5"
            "#,
        )
        .expect("valid config");

        assert!(config.warn_once);
        assert_eq!(config.peers.len(), 2);
        assert_eq!(config.peers[1].name, "css-runtime");

        let guard = config.guard().expect("valid requirements");
        assert_eq!(guard.requirements()[0].requirement.to_string(), "^2.1");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = WidgetConfig::from_toml("warn_once = true").expect("valid config");
        assert!(config.warn_once);
        assert_eq!(config.peers, vec![PeerConfig::default()]);
    }

    #[test]
    fn test_invalid_requirement_is_rejected() {
        let config = WidgetConfig {
            warn_once: false,
            peers: vec![PeerConfig {
                name: "html-host".to_string(),
                requirement: "any newer one".to_string(),
            }],
        };
        let err = config.guard().expect_err("requirement should not parse");
        assert!(matches!(err, Error::InvalidRequirement { ref name, .. } if name == "html-host"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[[peers]]\nname = \"html-host\"\nrequirement = \"=1.2.3\"").expect("write config");

        let config = WidgetConfig::load(file.path()).expect("load config");
        assert!(!config.warn_once);
        assert_eq!(config.peers[0].requirement, "=1.2.3");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = WidgetConfig::load(&dir.path().join("absent.toml")).expect_err("no file");
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = WidgetConfig::from_toml("peers = 3").expect_err("wrong type");
        assert!(matches!(err, Error::TomlDe { .. }));
    }
}
