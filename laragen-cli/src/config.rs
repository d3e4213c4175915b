//! Configuration for laragen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Command-line flags (highest priority, applied by the caller)
//! 2. Environment variables (`LARAGEN_` prefix)
//! 3. `<base_dir>/laragen.toml`
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # laragen.toml
//! extension = "php"
//! stub_path = "stubs/controller.api.stub"
//! controller_namespace = "App\\Http\\Controllers"
//! root_namespace = "App\\"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name of the per-project configuration file
pub const CONFIG_FILE_NAME: &str = "laragen.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "LARAGEN_";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaragenConfig {
    /// Source file extension, without the dot
    pub extension: String,

    /// Controller stub location, relative to the base directory unless absolute
    pub stub_path: PathBuf,

    /// Value substituted for the `namespace` stub placeholder
    pub controller_namespace: String,

    /// Value substituted for the `rootNamespace` stub placeholder
    pub root_namespace: String,
}

impl Default for LaragenConfig {
    fn default() -> Self {
        Self {
            extension: "php".to_string(),
            stub_path: PathBuf::from("stubs").join("controller.api.stub"),
            controller_namespace: "App\\Http\\Controllers".to_string(),
            root_namespace: "App\\".to_string(),
        }
    }
}

impl LaragenConfig {
    /// Load configuration for a project rooted at `base_dir`
    ///
    /// A missing `laragen.toml` is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an environment override has an invalid value.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let config_file = base_dir.join(CONFIG_FILE_NAME);
        tracing::debug!(path = %config_file.display(), "loading configuration");

        Self::figment(&config_file)
            .extract()
            .map_err(|e| Box::new(e).into())
    }

    /// Build the layered figment without extracting it
    #[must_use]
    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Override the stub location
    #[must_use]
    pub fn with_stub_path(mut self, stub_path: impl Into<PathBuf>) -> Self {
        self.stub_path = stub_path.into();
        self
    }

    /// Resolve the stub location against the base directory
    #[must_use]
    pub fn resolve_stub_path(&self, base_dir: &Path) -> PathBuf {
        if self.stub_path.is_absolute() {
            self.stub_path.clone()
        } else {
            base_dir.join(&self.stub_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = LaragenConfig::default();
        assert_eq!(config.extension, "php");
        assert_eq!(config.stub_path, Path::new("stubs/controller.api.stub"));
        assert_eq!(config.controller_namespace, "App\\Http\\Controllers");
        assert_eq!(config.root_namespace, "App\\");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = LaragenConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, LaragenConfig::default());
    }

    #[test]
    fn test_load_merges_file() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "extension = \"inc\"\nstub_path = \"templates/api.stub\"\n",
        )
        .unwrap();

        let config = LaragenConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.extension, "inc");
        assert_eq!(config.stub_path, Path::new("templates/api.stub"));
        assert_eq!(config.root_namespace, "App\\");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "extension = [1, 2]\n").unwrap();

        let result = LaragenConfig::load(temp_dir.path());
        assert!(matches!(result, Err(crate::ScaffoldError::Config(_))));
    }

    #[test]
    fn test_resolve_stub_path() {
        let config = LaragenConfig::default();
        assert_eq!(
            config.resolve_stub_path(Path::new("/srv/app")),
            Path::new("/srv/app/stubs/controller.api.stub")
        );

        let config = config.with_stub_path("/opt/stubs/api.stub");
        assert_eq!(
            config.resolve_stub_path(Path::new("/srv/app")),
            Path::new("/opt/stubs/api.stub")
        );
    }
}
