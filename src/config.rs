use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::request::PluginType;

/// Engine configuration, built once at startup and passed by reference into
/// [`crate::builder::PluginBuilder`]. There is no ambient or global state in
/// the engine itself.
#[derive(Debug, Clone, Deserialize)]
pub struct BuilderConfig {
    /// Directory every path touched by a build must stay within. Working
    /// directories and artifacts are created directly under it.
    pub sandbox_root: PathBuf,

    /// Template root for container-based plugins.
    pub container_template_root: PathBuf,

    /// Template root for classic plugins.
    pub classic_template_root: PathBuf,
}

impl BuilderConfig {
    pub fn new<P: Into<PathBuf>>(
        sandbox_root: P,
        container_template_root: P,
        classic_template_root: P,
    ) -> Self {
        Self {
            sandbox_root: sandbox_root.into(),
            container_template_root: container_template_root.into(),
            classic_template_root: classic_template_root.into(),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: BuilderConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Other(anyhow::anyhow!("Invalid config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that both template roots exist on disk.
    pub fn validate(&self) -> Result<()> {
        for root in [&self.container_template_root, &self.classic_template_root] {
            if !root.is_dir() {
                return Err(Error::TemplateDoesNotExistsError {
                    template_dir: root.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the template root for the given plugin type.
    pub fn template_root(&self, plugin_type: PluginType) -> &Path {
        match plugin_type {
            PluginType::Classic => &self.classic_template_root,
            PluginType::ContainerBased => &self.container_template_root,
        }
    }
}
