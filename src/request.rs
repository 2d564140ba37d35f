use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which stub template tree a build materializes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PluginType {
    /// Single-file plugin without the dependency container.
    Classic,
    /// Container-based plugin with service providers.
    ContainerBased,
}

impl Default for PluginType {
    fn default() -> Self {
        PluginType::ContainerBased
    }
}

impl Display for PluginType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PluginType::Classic => "classic",
            PluginType::ContainerBased => "container_based",
        };
        write!(f, "{s}")
    }
}

/// A single plugin build request, supplied by the calling collaborator.
///
/// All free-text fields are optional; defaults from
/// [`crate::constants::defaults`] fill the placeholder table when a field is
/// absent. The request must pass [`crate::validation::validate_request`]
/// before it reaches any filesystem stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRequest {
    /// Human-readable plugin name, e.g. "My Cool Plugin".
    pub name: String,

    /// PHP namespace, e.g. "Acme" or "Acme/Tools". Forward slashes are
    /// preserved verbatim for multi-segment namespaces.
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub author_email: Option<String>,

    #[serde(default)]
    pub author_uri: Option<String>,

    /// Comma-separated slugs of plugins the generated plugin requires.
    #[serde(default)]
    pub requires: Option<String>,

    #[serde(default)]
    pub plugin_type: PluginType,

    /// Whether to copy the settings source tree and wire up the settings
    /// REST controller and admin page.
    #[serde(default)]
    pub include_settings_module: bool,
}

impl BuildRequest {
    /// Creates a request with only a name set, everything else defaulted.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            description: None,
            license: None,
            uri: None,
            author_name: None,
            author_email: None,
            author_uri: None,
            requires: None,
            plugin_type: PluginType::default(),
            include_settings_module: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_type_deserializes_from_snake_case() {
        let t: PluginType = serde_json::from_str(r#""container_based""#).unwrap();
        assert_eq!(t, PluginType::ContainerBased);
        let t: PluginType = serde_json::from_str(r#""classic""#).unwrap();
        assert_eq!(t, PluginType::Classic);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: BuildRequest =
            serde_json::from_str(r#"{"name": "My Plugin"}"#).unwrap();
        assert_eq!(request.name, "My Plugin");
        assert_eq!(request.plugin_type, PluginType::ContainerBased);
        assert!(!request.include_settings_module);
        assert!(request.namespace.is_none());
    }
}
