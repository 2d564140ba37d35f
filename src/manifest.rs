//! Declarative copy manifests.
//!
//! Selection never inspects the template tree: a changed template only
//! changes *what* gets copied, not *whether* it is copied.

/// Template-relative paths copied for every build.
pub const CORE_MANIFEST: &[&str] = &[
    ".github",
    "assets",
    "bin",
    "includes/Assets.php",
    "includes/PluginStub.php",
    "templates",
    ".gitignore",
    "composer.json",
    "phpcs.xml",
    "plugin-stub.php",
    "README.md",
];

/// Template-relative paths copied only when the settings module is included:
/// the front-end source tree plus styling and build tool configs.
pub const SETTINGS_MANIFEST: &[&str] = &[
    "src",
    "includes/Admin",
    "package.json",
    "postcss.config.js",
    "tailwind.config.js",
    "webpack.config.js",
];

/// Returns the ordered list of template-relative paths to copy.
pub fn select_manifest(include_settings_module: bool) -> Vec<&'static str> {
    let mut manifest: Vec<&'static str> = CORE_MANIFEST.to_vec();
    if include_settings_module {
        manifest.extend_from_slice(SETTINGS_MANIFEST);
    }
    manifest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_manifest_is_always_present() {
        let manifest = select_manifest(false);
        assert_eq!(manifest, CORE_MANIFEST.to_vec());
    }

    #[test]
    fn settings_entries_are_appended_in_order() {
        let manifest = select_manifest(true);
        assert_eq!(manifest.len(), CORE_MANIFEST.len() + SETTINGS_MANIFEST.len());
        assert_eq!(&manifest[..CORE_MANIFEST.len()], CORE_MANIFEST);
        assert_eq!(&manifest[CORE_MANIFEST.len()..], SETTINGS_MANIFEST);
    }

    #[test]
    fn manifest_has_no_duplicates() {
        let manifest = select_manifest(true);
        let mut seen = std::collections::HashSet::new();
        assert!(manifest.iter().all(|entry| seen.insert(entry)));
    }
}
