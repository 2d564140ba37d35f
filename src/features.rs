use std::path::Path;

use log::debug;
use regex::Regex;

use crate::constants::{
    BUILD_SCRIPT_FILE, INIT_CLASSES_CODE, INIT_CLASSES_MARKER, NODE_DEV_COMMANDS,
    NODE_DEV_COMMANDS_MARKER, NODE_PROD_COMMANDS, NODE_PROD_COMMANDS_BUILD_SH,
    NODE_PROD_COMMANDS_MARKER, README_FILE, REGISTER_ROUTE_CODE, REGISTER_ROUTE_COMMENT,
    REGISTER_ROUTE_MARKER, STUB_CLASS_FILE,
};
use crate::error::{Error, Result};

/// Toggles the settings feature module inside the materialized tree.
///
/// Operates on the main class file's two marker comments and on the
/// feature-conditional command blocks in README and build script. Must run
/// before the content rewriter: injected fragments carry placeholder tokens
/// that still need substitution.
pub fn apply_feature_markers(dest_root: &Path, include_settings: bool) -> Result<()> {
    process_class_markers(&dest_root.join(STUB_CLASS_FILE), include_settings)?;

    replace_conditional_block(
        &dest_root.join(README_FILE),
        NODE_DEV_COMMANDS_MARKER,
        NODE_DEV_COMMANDS,
        include_settings,
    )?;
    replace_conditional_block(
        &dest_root.join(README_FILE),
        NODE_PROD_COMMANDS_MARKER,
        NODE_PROD_COMMANDS,
        include_settings,
    )?;
    replace_conditional_block(
        &dest_root.join(BUILD_SCRIPT_FILE),
        NODE_PROD_COMMANDS_MARKER,
        NODE_PROD_COMMANDS_BUILD_SH,
        include_settings,
    )?;

    Ok(())
}

/// Rewrites the two markers in the main class file.
///
/// With settings included, both markers become wiring code. Without, the
/// route marker turns into an inert comment and the init-classes marker line
/// is deleted outright, leading whitespace and newline included, so the
/// generated file carries no dead marker.
fn process_class_markers(class_file: &Path, include_settings: bool) -> Result<()> {
    let content = read(class_file)?;

    let content = if include_settings {
        debug!("Injecting settings wiring into '{}'", class_file.display());
        content
            .replace(REGISTER_ROUTE_MARKER, REGISTER_ROUTE_CODE)
            .replace(INIT_CLASSES_MARKER, INIT_CLASSES_CODE)
    } else {
        let content = content.replace(REGISTER_ROUTE_MARKER, REGISTER_ROUTE_COMMENT);
        let line_pattern = format!(
            r"(?m)^[ \t]*{}.*\r?\n?",
            regex::escape(INIT_CLASSES_MARKER)
        );
        let re = Regex::new(&line_pattern)
            .map_err(|e| Error::Other(anyhow::anyhow!("Invalid marker pattern: {}", e)))?;
        re.replace_all(&content, "").into_owned()
    };

    write(class_file, &content)
}

/// Replaces a marker token in an auxiliary text file with a command block,
/// or with the empty string when the feature is excluded. Files absent from
/// the manifest selection are skipped.
fn replace_conditional_block(
    path: &Path,
    marker: &str,
    commands: &str,
    include_settings: bool,
) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let replacement = if include_settings { commands } else { "" };
    let content = read(path)?;
    write(path, &content.replace(marker, replacement))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::RewriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn write(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|e| Error::RewriteError {
        path: path.display().to_string(),
        source: e,
    })
}
