use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::guard::PathGuard;
use crate::ioutils::list_files;
use crate::placeholders::PlaceholderTable;

/// Replaces every occurrence of every table key in `content` in one
/// left-to-right scan, preferring the longest key at each position so a
/// short token never matches inside a longer one (`PluginStub` must not
/// fire inside `Plugin_Stub`). Each occurrence is replaced exactly once:
/// substituted output is never re-scanned, so a replacement value that
/// itself contains a token survives intact. Substitution is literal
/// substring replacement, not a template language: an accidental appearance
/// of a token in unrelated content is rewritten too, an accepted limitation
/// of the approach.
pub fn rewrite_content(content: &str, table: &PlaceholderTable) -> String {
    let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    'scan: while !rest.is_empty() {
        for key in &keys {
            if rest.starts_with(key) {
                out.push_str(&table[*key]);
                rest = &rest[key.len()..];
                continue 'scan;
            }
        }
        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None => break,
        }
    }
    out
}

/// Rewrites one file in place.
pub fn rewrite_file(path: &Path, table: &PlaceholderTable) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::RewriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    let rewritten = rewrite_content(&content, table);
    if rewritten != content {
        debug!("Rewriting placeholders in '{}'", path.display());
        std::fs::write(path, rewritten).map_err(|e| Error::RewriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    }
    Ok(())
}

/// Walks every file under `dest_root` and applies the placeholder table to
/// its whole content. Template trees are assumed text-only; a file that is
/// not valid UTF-8 fails the build.
///
/// Applying the same table twice is idempotent only when no replacement
/// value itself contains a table key; a namespace like `PluginStub2` would
/// be rewritten again on a second pass.
pub fn rewrite_tree(
    guard: &PathGuard,
    dest_root: &Path,
    table: &PlaceholderTable,
) -> Result<()> {
    guard.validate(dest_root)?;
    for file in list_files(dest_root)? {
        rewrite_file(&file, table)?;
    }
    Ok(())
}
