use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{Error, Result};
use crate::guard::PathGuard;

/// Zips `dest_root` into `artifact_path`.
///
/// Every subdirectory becomes a directory entry (empty ones included) and
/// every file a deflated file entry, member names relative to `dest_root`
/// with forward slashes. A missing source is a reportable `ArchiveError`,
/// not a filesystem corruption error.
pub fn archive_tree(
    guard: &PathGuard,
    dest_root: &Path,
    artifact_path: &Path,
) -> Result<PathBuf> {
    guard.validate(dest_root)?;
    guard.validate(artifact_path)?;

    if !dest_root.exists() {
        return Err(Error::ArchiveError {
            path: dest_root.display().to_string(),
            reason: "source directory does not exist".to_string(),
        });
    }

    match write_archive(dest_root, artifact_path) {
        Ok(artifact) => {
            debug!("Archived '{}' to '{}'", dest_root.display(), artifact.display());
            Ok(artifact)
        }
        Err(err) => {
            // A failed build must leave nothing behind, including the
            // partially written artifact.
            if artifact_path.exists() {
                if let Err(remove_err) = std::fs::remove_file(artifact_path) {
                    warn!(
                        "Could not remove partial artifact '{}': {}",
                        artifact_path.display(),
                        remove_err
                    );
                }
            }
            Err(err)
        }
    }
}

fn write_archive(dest_root: &Path, artifact_path: &Path) -> Result<PathBuf> {
    let file = std::fs::File::create(artifact_path)?;
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in WalkDir::new(dest_root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::ArchiveError {
            path: dest_root.display().to_string(),
            reason: e.to_string(),
        })?;

        let relative = entry
            .path()
            .strip_prefix(dest_root)
            .map_err(|e| Error::ArchiveError {
                path: entry.path().display().to_string(),
                reason: e.to_string(),
            })?;
        let member = member_name(relative)?;

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{member}/"), options)?;
        } else {
            let content = std::fs::read(entry.path())?;
            zip.start_file(member.as_str(), options)?;
            zip.write_all(&content)?;
        }
    }

    zip.finish()?;
    Ok(artifact_path.to_path_buf())
}

/// Relative path -> zip member name with forward slashes.
fn member_name(relative: &Path) -> Result<String> {
    let parts: Vec<&str> = relative
        .components()
        .map(|c| {
            c.as_os_str().to_str().ok_or_else(|| Error::ArchiveError {
                path: relative.display().to_string(),
                reason: "path contains invalid Unicode".to_string(),
            })
        })
        .collect::<Result<_>>()?;
    Ok(parts.join("/"))
}
