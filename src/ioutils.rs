use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::guard::PathGuard;

/// Lists every file under `root`. A single file yields itself; a directory
/// yields every file beneath it, directories excluded. Entries are sorted by
/// file name so the order is stable within a call.
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::IoError(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "walk error")
            }))
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Copies a single file, creating parent directories as needed. Failures are
/// wrapped as `CopyError` carrying the offending source path.
pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let source_path = source_path.as_ref();
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(|e| Error::CopyError {
        source_path: source_path.display().to_string(),
        source: e,
    })
}

/// Copies every manifest entry from `template_root` to `dest_root`,
/// preserving relative structure. Directory entries are expanded via
/// [`list_files`]. The first failed copy aborts the whole operation.
pub fn copy_manifest(
    guard: &PathGuard,
    template_root: &Path,
    dest_root: &Path,
    manifest: &[&str],
) -> Result<()> {
    for entry in manifest {
        let source = template_root.join(entry);
        if !source.exists() {
            return Err(Error::CopyError {
                source_path: source.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "manifest entry missing from template",
                ),
            });
        }
        debug!("Copying manifest entry '{}'", source.display());

        for file in list_files(&source)? {
            let relative = file.strip_prefix(template_root).map_err(|_| {
                Error::CopyError {
                    source_path: file.display().to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "file escapes the template root",
                    ),
                }
            })?;
            let dest = dest_root.join(relative);
            guard.validate(&dest)?;
            copy_file(&file, &dest)?;
        }
    }
    Ok(())
}

/// Renames `from` to `to`. Fails when the source is missing or the
/// destination already exists; there is no silent overwrite.
pub fn rename_path<P: AsRef<Path>>(guard: &PathGuard, from: P, to: P) -> Result<()> {
    let from = from.as_ref();
    let to = to.as_ref();

    guard.validate(from)?;
    guard.validate(to)?;

    if !from.exists() {
        return Err(rename_error(from, to, "source does not exist"));
    }
    if to.exists() {
        return Err(rename_error(from, to, "destination already exists"));
    }

    std::fs::rename(from, to).map_err(|e| rename_error(from, to, &e.to_string()))
}

/// Recursively deletes `root`, files first, directories bottom-up. Callers
/// run this on both success and failure paths so partial working directories
/// never leak.
pub fn remove_tree<P: AsRef<Path>>(guard: &PathGuard, root: P) -> Result<()> {
    let root = root.as_ref();
    guard.validate(root)?;

    if !root.exists() {
        return Ok(());
    }

    for entry in WalkDir::new(root).contents_first(true) {
        let entry = entry.map_err(|e| {
            Error::IoError(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "walk error")
            }))
        })?;
        if entry.file_type().is_dir() {
            std::fs::remove_dir(entry.path())?;
        } else {
            std::fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

fn rename_error(from: &Path, to: &Path, reason: &str) -> Error {
    Error::RenameError {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn list_files_on_single_file_yields_itself() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.txt");
        write(&file, "x");
        assert_eq!(list_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn list_files_recurses_and_skips_directories() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("a.txt"), "a");
        write(&dir.path().join("nested/b.txt"), "b");
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let files = list_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn list_files_order_is_stable() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("b.txt"), "b");
        write(&dir.path().join("a.txt"), "a");
        assert_eq!(list_files(dir.path()).unwrap(), list_files(dir.path()).unwrap());
    }

    #[test]
    fn copy_manifest_mirrors_relative_structure() {
        let sandbox = TempDir::new().unwrap();
        let guard = PathGuard::new(sandbox.path()).unwrap();
        let template = sandbox.path().join("template");
        let dest = sandbox.path().join("dest");
        write(&template.join("plugin-stub.php"), "entry");
        write(&template.join("includes/PluginStub.php"), "class");
        write(&template.join("includes/ignored.php"), "no");

        copy_manifest(
            &guard,
            &template,
            &dest,
            &["plugin-stub.php", "includes/PluginStub.php"],
        )
        .unwrap();

        assert_eq!(fs::read_to_string(dest.join("plugin-stub.php")).unwrap(), "entry");
        assert_eq!(
            fs::read_to_string(dest.join("includes/PluginStub.php")).unwrap(),
            "class"
        );
        assert!(!dest.join("includes/ignored.php").exists());
    }

    #[test]
    fn copy_manifest_expands_directory_entries() {
        let sandbox = TempDir::new().unwrap();
        let guard = PathGuard::new(sandbox.path()).unwrap();
        let template = sandbox.path().join("template");
        let dest = sandbox.path().join("dest");
        write(&template.join("src/index.js"), "js");
        write(&template.join("src/admin/page.js"), "admin");

        copy_manifest(&guard, &template, &dest, &["src"]).unwrap();

        assert!(dest.join("src/index.js").exists());
        assert!(dest.join("src/admin/page.js").exists());
    }

    #[test]
    fn rename_refuses_missing_source_and_existing_destination() {
        let sandbox = TempDir::new().unwrap();
        let guard = PathGuard::new(sandbox.path()).unwrap();
        let a = sandbox.path().join("a.txt");
        let b = sandbox.path().join("b.txt");

        assert!(matches!(
            rename_path(&guard, &a, &b),
            Err(Error::RenameError { .. })
        ));

        write(&a, "a");
        write(&b, "b");
        assert!(matches!(
            rename_path(&guard, &a, &b),
            Err(Error::RenameError { .. })
        ));
    }

    #[test]
    fn remove_tree_deletes_nested_directories() {
        let sandbox = TempDir::new().unwrap();
        let guard = PathGuard::new(sandbox.path()).unwrap();
        let root = sandbox.path().join("work");
        write(&root.join("a/b/c.txt"), "c");
        fs::create_dir_all(root.join("empty")).unwrap();

        remove_tree(&guard, &root).unwrap();
        assert!(!root.exists());
    }

    #[test]
    fn remove_tree_on_missing_root_is_a_noop() {
        let sandbox = TempDir::new().unwrap();
        let guard = PathGuard::new(sandbox.path()).unwrap();
        assert!(remove_tree(&guard, &sandbox.path().join("gone")).is_ok());
    }
}
