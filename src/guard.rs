use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Validates that every path the engine touches stays inside the sandbox
/// root. User-controlled plugin names feed into destination directory names,
/// so every read, write, copy, rename, delete and archive operation on an
/// externally influenced path goes through [`PathGuard::validate`] first.
#[derive(Debug, Clone)]
pub struct PathGuard {
    sandbox_root: PathBuf,
}

impl PathGuard {
    /// Creates a guard for the given sandbox root. The root must exist so it
    /// can be resolved to a canonical form once, up front.
    pub fn new<P: AsRef<Path>>(sandbox_root: P) -> Result<Self> {
        let sandbox_root = std::fs::canonicalize(sandbox_root.as_ref())?;
        Ok(Self { sandbox_root })
    }

    /// Returns the canonical sandbox root.
    pub fn sandbox_root(&self) -> &Path {
        &self.sandbox_root
    }

    /// Pure check: fails when the path contains a null byte, a `..` segment,
    /// or resolves outside the sandbox root. The path itself does not have
    /// to exist; containment is checked against its deepest existing
    /// ancestor, which is sound because `..` segments are already rejected.
    pub fn validate<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if path.as_os_str().as_encoded_bytes().contains(&0) {
            return Err(self.security_error(path, "path contains a null byte"));
        }

        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(self.security_error(path, "path contains a '..' segment"));
        }

        let resolved = self.resolve_existing_ancestor(path)?;
        if !resolved.starts_with(&self.sandbox_root) {
            return Err(self.security_error(path, "path is outside the sandbox root"));
        }

        Ok(())
    }

    /// Canonicalizes the deepest existing ancestor of `path`. Relative paths
    /// are anchored at the sandbox root before resolution.
    fn resolve_existing_ancestor(&self, path: &Path) -> Result<PathBuf> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.sandbox_root.join(path)
        };

        let mut candidate = absolute.as_path();
        loop {
            if candidate.exists() {
                return std::fs::canonicalize(candidate).map_err(Error::IoError);
            }
            match candidate.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => candidate = parent,
                _ => return Ok(absolute.clone()),
            }
        }
    }

    fn security_error(&self, path: &Path, reason: &str) -> Error {
        Error::PathSecurityError {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn guard() -> (TempDir, PathGuard) {
        let dir = TempDir::new().unwrap();
        let guard = PathGuard::new(dir.path()).unwrap();
        (dir, guard)
    }

    #[test]
    fn accepts_path_inside_sandbox() {
        let (dir, guard) = guard();
        assert!(guard.validate(dir.path().join("my-plugin/file.php")).is_ok());
    }

    #[test]
    fn accepts_relative_path() {
        let (_dir, guard) = guard();
        assert!(guard.validate("my-plugin/includes/Assets.php").is_ok());
    }

    #[test]
    fn rejects_parent_dir_segment() {
        let (dir, guard) = guard();
        let err = guard.validate(dir.path().join("../escape")).unwrap_err();
        assert!(matches!(err, Error::PathSecurityError { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn rejects_embedded_null_byte() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let (_dir, guard) = guard();
        let path = PathBuf::from(OsString::from_vec(b"my\0plugin".to_vec()));
        let err = guard.validate(&path).unwrap_err();
        assert!(matches!(err, Error::PathSecurityError { .. }));
    }

    #[test]
    fn rejects_absolute_path_outside_sandbox() {
        let (_dir, guard) = guard();
        let outside = TempDir::new().unwrap();
        let err = guard.validate(outside.path().join("file.txt")).unwrap_err();
        assert!(matches!(err, Error::PathSecurityError { .. }));
    }

    #[test]
    fn validate_is_pure() {
        let (dir, guard) = guard();
        let target = dir.path().join("not-created-yet");
        guard.validate(&target).unwrap();
        assert!(!target.exists());
    }
}
