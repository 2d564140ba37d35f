use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{error, info};

use crate::archive::archive_tree;
use crate::config::BuilderConfig;
use crate::error::{Error, Result};
use crate::features::apply_feature_markers;
use crate::guard::PathGuard;
use crate::ioutils::{copy_manifest, remove_tree, rename_path};
use crate::manifest::select_manifest;
use crate::placeholders::{class_name, derive_placeholders, slugify};
use crate::request::BuildRequest;
use crate::rewrite::rewrite_tree;
use crate::validation::validate_request;

/// Process-wide monotonic counter folded into working-directory names so two
/// concurrent builds of the same plugin name can never race on one path.
static BUILD_SEQ: AtomicU64 = AtomicU64::new(0);

/// The template materialization engine.
///
/// One `build` call owns its working directory for the entire pipeline:
/// manifest selection, copy, feature injection, placeholder rewrite, renames,
/// archive, cleanup. The working directory never outlives the call, on
/// success or failure.
pub struct PluginBuilder<'a> {
    config: &'a BuilderConfig,
    guard: PathGuard,
}

impl<'a> PluginBuilder<'a> {
    pub fn new(config: &'a BuilderConfig) -> Result<Self> {
        let guard = PathGuard::new(&config.sandbox_root)?;
        Ok(Self { config, guard })
    }

    /// Runs one build request end to end and returns the artifact path.
    ///
    /// Validation happens before any filesystem stage. Any later failure
    /// aborts the remaining pipeline and removes the working directory
    /// before the error is returned; no partial artifacts are ever kept.
    pub fn build(&self, request: &BuildRequest) -> Result<PathBuf> {
        validate_request(request)?;

        let template_root = self.config.template_root(request.plugin_type);
        if !template_root.is_dir() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: template_root.display().to_string(),
            });
        }

        let slug = slugify(&request.name);
        let workdir = self.unique_workdir(&slug);
        self.guard.validate(&workdir)?;

        info!(
            "Building plugin '{}' ({}) in '{}'",
            request.name,
            request.plugin_type,
            workdir.display()
        );

        let result = self.materialize(template_root, &workdir, &slug, request);

        // Finally-equivalent: the working directory is removed whether the
        // pipeline succeeded or not.
        match remove_tree(&self.guard, &workdir) {
            Ok(()) => result,
            Err(cleanup_err) => match result {
                Ok(_) => Err(cleanup_err),
                Err(err) => {
                    error!(
                        "Cleanup of '{}' failed after build error: {}",
                        workdir.display(),
                        cleanup_err
                    );
                    Err(err)
                }
            },
        }
    }

    /// Copy, inject, rewrite, rename, archive. Feature injection runs before
    /// the rewriter because injected fragments carry placeholder tokens.
    fn materialize(
        &self,
        template_root: &Path,
        workdir: &Path,
        slug: &str,
        request: &BuildRequest,
    ) -> Result<PathBuf> {
        let manifest = select_manifest(request.include_settings_module);
        copy_manifest(&self.guard, template_root, workdir, &manifest)?;

        apply_feature_markers(workdir, request.include_settings_module)?;

        let table = derive_placeholders(request);
        rewrite_tree(&self.guard, workdir, &table)?;

        self.rename_stub_files(workdir, slug, request)?;

        let artifact = workdir.with_extension("zip");
        archive_tree(&self.guard, workdir, &artifact)?;

        info!("Build artifact written to '{}'", artifact.display());
        Ok(artifact)
    }

    /// The two destination paths whose names embed template tokens: the
    /// entry file takes the slug, the main class file the PascalCase name.
    fn rename_stub_files(
        &self,
        workdir: &Path,
        slug: &str,
        request: &BuildRequest,
    ) -> Result<()> {
        rename_path(
            &self.guard,
            workdir.join(crate::constants::STUB_ENTRY_FILE),
            workdir.join(format!("{slug}.php")),
        )?;
        rename_path(
            &self.guard,
            workdir.join(crate::constants::STUB_CLASS_FILE),
            workdir.join(format!("includes/{}.php", class_name(&request.name))),
        )
    }

    /// `{slug}-{unix_millis}-{seq}` under the sandbox root. The sequence
    /// number makes the name unique by construction within a process; the
    /// timestamp keeps names apart across restarts.
    fn unique_workdir(&self, slug: &str) -> PathBuf {
        let millis = chrono::Utc::now().timestamp_millis();
        let seq = BUILD_SEQ.fetch_add(1, Ordering::Relaxed);
        self.guard.sandbox_root().join(format!("{slug}-{millis}-{seq}"))
    }
}
