//! Script store
//!
//! One confined directory holds every generated artifact. Writes use
//! collision-resistant names so concurrent requests never clash; reads
//! resolve the caller's relative path (lexically, then through symlinks)
//! and refuse anything that lands outside the root.

use crate::descriptor::{ScriptDescriptor, ScriptLanguage};
use scriptforge_foundation::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Fixed prefix for generated artifact names
const ARTIFACT_PREFIX: &str = "task";

/// The confined directory
#[derive(Debug, Clone)]
pub struct ScriptStore {
    root: PathBuf,
}

impl ScriptStore {
    /// Open the store, creating the directory if needed.
    ///
    /// The root is canonicalized once so every later confinement check
    /// compares against a symlink-free base.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        let root = root.canonicalize()?;
        Ok(Self { root })
    }

    /// The canonical confined directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `task_<random hex>.<ext>` - unique with overwhelming probability and
    /// unpredictable to external callers.
    fn artifact_name(language: ScriptLanguage) -> String {
        format!(
            "{}_{}.{}",
            ARTIFACT_PREFIX,
            Uuid::new_v4().simple(),
            language.extension()
        )
    }

    /// Write the descriptor's code to a fresh artifact and return its path.
    ///
    /// The code text is written verbatim. Bash artifacts are marked
    /// executable for owner, group, and others; python artifacts are run
    /// through an explicit interpreter and get no permission change.
    pub fn materialize(&self, descriptor: &ScriptDescriptor) -> Result<PathBuf> {
        let language = descriptor.language();
        let path = self.root.join(Self::artifact_name(language));

        fs::write(&path, &descriptor.code)?;

        if language == ScriptLanguage::Bash {
            mark_executable(&path)?;
        }

        tracing::debug!(path = %path.display(), "Materialized script");
        Ok(path)
    }

    /// Read a file back from the confined directory.
    ///
    /// The relative path is joined to the root and normalized lexically,
    /// then canonicalized so `..` segments and symlink targets are both
    /// resolved before the prefix comparison.
    pub fn read(&self, relative: &str) -> Result<String> {
        let candidate = normalize_path(&self.root.join(relative));

        if !candidate.starts_with(&self.root) {
            return Err(Error::AccessDenied(format!(
                "path '{}' is outside the confined directory",
                relative
            )));
        }

        let resolved = match candidate.canonicalize() {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound("File not found".to_string()));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        if !resolved.starts_with(&self.root) {
            return Err(Error::AccessDenied(format!(
                "path '{}' resolves outside the confined directory",
                relative
            )));
        }

        match fs::read_to_string(&resolved) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound("File not found".to_string()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Execute bits for owner, group, and others on shell artifacts
#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Lexical path normalization: drops `.` segments and folds `..` into the
/// preceding component without touching the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                if !components.is_empty() {
                    components.pop();
                }
            }
            std::path::Component::CurDir => {}
            _ => {
                components.push(component);
            }
        }
    }

    components.iter().collect()
}
