//! Storage root classification and root-relative path rendering.
//!
//! Packs may live under more than one filesystem root (a primary assets
//! directory plus legacy locations). The roots form an explicit ordered
//! list, priority first, and every path exposed by the catalog is made
//! relative to the root that contains it — so asset URLs stay stable no
//! matter which root a pack was found in.
//!
//! Classification is a pure function over the list: the first root that
//! is an ancestor of the path wins. A path under none of the roots is
//! charged to the last (legacy) root, which mirrors the fallback the
//! original layout relied on for unconventional directory arrangements.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RootsError {
    #[error("path {path:?} is not under storage root {root:?}")]
    NotUnderRoot { path: PathBuf, root: PathBuf },
}

/// Ordered list of storage roots, priority order. Never empty.
#[derive(Debug, Clone)]
pub struct StorageRoots {
    roots: Vec<PathBuf>,
}

impl StorageRoots {
    /// Build from roots in priority order. Roots are canonicalized where
    /// possible so symlinked pack paths still classify; a root that does
    /// not (yet) exist is kept as written.
    ///
    /// Falls back to a single `"."` root if given an empty list, keeping
    /// the invariant that classification always has an answer.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut roots: Vec<PathBuf> = roots.into_iter().map(|p| canon(&p.into())).collect();
        if roots.is_empty() {
            roots.push(PathBuf::from("."));
        }
        Self { roots }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    /// The root used for paths that match no configured root.
    pub fn default_root(&self) -> &Path {
        self.roots.last().expect("roots list is never empty").as_path()
    }

    /// Classify `path` against the configured roots: first ancestor in
    /// priority order, or the designated default.
    pub fn base_for(&self, path: &Path) -> &Path {
        let resolved = canon(path);
        self.roots
            .iter()
            .find(|root| resolved.starts_with(root))
            .map(PathBuf::as_path)
            .unwrap_or_else(|| self.default_root())
    }

    /// Render `path` relative to the root that contains it, with forward
    /// slashes regardless of platform.
    pub fn relative(&self, path: &Path) -> Result<String, RootsError> {
        let base = self.base_for(path);
        let resolved = canon(path);
        let rel = resolved
            .strip_prefix(base)
            .map_err(|_| RootsError::NotUnderRoot {
                path: path.to_path_buf(),
                root: base.to_path_buf(),
            })?;
        Ok(forward_slashes(rel))
    }

    /// Probe roots in priority order for a directory named `id`.
    pub fn find_dir(&self, id: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(id))
            .find(|candidate| candidate.is_dir())
    }
}

fn canon(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Join path components with `/`, dropping any root/prefix components.
fn forward_slashes(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    parts.join("/")
}
