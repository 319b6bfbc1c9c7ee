//! Asset resolution: one category entry → canonical path, rotation set,
//! and thumbnail.
//!
//! Assets come in two shapes:
//!
//! 1. **Flat file** — an image directly inside the category
//!    (`01.tiles/1V.png`). Rotations and the thumbnail, if any, live in
//!    a sibling directory named after the file's stem:
//!    `01.tiles/1V/r_90.png`, `01.tiles/1V/r_thumb.png`.
//! 2. **Directory** — a subdirectory whose name is the asset name
//!    (often kept with its extension, e.g. `10V.png/`). Valid only when
//!    it contains `r_0.png`, which becomes the canonical image;
//!    rotations and thumbnail live alongside it.
//!
//! Every rotation angle and the thumbnail are optional — absence just
//! omits the entry. A directory asset without `r_0.png` resolves to
//! `None` and is skipped by the scanner without complaint.

use crate::naming::{ROTATION_ANGLES, THUMB_FILE, rotation_file};
use crate::roots::{RootsError, StorageRoots};
use std::collections::BTreeMap;
use std::path::Path;

/// Paths for one asset, all root-relative with forward slashes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    pub name: String,
    pub path: String,
    pub thumbnail: Option<String>,
    pub rotations: BTreeMap<u16, String>,
}

/// Resolve a flat image file inside a category directory.
pub fn resolve_file(roots: &StorageRoots, file: &Path) -> Result<ResolvedAsset, RootsError> {
    let name = file_name(file);
    // 1V.png → sibling directory 1V/ holds variants
    let variant_dir = file.with_extension("");
    Ok(ResolvedAsset {
        name,
        path: roots.relative(file)?,
        thumbnail: probe_thumbnail(roots, &variant_dir)?,
        rotations: probe_rotations(roots, &variant_dir)?,
    })
}

/// Resolve a directory-form asset. `Ok(None)` when `r_0.png` is absent.
pub fn resolve_dir(
    roots: &StorageRoots,
    dir: &Path,
) -> Result<Option<ResolvedAsset>, RootsError> {
    let canonical = dir.join(rotation_file(0));
    if !canonical.is_file() {
        return Ok(None);
    }
    Ok(Some(ResolvedAsset {
        name: file_name(dir),
        path: roots.relative(&canonical)?,
        thumbnail: probe_thumbnail(roots, dir)?,
        rotations: probe_rotations(roots, dir)?,
    }))
}

fn probe_rotations(
    roots: &StorageRoots,
    dir: &Path,
) -> Result<BTreeMap<u16, String>, RootsError> {
    let mut rotations = BTreeMap::new();
    for angle in ROTATION_ANGLES {
        let candidate = dir.join(rotation_file(angle));
        if candidate.is_file() {
            rotations.insert(angle, roots.relative(&candidate)?);
        }
    }
    Ok(rotations)
}

fn probe_thumbnail(roots: &StorageRoots, dir: &Path) -> Result<Option<String>, RootsError> {
    let candidate = dir.join(THUMB_FILE);
    if candidate.is_file() {
        Ok(Some(roots.relative(&candidate)?))
    } else {
        Ok(None)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
