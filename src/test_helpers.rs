//! Shared fixture builders for the packdex test suite.
//!
//! Tests assemble pack trees in a `TempDir` instead of shipping binary
//! fixtures — the scanner only ever checks names and existence, so a
//! few bytes of placeholder content stand in for real images.
//!
//! ```rust
//! let tmp = tempdir();
//! let pack = make_pack(tmp.path(), "G-Zombicide-Base", Some("name=Base\n"));
//! let cat = make_category(&pack, "01.tiles", "z-index=10\n", &["1V.png"]);
//! make_dir_asset(&cat, "10V.png", &[0, 90], true);
//! ```

use crate::naming::rotation_file;
use crate::roots::StorageRoots;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn tempdir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn roots(paths: &[&Path]) -> StorageRoots {
    StorageRoots::new(paths.iter().map(|p| p.to_path_buf()))
}

/// Create a pack directory, optionally with a root cfg file.
pub fn make_pack(root: &Path, id: &str, cfg: Option<&str>) -> PathBuf {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    if let Some(cfg) = cfg {
        fs::write(dir.join("cfg"), cfg).unwrap();
    }
    dir
}

/// Create a category directory with a cfg file (pass `""` for an empty
/// one — the file must exist for the directory to count) and flat image
/// files with placeholder content.
pub fn make_category(pack_dir: &Path, name: &str, cfg: &str, files: &[&str]) -> PathBuf {
    let dir = pack_dir.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("cfg"), cfg).unwrap();
    for file in files {
        fs::write(dir.join(file), "png").unwrap();
    }
    dir
}

/// Create a directory-form asset with the given rotation angles and an
/// optional thumbnail. Include angle 0 for a valid asset; leave it out
/// to build a broken one.
pub fn make_dir_asset(category: &Path, name: &str, angles: &[u16], thumb: bool) -> PathBuf {
    let dir = category.join(name);
    fs::create_dir_all(&dir).unwrap();
    for &angle in angles {
        fs::write(dir.join(rotation_file(angle)), "png").unwrap();
    }
    if thumb {
        fs::write(dir.join("r_thumb.png"), "png").unwrap();
    }
    dir
}
