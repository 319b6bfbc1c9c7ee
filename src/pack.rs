//! Pack parsing: one pack directory → a [`Pack`] catalog entry.
//!
//! A pack is a directory whose immediate children include category
//! directories (named per [`crate::naming::is_category_name`]) and an
//! optional root `cfg` file:
//!
//! ```text
//! G-Zombicide-Base/
//! ├── cfg                      # name=, image=, align= (optional)
//! ├── 01.tiles/
//! │   ├── cfg                  # required — no cfg, no category
//! │   ├── 1V.png               # flat asset
//! │   ├── 1V/                  # its variants (optional)
//! │   │   ├── r_90.png
//! │   │   └── r_thumb.png
//! │   └── 10V.png/             # directory asset
//! │       ├── r_0.png          # required — canonical image
//! │       └── r_180.png
//! └── 02.doors/
//!     └── ...
//! ```
//!
//! Failure containment follows the unit boundaries: a malformed category
//! is dropped with a warning and the pack survives; only pack-level
//! problems (unreadable directory, bad root cfg number, a pack outside
//! every storage root) fail the pack — and the indexer downgrades those
//! to warnings in turn. Entries are visited in name order so reruns over
//! an unchanged tree produce byte-identical catalogs.

use crate::catalog::{Asset, Category, Pack};
use crate::cfg::{self, Cfg};
use crate::naming;
use crate::resolve;
use crate::roots::{RootsError, StorageRoots};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Roots(#[from] RootsError),
    #[error("{0}")]
    Number(#[from] cfg::BadNumber),
}

/// A soft error: something was skipped, the scan went on.
#[derive(Debug, Clone)]
pub struct Warning {
    pub path: PathBuf,
    pub message: String,
}

impl Warning {
    fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Filename of the pack/category configuration file.
pub const CFG_FILE: &str = "cfg";

/// Default pack icon when the root cfg names none.
pub const DEFAULT_PACK_IMAGE: &str = "guillotine.png";

/// Default pack grid alignment unit.
pub const DEFAULT_PACK_ALIGN: i64 = 25;

/// Parse one pack directory. The pack id is always the directory name;
/// the root cfg can restyle the display name, icon, and alignment but
/// never the identity. A missing root cfg means defaults.
pub fn parse_pack(
    roots: &StorageRoots,
    pack_dir: &Path,
    warnings: &mut Vec<Warning>,
) -> Result<Pack, PackError> {
    let id = dir_name(pack_dir);

    let root_cfg = load_cfg(&pack_dir.join(CFG_FILE), warnings);
    let name = root_cfg.get_or("name", &id).to_string();
    let image = root_cfg.get_or("image", DEFAULT_PACK_IMAGE).to_string();
    let align = root_cfg.int_or("align", DEFAULT_PACK_ALIGN)?;

    let mut categories = BTreeMap::new();
    for entry in sorted_entries(pack_dir)? {
        let entry_name = dir_name(&entry);
        if !entry.is_dir() || naming::is_hidden(&entry_name) {
            continue;
        }
        if !naming::is_category_name(&entry_name) {
            continue;
        }
        match parse_category(roots, &entry, &entry_name) {
            Ok(Some(category)) => {
                categories.insert(entry_name, category);
            }
            Ok(None) => {}
            Err(err) => {
                warnings.push(Warning::new(&entry, format!("category skipped: {err}")));
            }
        }
    }

    Ok(Pack {
        id,
        name,
        image,
        align,
        categories,
    })
}

/// Parse one category directory. `Ok(None)` when the directory has no
/// `cfg` file — such directories are not categories at all.
fn parse_category(
    roots: &StorageRoots,
    dir: &Path,
    dir_name: &str,
) -> Result<Option<Category>, PackError> {
    let cfg_path = dir.join(CFG_FILE);
    if !cfg_path.is_file() {
        return Ok(None);
    }
    let data = Cfg::load(&cfg_path)?;

    let max_raw = data.get_or("max", "").to_string();
    let pairs_raw = data.get_or("pairs", "").to_string();
    let assets = scan_assets(roots, dir, &max_raw, &pairs_raw)?;

    Ok(Some(Category {
        name: data.get_or("name", dir_name).to_string(),
        z_index: data.int_or("z-index", 0)?,
        align: data.int_or("align", 0)?,
        max: max_raw,
        pairs: pairs_raw,
        assets,
    }))
}

/// Scan a category's entries into assets, name order.
fn scan_assets(
    roots: &StorageRoots,
    dir: &Path,
    max_raw: &str,
    pairs_raw: &str,
) -> Result<Vec<Asset>, PackError> {
    let caps = cfg::parse_max(max_raw);
    let pairs = cfg::parse_pairs(pairs_raw);

    let mut assets = Vec::new();
    for entry in sorted_entries(dir)? {
        let entry_name = dir_name(&entry);
        if naming::is_hidden(&entry_name) {
            continue;
        }
        let resolved = if entry.is_file() && naming::has_image_extension(&entry) {
            Some(resolve::resolve_file(roots, &entry)?)
        } else if entry.is_dir() {
            resolve::resolve_dir(roots, &entry)?
        } else {
            None
        };
        if let Some(resolved) = resolved {
            // cap/pair lookups key on the full entry name, extension included
            let max = caps.get(&resolved.name).copied().flatten();
            let pair = pairs.get(&resolved.name).cloned();
            assets.push(Asset {
                name: resolved.name,
                path: resolved.path,
                thumbnail: resolved.thumbnail,
                rotations: resolved.rotations,
                max,
                pair,
            });
        }
    }
    Ok(assets)
}

/// Load a cfg file, downgrading read failures to a warning + defaults.
/// A file that simply doesn't exist is the normal case and stays quiet.
fn load_cfg(path: &Path, warnings: &mut Vec<Warning>) -> Cfg {
    if !path.is_file() {
        return Cfg::default();
    }
    match Cfg::load(path) {
        Ok(cfg) => cfg,
        Err(err) => {
            warnings.push(Warning::new(path, format!("unreadable cfg: {err}")));
            Cfg::default()
        }
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();
    Ok(entries)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
