//! Pack discovery across storage roots, with first-root-wins dedup.
//!
//! The indexer owns the two catalog operations the outside world calls:
//!
//! - [`Indexer::index_all_packs`] — enumerate every root in priority
//!   order, parse each candidate pack, and merge into one catalog. A
//!   pack id seen in an earlier root suppresses the same id from later
//!   roots. One broken pack never aborts the run: its failure becomes a
//!   warning and indexing continues.
//! - [`Indexer::pack_assets`] — probe the roots for a single pack id
//!   and return its assets keyed by category. An unknown id is an empty
//!   result, not an error — callers read empty as "not found."
//!
//! Candidate pack directories are immediate, non-hidden children of a
//! root that either carry the recognized name prefix or contain a root
//! `cfg` file. A configured root that does not exist is skipped; a root
//! that exists but cannot be enumerated is the one hard failure, since
//! no catalog can be produced from it at all.
//!
//! Packs within one root are parsed in parallel; the merge is a
//! sequential reduction so root priority and name order are preserved
//! and reruns over an unchanged tree are byte-identical.

use crate::catalog::{Asset, Pack};
use crate::naming;
use crate::pack::{self, CFG_FILE, Warning};
use crate::roots::StorageRoots;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot enumerate storage root {root:?}: {source}")]
    RootUnreadable {
        root: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a full indexing pass: the catalog plus soft errors.
#[derive(Debug)]
pub struct IndexOutcome {
    pub packs: Vec<Pack>,
    pub warnings: Vec<Warning>,
}

/// Result of a single-pack lookup. `categories` is empty when the id
/// matched no pack directory under any root.
#[derive(Debug)]
pub struct AssetLookup {
    pub categories: BTreeMap<String, Vec<Asset>>,
    pub warnings: Vec<Warning>,
}

/// The static index file consumed by a frontend with no backend process.
#[derive(Debug, Serialize)]
pub struct PacksIndex {
    pub packs: Vec<IndexedPack>,
    /// Unix seconds at generation time.
    pub generated_at: u64,
}

/// One pack flattened for the static index: display config plus assets
/// keyed by category, category metadata elided.
#[derive(Debug, Serialize)]
pub struct IndexedPack {
    pub id: String,
    pub name: String,
    pub image: String,
    pub align: i64,
    pub assets: BTreeMap<String, Vec<Asset>>,
}

pub struct Indexer {
    roots: StorageRoots,
    pack_prefix: String,
}

impl Indexer {
    pub fn new(roots: StorageRoots, pack_prefix: impl Into<String>) -> Self {
        Self {
            roots,
            pack_prefix: pack_prefix.into(),
        }
    }

    /// Walk every root and build the merged catalog.
    pub fn index_all_packs(&self) -> Result<IndexOutcome, IndexError> {
        let mut packs: Vec<Pack> = Vec::new();
        let mut warnings = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for root in self.roots.iter() {
            if !root.is_dir() {
                continue;
            }
            // An id claimed by an earlier root shadows later copies, so
            // those don't even get parsed.
            let candidates: Vec<PathBuf> = self
                .candidate_dirs(root)?
                .into_iter()
                .filter(|dir| {
                    dir.file_name()
                        .is_none_or(|name| !seen.contains(&*name.to_string_lossy()))
                })
                .collect();

            // Parse in parallel; merge sequentially to keep priority order.
            let parsed: Vec<(PathBuf, Result<Pack, pack::PackError>, Vec<Warning>)> = candidates
                .par_iter()
                .map(|dir| {
                    let mut local = Vec::new();
                    let result = pack::parse_pack(&self.roots, dir, &mut local);
                    (dir.clone(), result, local)
                })
                .collect();

            for (dir, result, local) in parsed {
                warnings.extend(local);
                match result {
                    Ok(pack) => {
                        if seen.insert(pack.id.clone()) {
                            packs.push(pack);
                        }
                    }
                    Err(err) => {
                        warnings.push(Warning {
                            path: dir,
                            message: format!("pack skipped: {err}"),
                        });
                    }
                }
            }
        }

        Ok(IndexOutcome { packs, warnings })
    }

    /// Look up one pack by id and return its assets per category.
    pub fn pack_assets(&self, pack_id: &str) -> AssetLookup {
        let mut lookup = AssetLookup {
            categories: BTreeMap::new(),
            warnings: Vec::new(),
        };
        if !is_safe_pack_id(pack_id) {
            return lookup;
        }
        let Some(pack_dir) = self.roots.find_dir(pack_id) else {
            return lookup;
        };
        match pack::parse_pack(&self.roots, &pack_dir, &mut lookup.warnings) {
            Ok(pack) => {
                lookup.categories = pack
                    .categories
                    .into_iter()
                    .map(|(name, category)| (name, category.assets))
                    .collect();
            }
            Err(err) => {
                lookup.warnings.push(Warning {
                    path: pack_dir,
                    message: format!("pack skipped: {err}"),
                });
            }
        }
        lookup
    }

    /// Build the static packs index from one indexing pass.
    pub fn packs_index(&self) -> Result<(PacksIndex, Vec<Warning>), IndexError> {
        let outcome = self.index_all_packs()?;
        let packs = outcome
            .packs
            .into_iter()
            .map(|pack| IndexedPack {
                id: pack.id,
                name: pack.name,
                image: pack.image,
                align: pack.align,
                assets: pack
                    .categories
                    .into_iter()
                    .map(|(name, category)| (name, category.assets))
                    .collect(),
            })
            .collect();
        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Ok((
            PacksIndex {
                packs,
                generated_at,
            },
            outcome.warnings,
        ))
    }

    /// Immediate children of `root` that look like packs, name order.
    fn candidate_dirs(&self, root: &Path) -> Result<Vec<PathBuf>, IndexError> {
        let entries = fs::read_dir(root).map_err(|source| IndexError::RootUnreadable {
            root: root.to_path_buf(),
            source,
        })?;
        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                !naming::is_hidden(&name)
                    && (name.starts_with(&self.pack_prefix) || path.join(CFG_FILE).is_file())
            })
            .collect();
        candidates.sort();
        Ok(candidates)
    }
}

/// A pack id must be a bare directory name — anything that could walk
/// out of the storage roots resolves to "not found."
fn is_safe_pack_id(id: &str) -> bool {
    !id.is_empty() && id != ".." && !id.contains('/') && !id.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;

    fn indexer(paths: &[&Path]) -> Indexer {
        Indexer::new(roots(paths), "G-Zombicide-")
    }

    #[test]
    fn discovers_prefixed_and_cfg_marked_packs() {
        let tmp = tempdir();
        make_pack(tmp.path(), "G-Zombicide-Base", None);
        make_pack(tmp.path(), "Custom-Pack", Some("name=Custom\n"));
        fs::create_dir(tmp.path().join("random-dir")).unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();

        let outcome = indexer(&[tmp.path()]).index_all_packs().unwrap();
        let ids: Vec<&str> = outcome.packs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["Custom-Pack", "G-Zombicide-Base"]);
    }

    #[test]
    fn earlier_root_wins_dedup() {
        let primary = tempdir();
        let legacy = tempdir();
        let p = make_pack(primary.path(), "G-Zombicide-Base", Some("name=Primary\n"));
        make_category(&p, "01.tiles", "", &["1V.png"]);
        // structurally different copy under the legacy root
        make_pack(legacy.path(), "G-Zombicide-Base", Some("name=Legacy\nalign=99\n"));

        let outcome = indexer(&[primary.path(), legacy.path()])
            .index_all_packs()
            .unwrap();

        assert_eq!(outcome.packs.len(), 1);
        assert_eq!(outcome.packs[0].name, "Primary");
    }

    #[test]
    fn broken_pack_excluded_rest_survive() {
        let tmp = tempdir();
        let good = make_pack(tmp.path(), "G-Zombicide-Base", None);
        make_category(&good, "01.tiles", "", &["1V.png"]);
        make_pack(tmp.path(), "G-Zombicide-Broken", Some("align=NaN\n"));

        let outcome = indexer(&[tmp.path()]).index_all_packs().unwrap();

        assert_eq!(outcome.packs.len(), 1);
        assert_eq!(outcome.packs[0].id, "G-Zombicide-Base");
        assert!(
            outcome
                .warnings
                .iter()
                .any(|w| w.message.contains("pack skipped"))
        );
    }

    #[test]
    fn missing_root_skipped() {
        let tmp = tempdir();
        make_pack(tmp.path(), "G-Zombicide-Base", None);
        let ghost = tmp.path().join("no-such-root");

        let outcome = indexer(&[&ghost, tmp.path()]).index_all_packs().unwrap();
        assert_eq!(outcome.packs.len(), 1);
    }

    #[test]
    fn pack_assets_probes_roots_in_priority_order() {
        let primary = tempdir();
        let legacy = tempdir();
        let p = make_pack(legacy.path(), "G-Zombicide-Legacy", None);
        make_category(&p, "01.tiles", "", &["1V.png"]);

        let lookup = indexer(&[primary.path(), legacy.path()]).pack_assets("G-Zombicide-Legacy");
        assert_eq!(lookup.categories["01.tiles"].len(), 1);
    }

    #[test]
    fn unknown_pack_id_is_empty_result() {
        let tmp = tempdir();
        let lookup = indexer(&[tmp.path()]).pack_assets("G-Zombicide-Nope");
        assert!(lookup.categories.is_empty());
        assert!(lookup.warnings.is_empty());
    }

    #[test]
    fn traversal_pack_ids_rejected() {
        let tmp = tempdir();
        let idx = indexer(&[tmp.path()]);
        assert!(idx.pack_assets("../escape").categories.is_empty());
        assert!(idx.pack_assets("a/b").categories.is_empty());
        assert!(idx.pack_assets("").categories.is_empty());
    }

    #[test]
    fn indexing_twice_is_identical() {
        let tmp = tempdir();
        let p = make_pack(tmp.path(), "G-Zombicide-Base", Some("name=Base\n"));
        let cat = make_category(&p, "01.tiles", "max=1V.png:2\n", &["1V.png", "2V.png"]);
        make_dir_asset(&cat, "10V.png", &[0, 90, 180, 270], true);

        let idx = indexer(&[tmp.path()]);
        let first = serde_json::to_string(&idx.index_all_packs().unwrap().packs).unwrap();
        let second = serde_json::to_string(&idx.index_all_packs().unwrap().packs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn packs_index_flattens_categories() {
        let tmp = tempdir();
        let p = make_pack(tmp.path(), "G-Zombicide-Base", Some("name=Base\n"));
        make_category(&p, "01.tiles", "", &["1V.png"]);

        let (index, warnings) = indexer(&[tmp.path()]).packs_index().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(index.packs.len(), 1);
        assert_eq!(index.packs[0].assets["01.tiles"][0].name, "1V.png");
        assert!(index.generated_at > 0);
    }
}
