//! # packdex
//!
//! Asset-pack discovery and indexing for tile-based map editors. Your
//! filesystem is the data source: a pack is a directory of numbered
//! category directories, each category holds placeable image assets with
//! optional pre-rendered rotations and thumbnails, and small `key=value`
//! `cfg` files carry the display metadata.
//!
//! ```text
//! assets/                          # primary storage root
//! └── G-Zombicide-Base/            # pack (id = directory name)
//!     ├── cfg                      # name=, image=, align=
//!     ├── 01.tiles/                # category (digits then dot/digit)
//!     │   ├── cfg                  # name=, z-index=, max=, pairs=
//!     │   ├── 1V.png               # flat asset
//!     │   └── 10V.png/             # directory asset
//!     │       ├── r_0.png          # canonical image (required)
//!     │       ├── r_90.png         # rotation variants (optional)
//!     │       └── r_thumb.png      # thumbnail (optional)
//!     └── 02.doors/
//! bgmapeditor_tiles/               # legacy root, searched second
//! ```
//!
//! Indexing re-walks the disk on every call and never mutates pack
//! contents — the catalog is a request-scoped value, not a store. That
//! is a deliberate simplicity-over-throughput tradeoff for a developer
//! tool with a modest asset count.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`cfg`] | `key=value` cfg parsing plus the `max`/`pairs` mini-grammars |
//! | [`naming`] | Category/image/rotation naming conventions |
//! | [`roots`] | Storage-root priority list and root-relative path rendering |
//! | [`resolve`] | Flat-file and directory asset resolution |
//! | [`pack`] | Pack + category parsing into catalog entries |
//! | [`index`] | Cross-root discovery, dedup, and the static packs index |
//! | [`catalog`] | The serialized catalog types (`Pack`, `Category`, `Asset`) |
//! | [`config`] | `packdex.toml` tool settings |
//! | [`output`] | CLI output formatting — pure `format_*` + `print_*` wrappers |
//!
//! # Failure philosophy
//!
//! Broken input degrades, it never aborts: a malformed cfg line is
//! skipped, a bad `max` count means "uncapped", a category without a
//! cfg is omitted, and a pack that fails to parse becomes a warning in
//! the index outcome. The only hard failure is a storage root that
//! exists but cannot be enumerated, because then there is no catalog to
//! produce at all.

pub mod catalog;
pub mod cfg;
pub mod config;
pub mod index;
pub mod naming;
pub mod output;
pub mod pack;
pub mod resolve;
pub mod roots;

#[cfg(test)]
pub(crate) mod test_helpers;
