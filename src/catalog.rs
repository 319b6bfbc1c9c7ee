//! Catalog types: the in-memory shape of an indexed pack tree.
//!
//! These are exactly what the API/UI layer serializes — field names are
//! the wire format, so nothing here renames at the boundary. Optional
//! fields serialize as `null` (not omitted) to match the reference
//! frontend's expectations.
//!
//! All paths are root-relative with forward slashes; see [`crate::roots`].

use serde::Serialize;
use std::collections::BTreeMap;

/// One discovered pack: a directory of categories plus display config.
#[derive(Debug, Clone, Serialize)]
pub struct Pack {
    /// Directory name. Identity — config can restyle but never rename.
    pub id: String,
    /// Display name (`name` in the root cfg, defaults to `id`).
    pub name: String,
    /// Icon filename (`image` in the root cfg).
    pub image: String,
    /// Grid alignment unit in pixels.
    pub align: i64,
    /// Category name → category, ordered by directory name.
    pub categories: BTreeMap<String, Category>,
}

/// One category directory (`01.tiles`, `04.1.objectives`, ...).
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Display name (`name` in the category cfg, defaults to dir name).
    pub name: String,
    /// Paint order; higher draws on top.
    pub z_index: i64,
    /// Per-category alignment override; 0 means "use the pack's".
    pub align: i64,
    /// Raw `max` cfg string, as written.
    pub max: String,
    /// Raw `pairs` cfg string, as written.
    pub pairs: String,
    /// Assets in directory-name order.
    pub assets: Vec<Asset>,
}

/// One placeable visual element.
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    /// Base file or directory name within the category.
    pub name: String,
    /// Root-relative path of the canonical image.
    pub path: String,
    /// Root-relative thumbnail path, if one exists.
    pub thumbnail: Option<String>,
    /// Rotation angle (0/90/180/270) → root-relative variant path.
    /// Only angles whose file exists appear.
    pub rotations: BTreeMap<u16, String>,
    /// Maximum placeable count, when the category cfg caps this asset.
    pub max: Option<u32>,
    /// Name of the partner asset in a symmetric pairing, if any.
    pub pair: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_serializes_nulls_and_numeric_rotation_keys() {
        let asset = Asset {
            name: "1V.png".into(),
            path: "G-Base/01.tiles/1V.png".into(),
            thumbnail: None,
            rotations: BTreeMap::from([(0, "G-Base/01.tiles/1V/r_0.png".into())]),
            max: None,
            pair: None,
        };
        let json = serde_json::to_value(&asset).unwrap();
        assert!(json["thumbnail"].is_null());
        assert!(json["pair"].is_null());
        assert_eq!(json["rotations"]["0"], "G-Base/01.tiles/1V/r_0.png");
    }

    #[test]
    fn pack_serializes_with_wire_field_names() {
        let pack = Pack {
            id: "G-Base".into(),
            name: "Base".into(),
            image: "guillotine.png".into(),
            align: 25,
            categories: BTreeMap::new(),
        };
        let json = serde_json::to_value(&pack).unwrap();
        assert_eq!(json["id"], "G-Base");
        assert_eq!(json["align"], 25);
        assert!(json["categories"].as_object().unwrap().is_empty());
    }
}
