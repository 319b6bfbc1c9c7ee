//! CLI output formatting.
//!
//! Format functions are pure — they return `Vec<String>` so tests can
//! assert on exact lines — and each has a thin `print_*` wrapper that
//! writes to stdout (warnings go to stderr). Display is
//! information-centric: the header line is a positional index plus the
//! entity's display name, with directory names as indented context.
//!
//! ```text
//! Packs
//! 001 Zombicide Base (2 categories)
//!     Id: G-Zombicide-Base
//!     001 Tiles (12 assets)
//!         Source: 01.tiles/
//!     002 Doors (4 assets)
//!         Source: 02.doors/
//! ```

use crate::catalog::{Asset, Pack};
use crate::pack::Warning;
use std::collections::BTreeMap;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Indentation: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count_noun(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// One asset line: name plus its variant inventory.
///
/// ```text
/// 001 1V.png (4 rotations, thumbnail)
/// 002 2V.png
/// ```
fn asset_line(index: usize, asset: &Asset) -> String {
    let mut extras = Vec::new();
    if !asset.rotations.is_empty() {
        extras.push(count_noun(asset.rotations.len(), "rotation"));
    }
    if asset.thumbnail.is_some() {
        extras.push("thumbnail".to_string());
    }
    if let Some(max) = asset.max {
        extras.push(format!("max {max}"));
    }
    if let Some(pair) = &asset.pair {
        extras.push(format!("pairs with {pair}"));
    }
    if extras.is_empty() {
        format!("{} {}", format_index(index), asset.name)
    } else {
        format!("{} {} ({})", format_index(index), asset.name, extras.join(", "))
    }
}

/// Format the merged catalog as a pack/category tree.
pub fn format_catalog(packs: &[Pack]) -> Vec<String> {
    let mut lines = vec!["Packs".to_string()];
    if packs.is_empty() {
        lines.push(format!("{}(none found)", indent(1)));
        return lines;
    }
    for (pi, pack) in packs.iter().enumerate() {
        let categories = match pack.categories.len() {
            1 => "1 category".to_string(),
            n => format!("{n} categories"),
        };
        lines.push(format!(
            "{} {} ({categories})",
            format_index(pi + 1),
            pack.name,
        ));
        lines.push(format!("{}Id: {}", indent(1), pack.id));
        for (ci, (dir_name, category)) in pack.categories.iter().enumerate() {
            lines.push(format!(
                "{}{} {} ({})",
                indent(1),
                format_index(ci + 1),
                category.name,
                count_noun(category.assets.len(), "asset"),
            ));
            lines.push(format!("{}Source: {}/", indent(2), dir_name));
        }
    }
    lines
}

/// Format a single pack's assets keyed by category.
pub fn format_pack_assets(
    pack_id: &str,
    categories: &BTreeMap<String, Vec<Asset>>,
) -> Vec<String> {
    if categories.is_empty() {
        return vec![format!("Pack '{pack_id}' not found")];
    }
    let mut lines = vec![pack_id.to_string()];
    for (name, assets) in categories {
        lines.push(format!(
            "{}{} ({})",
            indent(1),
            name,
            count_noun(assets.len(), "asset"),
        ));
        for (ai, asset) in assets.iter().enumerate() {
            lines.push(format!("{}{}", indent(2), asset_line(ai + 1, asset)));
        }
    }
    lines
}

/// Format scan warnings, one per line.
pub fn format_warnings(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(|w| format!("warning: {w}")).collect()
}

pub fn print_catalog(packs: &[Pack]) {
    for line in format_catalog(packs) {
        println!("{line}");
    }
}

pub fn print_pack_assets(pack_id: &str, categories: &BTreeMap<String, Vec<Asset>>) {
    for line in format_pack_assets(pack_id, categories) {
        println!("{line}");
    }
}

pub fn print_warnings(warnings: &[Warning]) {
    for line in format_warnings(warnings) {
        eprintln!("{line}");
    }
}
