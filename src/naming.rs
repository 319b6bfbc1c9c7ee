//! Centralized naming conventions for the pack directory layout.
//!
//! One module owns every name-based rule so the scanner, parser, and
//! indexer all agree:
//!
//! - **Category directories** start with a run of digits followed by a
//!   dot or another digit: `01.tiles`, `04.1.objectives`, `01B.vaults`
//!   (the `01` satisfies the rule). `2b.extra` does not qualify — the
//!   character after the leading digit is a letter.
//! - **Image files** are `.png`/`.jpg`/`.jpeg`, case-insensitive.
//! - **Hidden entries** (leading `.`) are skipped everywhere.
//! - **Rotation variants** inside an asset directory are `r_<angle>.png`
//!   for the four right angles; the thumbnail is `r_thumb.png`.

use std::path::Path;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// The four pre-rendered orientations an asset may ship.
pub const ROTATION_ANGLES: [u16; 4] = [0, 90, 180, 270];

/// Filename of a rotation variant: `r_0.png`, `r_90.png`, ...
pub fn rotation_file(angle: u16) -> String {
    format!("r_{angle}.png")
}

pub const THUMB_FILE: &str = "r_thumb.png";

/// Does this directory name follow the category convention?
///
/// Literal reading of the rule "digits, then dot or digit": the name
/// starts with an ASCII digit and its second character is a digit or a
/// dot. `10vaults` therefore matches (second char is `0`), while
/// `2b.extra` does not.
pub fn is_category_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second))
            if first.is_ascii_digit() && (second.is_ascii_digit() || second == '.')
    )
}

/// Is this a hidden entry (leading dot)?
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Does this path carry a recognized image extension?
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
