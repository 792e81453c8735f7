//! Directory lister for ROM manifests.
//!
//! Handles one flat directory: ROM files live at the top level, preview
//! images sit next to them and are resolved later by the manifest builder.

use std::path::Path;

use crate::error::ManifestError;

/// File extension that marks a ROM file, without the leading dot.
pub const ROM_EXTENSION: &str = "nes";

/// List the ROM file names in `roms_dir`, sorted lexicographically.
///
/// Matching is exact and case-sensitive (`MARIO.NES` does not count) and only
/// regular files are considered, so a subdirectory named `games.nes` is
/// skipped. Names that are not valid UTF-8 are skipped as well; the manifest
/// could not represent them. Fails if the directory itself cannot be read;
/// unreadable entries inside an otherwise readable directory are skipped.
pub fn list_rom_files(roms_dir: &Path) -> Result<Vec<String>, ManifestError> {
    let entries = std::fs::read_dir(roms_dir).map_err(|e| ManifestError::DirectoryAccess {
        path: roms_dir.display().to_string(),
        source: e,
    })?;

    let mut rom_files: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() || !has_rom_extension(&path) {
                return None;
            }
            path.file_name().and_then(|n| n.to_str()).map(str::to_owned)
        })
        .collect();

    rom_files.sort();

    log::debug!(
        "Found {} ROM files in {}",
        rom_files.len(),
        roms_dir.display()
    );
    Ok(rom_files)
}

/// Check if a path carries the ROM extension. Exact and case-sensitive; a
/// bare dotfile named `.nes` has no extension and does not match.
fn has_rom_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == ROM_EXTENSION)
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
