//! Manifest model and preview image resolution.
//!
//! A manifest pairs each ROM file with the path of its preview image, or
//! `null` when no preview exists. The preview path is derived from the ROM
//! path by substituting the preview marker for the first occurrence of the
//! ROM marker, then checked against the filesystem.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Substring of a ROM path that is swapped out to derive the preview path.
pub const ROM_MARKER: &str = ".nes";
/// Substring that replaces [`ROM_MARKER`] in the derived preview path.
pub const PREVIEW_MARKER: &str = ".png";

/// One ROM file and its preview image, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RomEntry {
    /// Bare file name of the ROM, without any directory part.
    pub file_name: String,
    /// Full path of the preview image, or `None` when it does not exist.
    pub preview_image_file_path: Option<String>,
}

/// The full manifest for one ROM directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub roms: Vec<RomEntry>,
}

/// Outcome of probing the filesystem for a preview image.
#[derive(Debug)]
pub enum PreviewStatus {
    /// The preview image exists.
    Present,
    /// The preview image does not exist.
    Missing,
    /// Existence could not be determined (for example a permission error
    /// or a non-directory component in the candidate path).
    Inaccessible(io::Error),
}

/// Derive the preview image path for a ROM path.
///
/// Replaces the first occurrence of `.nes` anywhere in the path with `.png`.
/// For the common layout (one `.nes` suffix, ASCII directories) this swaps
/// the extension; a marker earlier in the path, such as a directory named
/// `library.nes`, is substituted instead and the file name keeps its
/// extension. The probe then reports that candidate as missing.
pub fn preview_candidate(rom_path: &Path) -> String {
    rom_path.to_string_lossy().replacen(ROM_MARKER, PREVIEW_MARKER, 1)
}

/// Check whether a preview image exists at `path`.
pub fn probe_preview(path: &Path) -> PreviewStatus {
    match path.try_exists() {
        Ok(true) => PreviewStatus::Present,
        Ok(false) => PreviewStatus::Missing,
        Err(e) => PreviewStatus::Inaccessible(e),
    }
}

/// Build a manifest for the given ROM file names.
///
/// `rom_files` are bare file names as produced by
/// [`scanner::list_rom_files`](crate::scanner::list_rom_files); entry order
/// follows the input order. Probe failures are logged and recorded as absent
/// previews rather than failing the whole manifest.
pub fn build_manifest(roms_dir: &Path, rom_files: &[String]) -> Manifest {
    let roms = rom_files
        .iter()
        .map(|file_name| {
            let candidate = preview_candidate(&roms_dir.join(file_name));
            let preview_image_file_path = match probe_preview(Path::new(&candidate)) {
                PreviewStatus::Present => Some(candidate),
                PreviewStatus::Missing => None,
                PreviewStatus::Inaccessible(e) => {
                    log::warn!(
                        "Failed to check preview image {candidate}, treating it as missing: {e}"
                    );
                    None
                }
            };
            RomEntry {
                file_name: file_name.clone(),
                preview_image_file_path,
            }
        })
        .collect();

    Manifest { roms }
}

impl Manifest {
    /// Encode the manifest as compact JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the manifest to `path` as compact JSON, replacing any
    /// existing file.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ManifestError> {
        let contents = self.to_json()?;
        std::fs::write(path, contents).map_err(|e| ManifestError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Count ROMs and resolved previews, for reporting.
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary {
            rom_count: self.roms.len(),
            with_preview: self
                .roms
                .iter()
                .filter(|r| r.preview_image_file_path.is_some())
                .count(),
        }
    }
}

/// Counts derived from a manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestSummary {
    pub rom_count: usize,
    pub with_preview: usize,
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
