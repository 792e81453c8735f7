//! Generates a `roms.json` manifest for a directory of NES ROM files.
//!
//! The pipeline has three stages: list the `.nes` files in a directory
//! ([`scanner`]), pair each with its preview image if one exists
//! ([`manifest`]), and write the result as compact JSON next to the ROMs.
//! [`generate_manifest_file`] runs all three.

use std::path::{Path, PathBuf};

pub mod error;
pub mod manifest;
pub mod scanner;

pub use error::ManifestError;
pub use manifest::{Manifest, ManifestSummary, PreviewStatus, RomEntry};

/// File name of the generated manifest, inside the ROMs directory.
pub const MANIFEST_FILE_NAME: &str = "roms.json";

/// Path the manifest is written to for a given ROMs directory.
pub fn manifest_path(roms_dir: &Path) -> PathBuf {
    roms_dir.join(MANIFEST_FILE_NAME)
}

/// Scan `roms_dir`, build the manifest, and write it to `target`.
///
/// Returns the manifest that was written. The target file is replaced
/// whole; nothing is written when scanning fails.
pub fn generate_manifest_file(roms_dir: &Path, target: &Path) -> Result<Manifest, ManifestError> {
    let rom_files = scanner::list_rom_files(roms_dir)?;
    let manifest = manifest::build_manifest(roms_dir, &rom_files);
    manifest.write_to_file(target)?;

    log::debug!(
        "Wrote manifest for {} ROMs to {}",
        manifest.roms.len(),
        target.display()
    );
    Ok(manifest)
}
