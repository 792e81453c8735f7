use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::error::ManifestError;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"").expect("failed to create test file");
}

#[test]
fn lists_only_nes_files_sorted() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "zelda.nes");
    touch(tmp.path(), "mario.nes");
    touch(tmp.path(), "mario.png");
    touch(tmp.path(), "readme.txt");

    let files = list_rom_files(tmp.path()).unwrap();
    assert_eq!(files, vec!["mario.nes", "zelda.nes"]);
}

#[test]
fn extension_match_is_case_sensitive() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "MARIO.NES");
    touch(tmp.path(), "contra.Nes");
    touch(tmp.path(), "kirby.nes");

    let files = list_rom_files(tmp.path()).unwrap();
    assert_eq!(files, vec!["kirby.nes"]);
}

#[test]
fn subdirectories_are_excluded_even_with_matching_names() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("games.nes")).unwrap();
    touch(tmp.path(), "metroid.nes");

    let files = list_rom_files(tmp.path()).unwrap();
    assert_eq!(files, vec!["metroid.nes"]);
}

#[test]
fn dotfile_named_nes_has_no_extension() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), ".nes");
    touch(tmp.path(), "punchout.nes");

    let files = list_rom_files(tmp.path()).unwrap();
    assert_eq!(files, vec!["punchout.nes"]);
}

#[test]
fn empty_directory_lists_nothing() {
    let tmp = TempDir::new().unwrap();

    let files = list_rom_files(tmp.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn missing_directory_is_a_directory_access_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("no-such-dir");

    let err = list_rom_files(&missing).unwrap_err();
    assert!(matches!(err, ManifestError::DirectoryAccess { .. }));
}
