#![cfg(test)]

use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::*;

fn write_archive(path: &Path, dirs: &[&str], files: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for dir in dirs {
        writer.add_directory(*dir, SimpleFileOptions::default()).unwrap();
    }
    for (name, contents) in files {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_unzip() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("archive.zip");
    write_archive(
        &archive,
        &["empty/"],
        &[("top.txt", "top"), ("nested/deeper/file.txt", "deep")],
    );

    let target = dir.path().join("out");
    assert_eq!(unzip(&archive, &target).unwrap(), 2, "Only files should be counted.");

    assert_eq!(fs::read_to_string(target.join("top.txt")).unwrap(), "top");
    assert_eq!(
        fs::read_to_string(target.join("nested/deeper/file.txt")).unwrap(),
        "deep",
        "Missing parent directories should be created."
    );
    assert!(target.join("empty").is_dir());

    assert_eq!(unzip(&archive, &target).unwrap(), 2, "Extracting again should overwrite.");
}

#[test]
fn test_unzip_rejects_escaping_entries() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("evil.zip");
    write_archive(&archive, &[], &[("fine.txt", "ok"), ("../escaped.txt", "gotcha")]);

    let target = dir.path().join("out");
    let error = unzip(&archive, &target).unwrap_err();
    assert!(error.is_unsafe_entry(), "Unexpected error: {error}");
    assert_eq!(
        error.to_string(),
        "Archive entry ../escaped.txt would extract outside of the target directory!"
    );
    assert!(!target.join("fine.txt").exists(), "Nothing should be written for an unsafe archive.");
    assert!(!dir.path().join("escaped.txt").exists());
}

#[test]
fn test_unzip_errors() {
    let dir = TempDir::new().unwrap();
    let missing = unzip(dir.path().join("missing.zip"), dir.path()).unwrap_err();
    assert!(missing.is_io());

    let garbage = unzip_from(Cursor::new(b"not a zip".to_vec()), dir.path()).unwrap_err();
    assert!(garbage.is_zip());
}
