//! Integration tests for filekit-core.
//!
//! These tests exercise whole workflows against a real filesystem.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use filekit_core::FileKitError;
use filekit_core::NoopProgress;
use filekit_core::dirs;
use filekit_core::files;
use filekit_core::lines;
use filekit_core::pack_directory;
use filekit_core::packaging::PackConfig;
use filekit_core::packaging::pack_directory_with;
use filekit_core::text;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

fn zip_contents(archive: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut zip = ZipArchive::new(File::open(archive).unwrap()).unwrap();
    (0..zip.len())
        .map(|i| {
            let mut entry = zip.by_index(i).unwrap();
            let mut data = Vec::new();
            entry.read_to_end(&mut data).unwrap();
            (entry.name().to_string(), data)
        })
        .collect()
}

#[test]
fn test_build_tree_with_helpers_then_pack() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("export");

    text::write_string(source.join("readme.txt"), "read me").unwrap();
    lines::write_lines(source.join("lists/hosts.txt"), &["alpha", "beta"]).unwrap();
    lines::add_line(source.join("lists/hosts.txt"), "gamma").unwrap();
    files::touch(source.join("empty/marker")).unwrap();

    let archive = temp.path().join("dist/export.zip");
    let report = pack_directory(&source, &archive).unwrap();

    let entries = zip_contents(&archive);
    assert_eq!(report.files_added, 3);
    assert_eq!(entries["readme.txt"], b"read me");
    assert_eq!(entries["hosts.txt"], b"alpha\nbeta\ngamma\n");
    assert!(entries["marker"].is_empty());
    assert!(entries.keys().all(|name| !name.contains('/')));
}

#[test]
fn test_many_files_one_entry_each() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("many");
    for i in 0..40 {
        let sub = source.join(format!("d{}", i % 4));
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join(format!("f{i:02}.bin")), vec![i as u8; i + 1]).unwrap();
    }
    let archive = temp.path().join("many.zip");

    let report = pack_directory(&source, &archive).unwrap();

    let entries = zip_contents(&archive);
    assert_eq!(entries.len(), 40);
    assert_eq!(report.files_added, 40);
    assert_eq!(report.directories_visited, 5);
    for i in 0..40usize {
        assert_eq!(entries[&format!("f{i:02}.bin")], vec![i as u8; i + 1]);
    }
}

#[test]
fn test_pack_copy_of_tree_matches_original() {
    let temp = TempDir::new().unwrap();
    let original = temp.path().join("original");
    let copy = temp.path().join("copy");
    text::write_string(original.join("a/one.txt"), "1").unwrap();
    text::write_string(original.join("b/two.txt"), "2").unwrap();

    dirs::copy_directory(&original, &copy).unwrap();

    let first = temp.path().join("first.zip");
    let second = temp.path().join("second.zip");
    pack_directory(&original, &first).unwrap();
    pack_directory(&copy, &second).unwrap();

    assert_eq!(zip_contents(&first), zip_contents(&second));
}

#[test]
fn test_pack_after_clear_is_empty() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("scratch");
    text::write_string(source.join("tmp/a.txt"), "a").unwrap();

    dirs::clear_directory(&source).unwrap();
    let archive = temp.path().join("scratch.zip");
    let report = pack_directory(&source, &archive).unwrap();

    assert_eq!(report.files_added, 0);
    assert!(zip_contents(&archive).is_empty());
}

#[test]
fn test_pack_missing_source_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("out/never.zip");

    let err = pack_directory(temp.path().join("absent"), &archive).unwrap_err();

    assert!(matches!(err, FileKitError::PathNotFound { .. }));
    assert!(!archive.exists());
    assert!(!archive.parent().unwrap().exists());
}

#[test]
fn test_pack_with_relative_dot_segments() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("src");
    text::write_string(source.join("x.txt"), "x").unwrap();

    let messy = temp.path().join("src/../src/./");
    let archive = temp.path().join("messy.zip");
    pack_directory_with(&messy, &archive, &PackConfig::default(), &mut NoopProgress).unwrap();

    assert_eq!(zip_contents(&archive).keys().collect::<Vec<_>>(), ["x.txt"]);
}

#[test]
fn test_list_names_agree_with_archive_without_duplicates() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("tree");
    text::write_string(source.join("p/one.txt"), "1").unwrap();
    text::write_string(source.join("q/two.txt"), "2").unwrap();
    text::write_string(source.join("q/r/three.txt"), "3").unwrap();

    let mut listed: Vec<String> = dirs::list_file_names(&source)
        .unwrap()
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    listed.sort();

    let archive = temp.path().join("tree.zip");
    pack_directory(&source, &archive).unwrap();
    let packed: Vec<String> = zip_contents(&archive).into_keys().collect();

    assert_eq!(listed, packed);
}

#[test]
fn test_file_metadata_workflow() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("meta/data.txt");

    assert!(!files::exists(&path));
    assert!(files::is_empty(&path));

    text::add_string(&path, "12345").unwrap();
    let info = files::metadata(&path).unwrap();
    assert_eq!(info.size, 5);
    assert!(!info.is_dir);
    assert_eq!(files::file_size(&path).unwrap(), 5);
    assert!(!files::is_empty(&path));

    assert!(files::delete_file(&path));
    assert!(!files::delete_file(&path));
    assert!(files::metadata(&path).unwrap_err().is_not_found());
}
