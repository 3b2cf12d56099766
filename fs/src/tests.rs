use crate::shellpath;
use crate::vfs::{FileSystem, VfsError};
use crate::{HostFs, RamFs};

#[test]
fn ramfs_file_roundtrip() {
    let mut fs = RamFs::new();
    fs.add_dir("0:\\notes").unwrap();
    fs.write_all("0:\\notes\\hello.txt", "hello vfs").unwrap();

    assert!(fs.exists("0:\\notes\\hello.txt"));
    assert_eq!(fs.read_to_string("0:\\notes\\hello.txt").unwrap(), "hello vfs");
}

#[test]
fn ramfs_list_contains_created_entries() {
    let mut fs = RamFs::new();
    fs.add_dir("0:\\a").unwrap();
    fs.add_file("0:\\a\\x.txt", "x").unwrap();
    fs.add_dir("0:\\a\\sub").unwrap();

    let entries = fs.list_dir("0:\\a").unwrap();
    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["sub", "x.txt"]);
    assert!(entries.iter().any(|e| e.name == "sub" && e.is_dir));
    assert!(entries.iter().any(|e| e.name == "x.txt" && !e.is_dir));
    assert_eq!(entries[1].full_path, "0:\\a\\x.txt");
}

#[test]
fn ramfs_root_listing() {
    let mut fs = RamFs::new();
    fs.add_dir("0:\\Documents").unwrap();
    let entries = fs.list_dir("0:\\").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].full_path, "0:\\Documents");
}

#[test]
fn ramfs_remove_refuses_nonempty_dir() {
    let mut fs = RamFs::new();
    fs.add_file("0:\\d\\f.txt", "x").unwrap();
    assert_eq!(fs.remove("0:\\d"), Err(VfsError::IsDirectory));
    fs.remove("0:\\d\\f.txt").unwrap();
    fs.remove("0:\\d").unwrap();
    assert!(!fs.exists("0:\\d"));
}

#[test]
fn ramfs_missing_paths_report_not_found() {
    let fs = RamFs::new();
    assert_eq!(fs.read_to_string("0:\\nope.txt"), Err(VfsError::NotFound));
    assert_eq!(fs.list_dir("0:\\nope"), Err(VfsError::NotFound));
    assert!(!fs.exists("0:\\nope"));
    assert!(fs.exists("0:\\"));
    assert!(fs.is_dir("0:\\"));
}

#[test]
fn read_lines_drops_terminating_newline() {
    let mut fs = RamFs::new();
    fs.add_file("0:\\f.txt", "one\ntwo\nthree\n").unwrap();
    assert_eq!(
        fs.read_lines("0:\\f.txt").unwrap(),
        vec!["one", "two", "three"]
    );
}

#[test]
fn hostfs_roundtrip_in_temp_dir() {
    let root = std::env::temp_dir().join(format!("vesper-hostfs-{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();

    let mut fs = HostFs::new(&root);
    fs.create_dir("0:\\sub").unwrap();
    fs.write_all("0:\\sub\\f.txt", "payload\n").unwrap();

    assert!(fs.exists("0:\\sub\\f.txt"));
    assert!(fs.is_dir("0:\\sub"));
    assert_eq!(fs.read_lines("0:\\sub\\f.txt").unwrap(), vec!["payload"]);

    let entries = fs.list_dir("0:\\sub").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "f.txt");

    fs.remove("0:\\sub\\f.txt").unwrap();
    fs.remove("0:\\sub").unwrap();
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn shellpath_relative_paths_are_rejected() {
    let fs = RamFs::new();
    assert_eq!(fs.list_dir("Documents"), Err(VfsError::InvalidPath));
    assert!(!shellpath::is_absolute("C:\\x"));
    assert!(shellpath::is_absolute("0:\\x"));
}
