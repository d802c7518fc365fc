#![allow(dead_code)]

use numu::cli::{run, AddArgs};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }

    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{:?}", content1);
            println!("  --- Expected content:\n{:?}", content2);
        }
    }
    println!("=== End of Comparison ===\n");
}

fn relative_files(dir: &Path) -> std::collections::HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Copies a fixture project from `tests/projects/<name>` into a fresh temp
/// directory.
pub fn copy_project(name: &str) -> TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    let source = Path::new("tests/projects").join(name);
    for entry in WalkDir::new(&source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(&source).unwrap();
        let target = tmp_dir.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    tmp_dir
}

/// Creates an empty project with `src/features/<feature>/` in place.
pub fn empty_project(feature: &str) -> TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(feature_dir(tmp_dir.path(), feature)).unwrap();
    tmp_dir
}

pub fn feature_dir(project_dir: &Path, feature: &str) -> PathBuf {
    project_dir.join("src/features").join(feature)
}

pub fn add_args(project_dir: &Path, component_name: &str, feature: &str) -> AddArgs {
    AddArgs {
        component_name: component_name.to_string(),
        feature: feature.to_string(),
        css: false,
        no_css: false,
        typescript: false,
        no_typescript: false,
        project_dir: project_dir.to_path_buf(),
        dry_run: false,
    }
}

/// Runs `add` against a copy of the fixture project, compares the resulting
/// feature folder with `tests/expected/<project>`, prints any differences,
/// and asserts that the directories are identical.
pub fn run_and_assert(project: &str, feature: &str, args: impl FnOnce(&Path) -> AddArgs) {
    let tmp_dir = copy_project(project);
    run(args(tmp_dir.path())).unwrap();

    let actual = feature_dir(tmp_dir.path(), feature);
    let expected = Path::new("tests/expected").join(project);
    if dir_diff::is_different(&actual, &expected).unwrap() {
        print_dir_diff(&actual, &expected);
        panic!("Directories differ. See above for details.");
    }
}
