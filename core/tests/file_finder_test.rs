use decomment_core::{DecommentArgs, find_files};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn args_for(path: &Path) -> DecommentArgs {
    DecommentArgs {
        path: path.to_path_buf(),
        no_confirm: true,
    }
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "int x; // note\n").unwrap();
}

#[test]
fn finds_only_allowlisted_extensions_recursively() {
    let dir = tempdir().unwrap();
    let base = dir.path();

    for name in [
        "a.cpp",
        "b.h",
        "c.hpp",
        "d.c",
        "e.cxx",
        "nested/deep/f.cpp",
    ] {
        touch(&base.join(name));
    }
    for name in ["notes.txt", "script.py", "g.cc", "README"] {
        touch(&base.join(name));
    }

    let found = find_files(&args_for(base)).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| {
            p.strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();

    assert_eq!(found.len(), 6);
    assert!(names.contains(&"a.cpp".to_string()));
    assert!(names.iter().any(|n| n.ends_with("f.cpp")));
    assert!(!names.contains(&"notes.txt".to_string()));
    assert!(!names.contains(&"script.py".to_string()));
    assert!(!names.contains(&"g.cc".to_string()));
}

#[test]
fn extension_match_is_case_sensitive() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("UPPER.CPP"));
    touch(&dir.path().join("lower.cpp"));

    let found = find_files(&args_for(dir.path())).unwrap();

    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("lower.cpp"));
}

#[test]
fn results_are_sorted() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("z.cpp"));
    touch(&dir.path().join("a.cpp"));
    touch(&dir.path().join("m.h"));

    let found = find_files(&args_for(dir.path())).unwrap();

    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted);
}

#[test]
fn non_directory_root_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("single.cpp");
    touch(&file);

    assert!(find_files(&args_for(&file)).is_err());
    assert!(find_files(&args_for(&dir.path().join("nope"))).is_err());
}

#[test]
fn empty_tree_yields_no_files() {
    let dir = tempdir().unwrap();
    let found = find_files(&args_for(dir.path())).unwrap();
    assert!(found.is_empty());
}
