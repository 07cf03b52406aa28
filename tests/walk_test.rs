use small_demos::core::walk::walk_tree;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_every_entry_is_visited_exactly_once() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("b")).unwrap();
    fs::write(root.join("b").join("c.txt"), "c").unwrap();

    let mut visited: Vec<(String, PathBuf)> = Vec::new();
    walk_tree(root, |name, rel| {
        visited.push((name.to_string(), rel.to_path_buf()));
    })
    .unwrap();

    visited.sort();
    let expected = vec![
        ("a.txt".to_string(), PathBuf::from("a.txt")),
        ("b".to_string(), PathBuf::from("b")),
        ("c.txt".to_string(), PathBuf::from("b").join("c.txt")),
    ];
    assert_eq!(visited, expected);
}

#[test]
fn test_hidden_entries_are_not_filtered() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".hidden"), "h").unwrap();

    let mut visited = Vec::new();
    walk_tree(root, |name, _| visited.push(name.to_string())).unwrap();

    assert_eq!(visited, vec![".hidden".to_string()]);
}

#[test]
fn test_missing_root_aborts_with_an_error_before_any_visit() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let mut visits = 0;
    let result = walk_tree(&missing, |_, _| visits += 1);

    assert!(result.is_err());
    assert_eq!(visits, 0);
}
