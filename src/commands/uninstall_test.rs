use super::*;
use tempfile::TempDir;

fn setup() -> (TempDir, FrontendPaths) {
    let temp = TempDir::new().unwrap();
    let paths = FrontendPaths::new(temp.path().to_path_buf(), None);
    std::fs::create_dir_all(paths.extensions_dir.join("ext-a")).unwrap();
    std::fs::create_dir_all(paths.extensions_dir.join("@org/ext-b")).unwrap();
    std::fs::write(temp.path().join("keep.txt"), "keep").unwrap();
    (temp, paths)
}

#[test]
fn test_uninstall_removes_extension() {
    let (_temp, paths) = setup();

    uninstall(&RealFs, &paths, "ext-a").unwrap();

    assert!(!paths.extensions_dir.join("ext-a").exists());
    assert!(paths.extensions_dir.join("@org/ext-b").exists());
}

#[test]
fn test_uninstall_scoped_extension() {
    let (_temp, paths) = setup();

    uninstall(&RealFs, &paths, "@org/ext-b").unwrap();

    assert!(!paths.extensions_dir.join("@org/ext-b").exists());
}

#[test]
fn test_uninstall_outside_root_is_rejected() {
    let (temp, paths) = setup();

    let result = uninstall(&RealFs, &paths, "../keep.txt");

    assert!(matches!(result, Err(ShellError::InvalidArgument(_))));
    assert!(temp.path().join("keep.txt").exists());
}

#[test]
fn test_uninstall_root_itself_is_rejected() {
    let (_temp, paths) = setup();

    let result = uninstall(&RealFs, &paths, ".");

    assert!(matches!(result, Err(ShellError::InvalidArgument(_))));
    assert!(paths.extensions_dir.exists());
}

#[test]
fn test_uninstall_missing_extension_is_error() {
    let (_temp, paths) = setup();

    let result = uninstall(&RealFs, &paths, "nope");

    assert!(matches!(result, Err(ShellError::InvalidArgument(_))));
}
