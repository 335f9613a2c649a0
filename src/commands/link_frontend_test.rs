use super::*;
use tempfile::TempDir;

fn built_frontend(dir: &Path) {
    std::fs::create_dir_all(dir.join("static")).unwrap();
    std::fs::write(dir.join(TEMPLATE_SOURCE), "{{{json page_config}}}").unwrap();
    std::fs::write(dir.join("static/main.js"), "main").unwrap();
}

#[test]
fn test_link_frontend_copies_into_app_dir() {
    let temp = TempDir::new().unwrap();
    let paths = FrontendPaths::new(temp.path().join("home"), None);
    let src = temp.path().join("build");
    built_frontend(&src);

    let dest = link_frontend(&RealFs, &paths, &src, false).unwrap();

    assert_eq!(dest, paths.global_app_dir);
    assert_eq!(
        std::fs::read_to_string(dest.join("static/main.js")).unwrap(),
        "main"
    );
    assert!(!std::fs::symlink_metadata(&dest).unwrap().is_symlink());
}

#[cfg(unix)]
#[test]
fn test_link_frontend_development_symlinks() {
    let temp = TempDir::new().unwrap();
    let paths = FrontendPaths::new(temp.path().join("home"), None);
    let src = temp.path().join("build");
    built_frontend(&src);

    let dest = link_frontend(&RealFs, &paths, &src, true).unwrap();

    assert!(std::fs::symlink_metadata(&dest).unwrap().is_symlink());
}

#[test]
fn test_link_frontend_replaces_previous_copy() {
    let temp = TempDir::new().unwrap();
    let paths = FrontendPaths::new(temp.path().join("home"), None);
    let src = temp.path().join("build");
    built_frontend(&src);
    std::fs::create_dir_all(&paths.global_app_dir).unwrap();
    std::fs::write(paths.global_app_dir.join("stale.js"), "old").unwrap();

    link_frontend(&RealFs, &paths, &src, false).unwrap();

    assert!(!paths.global_app_dir.join("stale.js").exists());
}

#[test]
fn test_link_frontend_requires_template() {
    let temp = TempDir::new().unwrap();
    let paths = FrontendPaths::new(temp.path().join("home"), None);

    let err = link_frontend(&RealFs, &paths, temp.path(), false).unwrap_err();

    assert!(err.contains(TEMPLATE_SOURCE));
}
