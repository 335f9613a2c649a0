use super::*;
use crate::extension::ExtensionDescriptor;
use std::path::Path;

fn descriptor(json: &str) -> ExtensionDescriptor {
    ExtensionDescriptor::parse(
        json,
        Path::new("/ext/x/package.json"),
        Path::new("/ext"),
        Path::new("/ext/x"),
    )
    .unwrap()
}

fn registry(items: &[&str]) -> ExtensionRegistry {
    items
        .iter()
        .map(|json| {
            let d = descriptor(json);
            (d.name.clone(), d)
        })
        .collect()
}

#[test]
fn test_project_injects_name() {
    let registry = registry(&[
        r#"{"name":"foo","version":"1","jupyterlab":{"_build":{"load":"static/foo.js","extension":"./extension"}}}"#,
    ]);

    let list = project(&registry).unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "foo");
    assert_eq!(list[0].build["load"], "static/foo.js");
}

#[test]
fn test_project_descriptor_name_wins_over_build_name() {
    let registry = registry(&[
        r#"{"name":"@org/real","version":"1","jupyterlab":{"_build":{"name":"stale","load":"a.js"}}}"#,
    ]);

    let list = project(&registry).unwrap();

    assert_eq!(list[0].name, "@org/real");
    assert!(!list[0].build.contains_key("name"));

    // シリアライズ結果に name キーは 1 つだけ
    let json = serde_json::to_value(&list[0]).unwrap();
    assert_eq!(json["name"], "@org/real");
    assert_eq!(json["load"], "a.js");
}

#[test]
fn test_project_preserves_registry_order() {
    let registry = registry(&[
        r#"{"name":"zeta","version":"1","jupyterlab":{"_build":{}}}"#,
        r#"{"name":"alpha","version":"1","jupyterlab":{"_build":{}}}"#,
        r#"{"name":"mid","version":"1","jupyterlab":{"_build":{}}}"#,
    ]);

    let names: Vec<_> = project(&registry)
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();

    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_project_size_matches_registry() {
    let registry = registry(&[
        r#"{"name":"a","version":"1","jupyterlab":{"_build":{"load":"a"}}}"#,
        r#"{"name":"b","version":"1","jupyterlab":{"_build":{"load":"b"}}}"#,
    ]);

    let list = project(&registry).unwrap();

    assert_eq!(list.len(), registry.len());
    for (built, (name, _)) in list.iter().zip(registry.iter()) {
        assert_eq!(&built.name, name);
    }
}

#[test]
fn test_project_missing_build_is_error() {
    let registry = registry(&[
        r#"{"name":"ok","version":"1","jupyterlab":{"_build":{"load":"ok.js"}}}"#,
        r#"{"name":"nobuild","version":"1","jupyterlab":{"extension":true}}"#,
    ]);

    match project(&registry) {
        Err(ShellError::MissingBuildInfo(name)) => assert_eq!(name, "nobuild"),
        other => panic!("Expected MissingBuildInfo, got: {:?}", other),
    }
}

#[test]
fn test_project_missing_plugin_section_is_error() {
    let registry = registry(&[r#"{"name":"bare","version":"1"}"#]);

    assert!(matches!(
        project(&registry),
        Err(ShellError::MissingBuildInfo(_))
    ));
}

#[test]
fn test_project_empty_registry() {
    assert!(project(&ExtensionRegistry::new()).unwrap().is_empty());
}
