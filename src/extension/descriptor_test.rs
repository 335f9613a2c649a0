use super::*;

fn parse(content: &str) -> Result<ExtensionDescriptor> {
    ExtensionDescriptor::parse(
        content,
        Path::new("/ext/foo/package.json"),
        Path::new("/ext"),
        Path::new("/ext/foo"),
    )
}

#[test]
fn test_parse_minimal_applies_defaults() {
    let descriptor = parse(r#"{"name":"foo","version":"1.0.0"}"#).unwrap();

    assert_eq!(descriptor.name, "foo");
    assert_eq!(descriptor.version, "1.0.0");
    assert_eq!(descriptor.description, "");
    assert!(descriptor.dependencies.is_empty());
    assert_eq!(descriptor.plugin_metadata, PluginMetadata::default());
    assert!(!descriptor.is_local);
    assert!(descriptor.install_info.is_none());
    assert_eq!(descriptor.source_root, PathBuf::from("/ext"));
    assert_eq!(descriptor.package_directory, PathBuf::from("/ext/foo"));
}

#[test]
fn test_parse_full_descriptor() {
    let descriptor = parse(
        r#"{
            "name": "@org/foo",
            "version": "0.2.0",
            "description": "Foo extension",
            "dependencies": {"@jupyterlab/application": "^3.0.0"},
            "jupyterlab": {
                "extension": true,
                "outputDir": "foo/labextension",
                "_build": {"load": "static/remoteEntry.js", "extension": "./extension"}
            }
        }"#,
    )
    .unwrap();

    assert_eq!(descriptor.description, "Foo extension");
    assert_eq!(
        descriptor.dependencies.get("@jupyterlab/application"),
        Some(&"^3.0.0".to_string())
    );
    let build = descriptor.plugin_metadata.build.as_ref().unwrap();
    assert_eq!(build["load"], "static/remoteEntry.js");
    assert_eq!(
        descriptor.plugin_metadata.output_dir.as_deref(),
        Some("foo/labextension")
    );
    assert_eq!(descriptor.plugin_metadata.extra["extension"], true);
    assert_eq!(
        descriptor.output_dir(),
        PathBuf::from("/ext/foo/foo/labextension")
    );
}

#[test]
fn test_parse_missing_name_is_malformed() {
    let err = parse(r#"{"version":"1.0.0"}"#).unwrap_err();

    match err {
        ShellError::MalformedPackage { path, reason } => {
            assert_eq!(path, PathBuf::from("/ext/foo/package.json"));
            assert!(reason.contains("name"));
        }
        e => panic!("Expected MalformedPackage, got: {:?}", e),
    }
}

#[test]
fn test_parse_missing_version_is_malformed() {
    let err = parse(r#"{"name":"foo"}"#).unwrap_err();

    assert!(matches!(err, ShellError::MalformedPackage { ref reason, .. } if reason.contains("version")));
}

#[test]
fn test_parse_invalid_json_is_malformed() {
    let err = parse("{ not json").unwrap_err();

    assert!(matches!(err, ShellError::MalformedPackage { .. }));
}

#[test]
fn test_parse_non_object_is_malformed() {
    assert!(matches!(
        parse("[]").unwrap_err(),
        ShellError::MalformedPackage { .. }
    ));
}

#[test]
fn test_parse_build_section_must_be_object() {
    let err = parse(r#"{"name":"foo","version":"1","jupyterlab":{"_build":"oops"}}"#).unwrap_err();

    assert!(matches!(err, ShellError::MalformedPackage { .. }));
}

#[test]
fn test_output_dir_defaults_to_labextension() {
    let descriptor = parse(r#"{"name":"foo","version":"1.0.0"}"#).unwrap();

    assert_eq!(descriptor.output_dir(), PathBuf::from("/ext/foo/labextension"));
}

#[test]
fn test_serialize_uses_camel_case_keys() {
    let descriptor = parse(r#"{"name":"foo","version":"1.0.0"}"#).unwrap();

    let json = serde_json::to_value(&descriptor).unwrap();

    assert_eq!(json["packageDirectory"], "/ext/foo");
    assert_eq!(json["isLocal"], false);
    assert!(json.get("installInfo").is_none());
}
