use compext_core::manifest::{DefaultVersion, Dependency, Manifest};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

#[test]
fn test_parse_buildpack_manifest_fixture() {
    let path = fixtures_dir().join("buildpack-manifest.yml");
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(
        manifest.default_versions,
        vec![
            DefaultVersion {
                name: "Testlang".to_string(),
                version: "11.0.1".to_string(),
            },
            DefaultVersion {
                name: "SomethingElse".to_string(),
                version: "0.0.1".to_string(),
            },
        ]
    );
    assert_eq!(manifest.dependencies.len(), 3);
    assert_eq!(
        manifest.dependencies[2],
        Dependency {
            name: "Testlang".to_string(),
            version: "11.0.1".to_string(),
        }
    );
}

#[test]
fn test_parse_missing_sections_fixture() {
    let path = fixtures_dir().join("missing-sections.yml");
    let manifest = Manifest::from_path(&path).unwrap();
    assert!(manifest.default_versions.is_empty());
    assert!(manifest.dependencies.is_empty());
}

#[test]
fn test_parse_empty_sections_fixture() {
    let path = fixtures_dir().join("empty-sections.yml");
    let manifest = Manifest::from_path(&path).unwrap();
    assert_eq!(manifest, Manifest::default());
}

#[test]
fn test_parse_invalid_missing_version_fixture() {
    let path = fixtures_dir().join("invalid-missing-version.yml");
    let result = Manifest::from_path(&path);
    assert!(result.is_err(), "Default without a version should fail to parse");
}

#[test]
fn test_parse_malformed_fixture() {
    let path = fixtures_dir().join("malformed.yml");
    let err = Manifest::from_path(&path).unwrap_err();
    assert!(
        err.to_string().contains("Failed to parse manifest.yml"),
        "got: {err}"
    );
}

#[test]
fn test_parse_nonexistent_fixture() {
    let path = fixtures_dir().join("does-not-exist.yml");
    let err = Manifest::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}

#[test]
fn test_parse_sequence_root_fails() {
    let result = Manifest::from_str("- name: Testlang\n  version: 1.0.0\n");
    assert!(result.is_err());
}

#[test]
fn test_parse_record_with_extra_fields() {
    let manifest = Manifest::from_str(
        r#"
dependencies:
  - name: Testlang
    version: 2.0.0
    sha256: deadbeef
    modules: [a, b]
"#,
    )
    .unwrap();
    assert_eq!(manifest.versions_of("Testlang").collect::<Vec<_>>(), vec!["2.0.0"]);
}

#[test]
fn test_parse_directory_is_a_read_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join("manifest.yml"), "default_versions: []\n").unwrap();
    let nested = tmp.path().join("other-buildpack");
    std::fs::create_dir(&nested).unwrap();

    let err = Manifest::from_path(&nested).unwrap_err();
    assert!(err.to_string().contains("Failed to read"), "got: {err}");
}
