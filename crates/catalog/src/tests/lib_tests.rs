use super::*;

fn profile(id: &str, tags: &[&str]) -> Profile {
    Profile {
        id: ProfileId::new(id),
        name: id.to_string(),
        url: String::new(),
        feed: String::new(),
        background: String::new(),
        focus: String::new(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        style: String::new(),
        freq: String::new(),
        lang: String::new(),
    }
}

#[test]
fn bundled_catalog_loads_with_tags() {
    let catalog = load_catalog().expect("bundled catalog");
    assert!(!catalog.is_empty());
    assert!(!catalog.tags().is_empty());
    assert!(catalog.get(&ProfileId::new("ada-notes")).is_some());
}

#[test]
fn tag_universe_trims_dedupes_and_sorts() {
    let profiles = vec![
        profile("a", &["rust", " infra "]),
        profile("b", &["infra", "cli", "   "]),
        profile("c", &[]),
        profile("d", &["Rust", "rust "]),
    ];

    assert_eq!(tag_universe(&profiles), vec!["Rust", "cli", "infra", "rust"]);
}

#[test]
fn tag_universe_of_empty_catalog_is_empty() {
    assert!(tag_universe(&[]).is_empty());
}

#[test]
fn bundled_tag_universe_is_strictly_ascending() {
    let catalog = Catalog::bundled().expect("bundled catalog");
    for pair in catalog.tags().windows(2) {
        assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
    }
    for tag in catalog.tags() {
        assert_eq!(tag, tag.trim());
        assert!(!tag.is_empty());
    }
}

#[test]
fn rejects_duplicate_profile_ids() {
    let err = Catalog::from_profiles(vec![profile("dup", &[]), profile("dup", &["x"])])
        .expect_err("duplicate ids must be rejected");
    assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "dup"));
}

#[test]
fn parses_records_with_missing_optional_fields() {
    let catalog = Catalog::from_json_str(r#"[{"id": "solo", "name": "Solo"}]"#).expect("catalog");
    let solo = catalog.get(&ProfileId::new("solo")).expect("solo profile");
    assert!(solo.tags.is_empty());
    assert!(solo.feed.is_empty());
    assert!(catalog.tags().is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Catalog::from_json_str("{not json").expect_err("parse failure");
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn loads_catalog_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id": "one", "name": "One", "tags": ["a"]}, {"id": "two", "name": "Two", "tags": [" b"]}]"#,
    )
    .expect("write catalog");

    let catalog = Catalog::from_path(&path).expect("catalog from file");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.tags(), ["a".to_string(), "b".to_string()]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    let err = Catalog::from_path(&path).expect_err("missing file");
    match err {
        CatalogError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
