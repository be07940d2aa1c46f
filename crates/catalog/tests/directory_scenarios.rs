use catalog::{load_catalog, Catalog, ViewController};
use shared::domain::{Profile, ProfileId};

fn profile(id: &str, name: &str, focus: &str, tags: &[&str]) -> Profile {
    Profile {
        id: ProfileId::new(id),
        name: name.to_string(),
        url: String::new(),
        feed: String::new(),
        background: String::new(),
        focus: focus.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        style: String::new(),
        freq: String::new(),
        lang: String::new(),
    }
}

#[test]
fn twenty_profiles_fill_one_page_then_the_rest() {
    let profiles = (1..=20)
        .map(|n| profile(&format!("p{n}"), &format!("Writer {n}"), "", &[]))
        .collect();
    let mut view = ViewController::new(Catalog::from_profiles(profiles).expect("catalog"));

    assert_eq!(view.visible_result().len(), 12);
    assert!(view.has_more());

    view.load_more();
    assert_eq!(view.visible_result().len(), 20);
    assert!(!view.has_more());
}

#[test]
fn name_substring_search_is_case_insensitive() {
    let catalog = Catalog::from_profiles(vec![
        profile("ada", "Ada Notes", "systems", &["rust", "infra"]),
        profile("other", "Other Blog", "cooking", &["food"]),
    ])
    .expect("catalog");
    let mut view = ViewController::new(catalog);

    view.set_search("ada");
    let ids: Vec<&str> = view.filtered_result().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["ada"]);
}

#[test]
fn selected_tag_matches_padded_profile_tag() {
    let catalog = Catalog::from_profiles(vec![
        profile("padded", "Padded", "", &["RUST", " infra "]),
        profile("plain", "Plain", "", &["web"]),
    ])
    .expect("catalog");
    let mut view = ViewController::new(catalog);

    view.toggle_tag("infra");
    let ids: Vec<&str> = view.filtered_result().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["padded"]);
}

#[test]
fn unmatched_search_yields_empty_views() {
    let mut view = ViewController::new(load_catalog().expect("bundled catalog"));

    view.set_search("zzz-no-match");
    assert!(view.filtered_result().is_empty());
    assert!(view.visible_result().is_empty());
    assert!(!view.has_more());

    view.clear_filters();
    assert_eq!(view.filtered_len(), view.total_len());
}

#[test]
fn bundled_catalog_browses_end_to_end() {
    let mut view = ViewController::new(load_catalog().expect("bundled catalog"));
    let total = view.total_len();
    assert!(total > 12, "bundled dataset should span more than one page");

    view.toggle_tag("infra");
    let infra = view.filtered_result();
    assert!(!infra.is_empty());
    assert!(infra.iter().all(|p| p.tags.iter().any(|t| t.trim() == "infra")));

    while view.has_more() {
        view.load_more();
    }
    assert_eq!(view.visible_result().len(), view.filtered_len());
}
