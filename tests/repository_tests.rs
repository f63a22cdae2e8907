//! Library-level tests for the repository and query engine over a real file

use kahawat::application::{Origin, ProverbRepository};
use kahawat::domain::query::{compute_view, filter_by_region, filter_by_tag, search_text};
use kahawat::domain::{Entry, Proverb, ALL_REGIONS, ALL_TAGS};
use kahawat::infrastructure::JsonFileStore;
use kahawat::KahawatError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open(dir: &Path) -> ProverbRepository {
    ProverbRepository::load(JsonFileStore::new(dir.join("proverbs.json"))).unwrap()
}

fn proverbs(repo: &ProverbRepository) -> Vec<Proverb> {
    repo.entries().iter().map(|e| e.proverb.clone()).collect()
}

fn texts(view: &[&Entry]) -> Vec<String> {
    view.iter().map(|e| e.proverb.text.clone()).collect()
}

#[test]
fn test_save_then_load_round_trip() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("proverbs.json"), "[]").unwrap();
    let mut repo = open(temp.path());

    let mut full = Proverb::new("ओ नौका सेहो अनैत अछि");
    full.transliteration = "o nauka seho anait achhi".to_string();
    full.meaning = "With every problem comes a solution".to_string();
    full.english_equivalent = "Every cloud has a silver lining".to_string();
    full.tags = vec!["z".to_string(), "a".to_string(), "z".to_string()];
    full.region = "Mithila".to_string();
    full.usage_context = "Encouragement".to_string();
    repo.add(full).unwrap();
    repo.add(Proverb::default()).unwrap();

    let reloaded = open(temp.path());
    assert_eq!(reloaded.origin(), Origin::Document);
    assert_eq!(proverbs(&reloaded), proverbs(&repo));
    assert_eq!(reloaded.entries()[0].proverb.tags, vec!["z", "a", "z"]);
}

#[test]
fn test_seed_bootstrap_persists() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());
    assert_eq!(repo.origin(), Origin::Seed);
    assert_eq!(repo.len(), 7);

    let reloaded = open(temp.path());
    assert_eq!(reloaded.origin(), Origin::Document);
    assert_eq!(proverbs(&reloaded), proverbs(&repo));
}

#[test]
fn test_seed_view_identity_without_filters() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());

    let view = compute_view(repo.entries(), "", ALL_TAGS, ALL_REGIONS);
    let all: Vec<&Entry> = repo.entries().iter().collect();
    assert_eq!(view, all);
}

#[test]
fn test_seed_search_safe_finds_nothing() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());

    // "Better safe than sorry" is only in the english equivalent, which is not searched
    let view = compute_view(repo.entries(), "safe", ALL_TAGS, ALL_REGIONS);
    assert!(view.is_empty());
}

#[test]
fn test_seed_preparation_tag_finds_one() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());

    let view = compute_view(repo.entries(), "", "preparation", ALL_REGIONS);
    assert_eq!(texts(&view), vec!["थारी मे भात, हाथ मे लाठी"]);
}

#[test]
fn test_filters_are_order_preserving_subsequences() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());
    let entries = repo.entries();

    let positions = |view: &[&Entry]| -> Vec<usize> {
        view.iter()
            .map(|v| entries.iter().position(|e| e.id == v.id).unwrap())
            .collect()
    };

    for view in [
        filter_by_tag(entries, "wisdom"),
        filter_by_region(entries, "Mithila"),
        search_text(entries, "a"),
        compute_view(entries, "pani", "trouble", "Mithila"),
    ] {
        let idx = positions(&view);
        assert!(idx.windows(2).all(|w| w[0] < w[1]), "reordered: {:?}", idx);
    }
}

#[test]
fn test_added_region_appears_in_all_regions() {
    let temp = TempDir::new().unwrap();
    let mut repo = open(temp.path());
    assert_eq!(repo.all_regions(), vec!["Darbhanga", "Mithila"]);

    let mut fresh = Proverb::new("New");
    fresh.region = "Madhubani".to_string();
    repo.add(fresh).unwrap();
    assert_eq!(repo.all_regions(), vec!["Darbhanga", "Madhubani", "Mithila"]);

    let mut existing = Proverb::new("Another");
    existing.region = "Mithila".to_string();
    repo.add(existing).unwrap();
    assert_eq!(repo.all_regions().len(), 3);

    repo.add(Proverb::new("No region")).unwrap();
    assert_eq!(repo.all_regions().len(), 3);
}

#[test]
fn test_all_tags_is_sorted_union() {
    let temp = TempDir::new().unwrap();
    let repo = open(temp.path());
    let tags = repo.all_tags();

    let mut expected: Vec<String> = repo
        .entries()
        .iter()
        .flat_map(|e| e.proverb.tags.clone())
        .collect();
    expected.sort();
    expected.dedup();
    assert_eq!(tags, expected);
    assert_eq!(tags.len(), 14);
}

#[test]
fn test_delete_missing_text_is_noop_on_disk() {
    let temp = TempDir::new().unwrap();
    let mut repo = open(temp.path());
    let before = proverbs(&repo);

    assert!(!repo.delete_by_text("not a proverb").unwrap());
    assert_eq!(proverbs(&repo), before);
    assert_eq!(proverbs(&open(temp.path())), before);
}

#[test]
fn test_update_by_text_persists() {
    let temp = TempDir::new().unwrap();
    let mut repo = open(temp.path());

    let mut replacement = repo.entries()[3].proverb.clone();
    replacement.meaning = "Effort without reward".to_string();
    let target = repo.entries()[3].proverb.text.clone();
    assert!(repo.update_by_text(&target, replacement).unwrap());

    let reloaded = open(temp.path());
    assert_eq!(reloaded.entries()[3].proverb.meaning, "Effort without reward");
}

#[test]
fn test_malformed_document_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("proverbs.json"), "{\"proverb\": \"not a list\"}").unwrap();

    let result = ProverbRepository::load(JsonFileStore::new(temp.path().join("proverbs.json")));
    assert!(matches!(result, Err(KahawatError::MalformedDocument { .. })));
    assert_eq!(
        fs::read_to_string(temp.path().join("proverbs.json")).unwrap(),
        "{\"proverb\": \"not a list\"}"
    );
}

#[test]
fn test_wrong_typed_fields_still_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("proverbs.json");
    fs::write(
        &path,
        r#"[{"proverb":"a","region":null,"tags":["x",3]}, 5, {"proverb":"b","region":"Mithila"}]"#,
    )
    .unwrap();

    let repo = open(temp.path());
    assert_eq!(repo.origin(), Origin::Document);
    assert_eq!(repo.len(), 3);
    assert_eq!(repo.all_tags(), vec!["", "x"]);
    assert_eq!(repo.all_regions(), vec!["Mithila"]);
    assert_eq!(texts(&compute_view(repo.entries(), "", "x", ALL_REGIONS)), vec!["a"]);
}
