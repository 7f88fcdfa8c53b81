use tutorbase_core::db::open_db_in_memory;
use tutorbase_core::{SqliteTutorialRepository, Tutorial, TutorialRepository};

#[test]
fn find_by_published_partitions_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTutorialRepository::try_new(&conn).unwrap();

    repo.save(&Tutorial::new("A", "published row", true)).unwrap();
    repo.save(&Tutorial::new("B", "draft row", false)).unwrap();

    let published = repo.find_by_published(true).unwrap();
    assert_eq!(titles(&published), vec!["A"]);

    let drafts = repo.find_by_published(false).unwrap();
    assert_eq!(titles(&drafts), vec!["B"]);
}

#[test]
fn title_search_matches_substring_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTutorialRepository::try_new(&conn).unwrap();

    repo.save(&Tutorial::new("Spring Boot Guide", "java crud", true))
        .unwrap();
    repo.save(&Tutorial::new("Node Basics", "event loop primer", true))
        .unwrap();

    let hits = repo.find_by_title_containing("spr").unwrap();
    assert_eq!(titles(&hits), vec!["Spring Boot Guide"]);

    let upper_hits = repo.find_by_title_containing("SPRING").unwrap();
    assert_eq!(titles(&upper_hits), vec!["Spring Boot Guide"]);

    assert!(repo.find_by_title_containing("flask").unwrap().is_empty());
}

// The search fragment must reach SQL as a bound parameter, never as
// statement text, so injection-shaped input is an ordinary substring with
// no matches and no side effects.
#[test]
fn title_search_treats_injection_shaped_input_as_literal() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTutorialRepository::try_new(&conn).unwrap();

    repo.save(&Tutorial::new("Spring Boot Guide", "java crud", true))
        .unwrap();
    repo.save(&Tutorial::new("Node Basics", "event loop primer", false))
        .unwrap();

    let fragment = "x' OR '1'='1";
    assert!(repo.find_by_title_containing(fragment).unwrap().is_empty());
    assert_eq!(repo.find_all().unwrap().len(), 2);

    // A title actually containing the fragment is still found.
    repo.save(&Tutorial::new("x' OR '1'='1 cheatsheet", "quoting pitfalls", false))
        .unwrap();
    let hits = repo.find_by_title_containing(fragment).unwrap();
    assert_eq!(titles(&hits), vec!["x' OR '1'='1 cheatsheet"]);
}

#[test]
fn title_search_treats_like_wildcards_as_literals() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTutorialRepository::try_new(&conn).unwrap();

    repo.save(&Tutorial::new("100% Rust", "all rust", true)).unwrap();
    repo.save(&Tutorial::new("100x Rust", "rust at scale", true))
        .unwrap();
    repo.save(&Tutorial::new("snake_case notes", "naming", false))
        .unwrap();
    repo.save(&Tutorial::new("snakeXcase notes", "naming", false))
        .unwrap();

    let percent_hits = repo.find_by_title_containing("100%").unwrap();
    assert_eq!(titles(&percent_hits), vec!["100% Rust"]);

    let underscore_hits = repo.find_by_title_containing("e_c").unwrap();
    assert_eq!(titles(&underscore_hits), vec!["snake_case notes"]);
}

#[test]
fn empty_fragment_matches_every_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTutorialRepository::try_new(&conn).unwrap();

    repo.save(&Tutorial::new("one", "first", true)).unwrap();
    repo.save(&Tutorial::new("two", "second", false)).unwrap();

    assert_eq!(repo.find_by_title_containing("").unwrap().len(), 2);
}

fn titles(tutorials: &[Tutorial]) -> Vec<&str> {
    let mut titles: Vec<&str> = tutorials
        .iter()
        .map(|tutorial| tutorial.title.as_str())
        .collect();
    titles.sort_unstable();
    titles
}
