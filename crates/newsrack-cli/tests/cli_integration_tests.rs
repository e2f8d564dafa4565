use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn write_feed(dir: &tempfile::TempDir) -> PathBuf {
    let items = serde_json::json!([
        {"id": "n1", "title": "Visa rules tighten", "category": "News",
         "last_modified": "2026-01-09T00:00:00Z"},
        {"id": "n2", "title": "Visa fees rise", "category": "News",
         "last_modified": "2026-01-08T00:00:00Z"},
        {"id": "n3", "title": "Border update", "category": "News",
         "last_modified": "2026-01-07T00:00:00Z"},
        {"id": "t1", "title": "Packing tips", "category": "Tips",
         "last_modified": "2026-01-05T00:00:00Z"},
        {"id": "t2", "title": "Visa interview tips", "category": "Tips",
         "last_modified": "2026-01-04T00:00:00Z"},
        {"id": "x1", "title": "Uncategorized note"}
    ]);
    let path = dir.path().join("feed.json");
    std::fs::write(&path, serde_json::to_string_pretty(&items).unwrap()).unwrap();
    path
}

fn newsrack() -> Command {
    Command::cargo_bin("newsrack").unwrap()
}

#[test]
fn browse_groups_items_by_category() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    newsrack()
        .args(["--feed", feed.to_str().unwrap(), "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("News (3/3)"))
        .stdout(predicate::str::contains("Tips (2/2)"))
        .stdout(predicate::str::contains("Other (1/1)"))
        .stdout(predicate::str::contains("Visa rules tighten"))
        .stdout(predicate::str::contains("6 of 6 items loaded · all loaded"));
}

#[test]
fn browse_json_exposes_the_view_model() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    let output = newsrack()
        .args(["--feed", feed.to_str().unwrap(), "--format", "json", "browse"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["search_active"], false);
    assert_eq!(view["pagination"], "exhausted");

    let buckets = view["buckets"].as_array().unwrap();
    assert_eq!(buckets[0]["name"], "News");
    // Within a bucket, newest first.
    assert_eq!(buckets[0]["visible_items"][0]["id"], "n1");
}

#[test]
fn small_pages_are_stitched_across_fetches() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    newsrack()
        .args(["--feed", feed.to_str().unwrap(), "--page-limit", "2", "browse"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 of 6 items loaded"));
}

#[test]
fn search_prints_flat_highlighted_results() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    newsrack()
        .args(["--feed", feed.to_str().unwrap(), "search", "visa"])
        .assert()
        .success()
        // No terminal on the other end, so matches are bracketed.
        .stdout(predicate::str::contains("[Visa] rules tighten"))
        .stdout(predicate::str::contains("[Visa] interview tips"))
        .stdout(predicate::str::contains("3 of 6 items matched"));
}

#[test]
fn search_handles_regex_metacharacters() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    newsrack()
        .args(["--feed", feed.to_str().unwrap(), "search", ".*+?^$(){}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items matching"));
}

#[test]
fn suggest_lists_matching_titles() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir);

    let output = newsrack()
        .args(["--feed", feed.to_str().unwrap(), "--format", "json", "suggest", "visa"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let suggestions: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        suggestions,
        ["Visa rules tighten", "Visa fees rise", "Visa interview tips"]
    );
}

#[test]
fn missing_feed_flag_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let _feed = write_feed(&dir);

    newsrack()
        .arg("browse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--feed"));
}

#[test]
fn unreadable_feed_is_reported() {
    newsrack()
        .args(["--feed", "/nonexistent/feed.json", "browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read feed file"));
}
