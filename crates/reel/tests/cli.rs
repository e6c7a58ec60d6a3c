//! CLI integration tests for reel commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a reel command with the index in `dir`.
fn reel(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("reel").unwrap();
    cmd.current_dir(dir);
    cmd.arg("--index-dir").arg(dir.join("index"));
    cmd
}

/// Writes the two-film sample catalog and returns its path.
fn sample_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("films.json");
    fs::write(
        &path,
        r#"[
            {
                "id": "1",
                "title": "Space Odyssey",
                "overview": "A voyage beyond the infinite.",
                "tagline": "The ultimate trip.",
                "runtime": "149",
                "revenue": "146000000",
                "vote_average": "8.3",
                "release_date": "1968-04-02"
            },
            {
                "id": "2",
                "title": "Space Jam",
                "overview": "Basketball with cartoons.",
                "runtime": "87",
                "vote_average": "6.5",
                "release_date": "1996-11-15"
            }
        ]"#,
    )
    .unwrap();
    path
}

mod ingest {
    use super::*;

    #[test]
    fn indexes_a_catalog() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());

        reel(dir.path())
            .arg("ingest")
            .arg(&catalog)
            .assert()
            .success()
            .stdout(predicate::str::contains("Indexed 2 films"));

        assert!(dir.path().join("index").join("segment.json").exists());
    }

    #[test]
    fn repeated_ingest_extends_the_index() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());

        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();
        reel(dir.path())
            .arg("ingest")
            .arg(&catalog)
            .assert()
            .success()
            .stdout(predicate::str::contains("4 total"));
    }

    #[test]
    fn clear_flag_rebuilds_instead_of_extending() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());

        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();
        reel(dir.path())
            .arg("ingest")
            .arg("--clear")
            .arg(&catalog)
            .assert()
            .success()
            .stdout(predicate::str::contains("2 total"));
    }

    #[test]
    fn fails_on_missing_file() {
        let dir = temp_dir();

        reel(dir.path())
            .arg("ingest")
            .arg(dir.path().join("nope.json"))
            .assert()
            .failure();
    }

    #[test]
    fn fails_on_malformed_catalog() {
        let dir = temp_dir();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        reel(dir.path())
            .arg("ingest")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse catalog"));
    }

    #[test]
    fn fails_on_record_without_id() {
        let dir = temp_dir();
        let path = dir.path().join("films.json");
        fs::write(&path, r#"[{"title": "Anonymous Film"}]"#).unwrap();

        reel(dir.path())
            .arg("ingest")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid input"));
    }
}

mod search {
    use super::*;

    fn ingest_sample(dir: &Path) {
        let catalog = sample_catalog(dir);
        reel(dir).arg("ingest").arg(&catalog).assert().success();
    }

    #[test]
    fn finds_matching_films() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("space")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Odyssey"))
            .stdout(predicate::str::contains("Space Jam"));
    }

    #[test]
    fn stemming_matches_inflected_forms() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        // "voyages" stems to the same root as the indexed "voyage"
        reel(dir.path())
            .arg("search")
            .arg("voyages")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Odyssey"));
    }

    #[test]
    fn runtime_filter_narrows_results() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("space")
            .arg("--runtime-min")
            .arg("100")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Odyssey"))
            .stdout(predicate::str::contains("Space Jam").not());
    }

    #[test]
    fn date_range_filter() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("--date-from")
            .arg("1990-01-01")
            .arg("--date-to")
            .arg("2000-01-01")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Jam"))
            .stdout(predicate::str::contains("Space Odyssey").not());
    }

    #[test]
    fn browse_without_query_lists_everything() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Odyssey"))
            .stdout(predicate::str::contains("Space Jam"));
    }

    #[test]
    fn no_matches_is_success_with_message() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("nonexistentterm")
            .assert()
            .success()
            .stdout(predicate::str::contains("No films matched"));
    }

    #[test]
    fn zero_page_size_is_an_error() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("space")
            .arg("-n")
            .arg("0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid input"));
    }

    #[test]
    fn single_date_bound_is_rejected_not_ignored() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        reel(dir.path())
            .arg("search")
            .arg("--date-from")
            .arg("1990-01-01")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--date-to"));

        reel(dir.path())
            .arg("search")
            .arg("--date-to")
            .arg("2000-01-01")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--date-from"));
    }

    #[test]
    fn malformed_date_is_rejected_by_clap() {
        let dir = temp_dir();

        reel(dir.path())
            .arg("search")
            .arg("--date-from")
            .arg("04/02/1968")
            .arg("--date-to")
            .arg("2000-01-01")
            .assert()
            .failure()
            .stderr(predicate::str::contains("YYYY-MM-DD"));
    }

    #[test]
    fn json_output_is_parseable_and_complete() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        let output = reel(dir.path())
            .arg("search")
            .arg("space")
            .arg("--json")
            .output()
            .unwrap();
        assert!(output.status.success());

        let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(page["total"], 2);
        assert_eq!(page["films"].as_array().unwrap().len(), 2);
        assert!(page["films"][0]["score"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn pagination_returns_disjoint_pages() {
        let dir = temp_dir();
        ingest_sample(dir.path());

        let first = reel(dir.path())
            .args(["search", "space", "-n", "1", "-p", "0", "--json"])
            .output()
            .unwrap();
        let second = reel(dir.path())
            .args(["search", "space", "-n", "1", "-p", "1", "--json"])
            .output()
            .unwrap();

        let first: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
        let second: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
        assert_eq!(first["total"], 2);
        assert_eq!(second["total"], 2);
        assert_ne!(first["films"][0]["id"], second["films"][0]["id"]);
    }

    #[test]
    fn empty_index_searches_cleanly() {
        let dir = temp_dir();

        reel(dir.path())
            .arg("search")
            .arg("space")
            .assert()
            .success()
            .stdout(predicate::str::contains("No films matched"));
    }
}

mod clear {
    use super::*;

    #[test]
    fn empties_the_index() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());
        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();

        reel(dir.path()).arg("clear").assert().success();

        reel(dir.path())
            .arg("search")
            .assert()
            .success()
            .stdout(predicate::str::contains("No films matched"));
    }
}

mod suggest {
    use super::*;

    #[test]
    fn returns_matching_titles() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());
        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();

        reel(dir.path())
            .arg("suggest")
            .arg("space")
            .assert()
            .success()
            .stdout(predicate::str::contains("Space Odyssey"));
    }

    #[test]
    fn json_suggestions_have_zero_score() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());
        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();

        let output = reel(dir.path())
            .args(["suggest", "space", "--json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        for hit in hits.as_array().unwrap() {
            assert_eq!(hit["score"].as_f64().unwrap(), 0.0);
        }
    }
}

mod status {
    use super::*;

    #[test]
    fn reports_location_and_count() {
        let dir = temp_dir();
        let catalog = sample_catalog(dir.path());
        reel(dir.path()).arg("ingest").arg(&catalog).assert().success();

        reel(dir.path())
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Films: 2"));
    }

    #[test]
    fn config_file_sets_index_directory() {
        let dir = temp_dir();
        fs::write(
            dir.path().join("reel.toml"),
            "index_directory = \"films-index\"\n",
        )
        .unwrap();
        let catalog = sample_catalog(dir.path());

        // No --index-dir override: the config file decides.
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("reel").unwrap();
        cmd.current_dir(dir.path())
            .arg("ingest")
            .arg(&catalog)
            .assert()
            .success();

        assert!(dir.path().join("films-index").join("segment.json").exists());
    }
}
