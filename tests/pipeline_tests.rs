use std::path::Path;

use tempfile::{tempdir, TempDir};

use kakapoly::{build, import_and_export, Config};
use kakapoly_core::DocumentStore;
use kakapoly_db::{load_fixtures, Database};

/// Create an icons root with a manifest and one pack directory.
fn setup_icons() -> TempDir {
    let dir = tempdir().unwrap();
    let pack = dir.path().join("test");
    std::fs::create_dir_all(&pack).unwrap();
    std::fs::write(pack.join("a.svg"), "<svg>A</svg>").unwrap();
    std::fs::write(pack.join("b.svg"), "<svg>B</svg>").unwrap();
    write_manifest(
        dir.path(),
        r#"[{"name": "test", "slug": "test", "currentVersion": "1.0", "dirs": ["test"]}]"#,
    );
    dir
}

fn write_manifest(root: &Path, json: &str) {
    std::fs::write(root.join("packs.json"), json).unwrap();
}

fn config(icons: &Path, work: &Path) -> Config {
    Config {
        icons_dir: icons.to_path_buf(),
        fixtures_dir: work.join("database/dump/collections"),
        out_dir: work.join("out"),
        site_title: "Kakapoly Icons".to_string(),
    }
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Import + export
// ============================================================================

#[tokio::test]
async fn test_import_single_pack_scenario() {
    let icons = setup_icons();
    let work = tempdir().unwrap();
    let config = config(icons.path(), work.path());

    let run = import_and_export(&config).await;
    assert!(run.is_ok());

    let sets = read_json(&config.fixtures_dir.join("iconSets.json"));
    let icon_docs = read_json(&config.fixtures_dir.join("icons.json"));
    assert_eq!(sets["docs"].as_array().unwrap().len(), 1);
    assert_eq!(icon_docs["docs"].as_array().unwrap().len(), 2);

    let set = &sets["docs"][0];
    assert_eq!(set["name"], "test");
    assert_eq!(set["slug"], "test");
    assert_eq!(set["currentVersion"], "1.0");
    assert_eq!(set["icons"].as_array().unwrap().len(), 2);

    let docs = icon_docs["docs"].as_array().unwrap();
    for (doc, svg) in docs.iter().zip(["<svg>A</svg>", "<svg>B</svg>"]) {
        assert_eq!(doc["svg"], svg);
        assert_eq!(doc["iconSet"], set["id"]);
    }
    assert_eq!(set["icons"][0], icon_docs["docs"][0]["id"]);
    assert_eq!(set["icons"][1], icon_docs["docs"][1]["id"]);
}

#[tokio::test]
async fn test_import_failed_pack_leaves_partial_fixture() {
    let icons = setup_icons();
    write_manifest(
        icons.path(),
        r#"[
            {"name": "test", "slug": "test", "dirs": ["test"]},
            {"name": "gone", "slug": "gone", "dirs": ["gone"]}
        ]"#,
    );
    let work = tempdir().unwrap();
    let config = config(icons.path(), work.path());

    let run = import_and_export(&config).await;

    assert!(!run.is_ok());
    assert!(run.export.is_ok());
    assert_eq!(run.import.failed().count(), 1);
    assert_eq!(run.import.icons_imported(), 2);

    let sets = read_json(&config.fixtures_dir.join("iconSets.json"));
    let gone = sets["docs"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["slug"] == "gone")
        .unwrap();
    assert!(gone["icons"].as_array().unwrap().is_empty());
}

// ============================================================================
// Fixture rehydration
// ============================================================================

#[tokio::test]
async fn test_fixtures_round_trip_into_fresh_store() {
    let icons = setup_icons();
    let work = tempdir().unwrap();
    let config = config(icons.path(), work.path());
    import_and_export(&config).await;

    let db = Database::new();
    load_fixtures(&db, &config.fixtures_dir).await.unwrap();
    load_fixtures(&db, &config.fixtures_dir).await.unwrap();

    assert_eq!(db.icon_sets.len(), 1);
    assert_eq!(db.icons.len(), 2);
    assert!(db.check_integrity().is_ok());

    let set = db.icon_set_by_slug("test").unwrap();
    let names: Vec<String> = db
        .populate_icons(&set)
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, ["a.svg", "b.svg"]);
    assert!(db.icon_set_by_slug("nope").is_none());
}

// ============================================================================
// Site
// ============================================================================

#[tokio::test]
async fn test_import_then_build_site() {
    let icons = setup_icons();
    let work = tempdir().unwrap();
    let config = config(icons.path(), work.path());
    assert!(import_and_export(&config).await.is_ok());

    let report = build(&config).await.unwrap();

    assert_eq!(report.pages, 5);
    assert_eq!(report.downloads, 2);
    assert_eq!(report.bundles, 1);
    assert_eq!(report.skipped, 0);

    let listing = std::fs::read_to_string(config.out_dir.join("icon-sets/index.html")).unwrap();
    assert!(listing.contains(r#"href="/icon-sets/test/""#));
    assert!(listing.contains("2 icons"));

    let set_page = std::fs::read_to_string(config.out_dir.join("icon-sets/test/index.html")).unwrap();
    assert!(set_page.contains("a.svg"));
    assert!(set_page.contains("<svg>B</svg>"));
}

#[tokio::test]
async fn test_build_without_fixtures_fails() {
    let icons = setup_icons();
    let work = tempdir().unwrap();
    let config = config(icons.path(), work.path());

    assert!(build(&config).await.is_err());
}
