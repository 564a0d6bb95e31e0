//! JSON fixtures: the exported snapshot of a store, and the loader that
//! rehydrates a fresh store from it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use kakapoly_core::{Document, DocumentStore, Dump, Icon, IconSet, StoreError};

use crate::collection::Collection;
use crate::database::Database;

pub const ICON_SETS_FILE: &str = "iconSets.json";
pub const ICONS_FILE: &str = "icons.json";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of `export_fixtures`, one result per file.
#[derive(Debug)]
pub struct ExportReport {
    pub icon_sets: Result<PathBuf, FixtureError>,
    pub icons: Result<PathBuf, FixtureError>,
}

impl ExportReport {
    pub fn is_ok(&self) -> bool {
        self.icon_sets.is_ok() && self.icons.is_ok()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FixtureError> + '_ {
        [&self.icon_sets, &self.icons]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
    }
}

/// Number of documents inserted by `load_fixtures`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub icon_sets: usize,
    pub icons: usize,
}

/// Write both collections to `dir` as `iconSets.json` and `icons.json`.
///
/// The directory is created if missing. The two files are written
/// independently: a failure on one does not stop the other.
pub async fn export_fixtures(db: &Database, dir: &Path) -> ExportReport {
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        tracing::error!("Failed to create fixture directory {}: {}", dir.display(), e);
    }

    let (icon_sets, icons) = tokio::join!(
        write_dump(dir.join(ICON_SETS_FILE), &db.icon_sets),
        write_dump(dir.join(ICONS_FILE), &db.icons),
    );

    for err in [&icon_sets, &icons].into_iter().filter_map(|r| r.as_ref().err()) {
        tracing::error!("Fixture export failed: {}", err);
    }

    ExportReport { icon_sets, icons }
}

async fn write_dump<T: Document>(
    path: PathBuf,
    collection: &Collection<T>,
) -> Result<PathBuf, FixtureError> {
    let dump = Dump::new(collection.export_all());
    let count = dump.docs.len();

    let data = serde_json::to_string_pretty(&dump).map_err(|source| FixtureError::Json {
        path: path.clone(),
        source,
    })?;
    tokio::fs::write(&path, data)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;

    tracing::info!(collection = T::COLLECTION, docs = count, "Wrote {}", path.display());
    Ok(path)
}

/// Bulk-load the fixtures in `dir` into `db`.
///
/// Documents whose id is already present are skipped, so loading the same
/// fixtures again into the same store is a no-op.
pub async fn load_fixtures(db: &Database, dir: &Path) -> Result<LoadStats, FixtureError> {
    let icon_sets: Dump<IconSet> = read_dump(&dir.join(ICON_SETS_FILE)).await?;
    let icons: Dump<Icon> = read_dump(&dir.join(ICONS_FILE)).await?;

    let stats = LoadStats {
        icon_sets: db.icon_sets.bulk_upsert_if_absent(icon_sets.docs)?,
        icons: db.icons.bulk_upsert_if_absent(icons.docs)?,
    };

    tracing::debug!(
        icon_sets = stats.icon_sets,
        icons = stats.icons,
        "Loaded fixtures from {}",
        dir.display()
    );
    Ok(stats)
}

async fn read_dump<T: DeserializeOwned>(path: &Path) -> Result<Dump<T>, FixtureError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&content).map_err(|source| FixtureError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kakapoly_core::IconSetPatch;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn seed() -> Database {
        let db = Database::new();
        let set = db
            .icon_sets
            .insert(IconSet::new("test", "test", "", "", "1.0"))
            .unwrap();
        let a = db.icons.insert(Icon::new("a.svg", &set.id, "<svg>A</svg>")).unwrap();
        let b = db.icons.insert(Icon::new("b.svg", &set.id, "<svg>B</svg>")).unwrap();
        db.icon_sets
            .update(&set.id, IconSetPatch::icons(vec![a.id, b.id]))
            .unwrap();
        db
    }

    fn ids<T: Document>(docs: &[T]) -> HashSet<String> {
        docs.iter().map(|d| d.id().to_string()).collect()
    }

    #[tokio::test]
    async fn test_export_writes_envelopes() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dump/collections");
        let db = seed();

        let report = export_fixtures(&db, &out).await;
        assert!(report.is_ok());

        let sets: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(ICON_SETS_FILE)).unwrap())
                .unwrap();
        let icons: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.join(ICONS_FILE)).unwrap()).unwrap();

        assert_eq!(sets["docs"].as_array().unwrap().len(), 1);
        assert_eq!(icons["docs"].as_array().unwrap().len(), 2);
        assert_eq!(sets["docs"][0]["slug"], "test");
        assert_eq!(icons["docs"][1]["svg"], "<svg>B</svg>");
    }

    #[tokio::test]
    async fn test_export_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let db = seed();
        assert!(export_fixtures(&db, dir.path()).await.is_ok());

        let fresh = Database::new();
        let stats = load_fixtures(&fresh, dir.path()).await.unwrap();

        assert_eq!(stats, LoadStats { icon_sets: 1, icons: 2 });
        assert_eq!(ids(&fresh.icon_sets.find_all()), ids(&db.icon_sets.find_all()));
        assert_eq!(ids(&fresh.icons.find_all()), ids(&db.icons.find_all()));
        assert_eq!(fresh.icons.find_all(), db.icons.find_all());
        assert!(fresh.check_integrity().is_ok());
    }

    #[tokio::test]
    async fn test_load_twice_is_idempotent() {
        let dir = tempdir().unwrap();
        export_fixtures(&seed(), dir.path()).await;

        let fresh = Database::new();
        load_fixtures(&fresh, dir.path()).await.unwrap();
        let again = load_fixtures(&fresh, dir.path()).await.unwrap();

        assert_eq!(again, LoadStats::default());
        assert_eq!(fresh.icon_sets.len(), 1);
        assert_eq!(fresh.icons.len(), 2);
    }

    #[tokio::test]
    async fn test_export_into_blocked_path_reports_both() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "not a directory").unwrap();

        let report = export_fixtures(&seed(), &blocker).await;

        assert!(!report.is_ok());
        assert_eq!(report.errors().count(), 2);
        assert!(matches!(report.icons, Err(FixtureError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_missing_fixture_fails() {
        let dir = tempdir().unwrap();
        let result = load_fixtures(&Database::new(), dir.path()).await;

        assert!(matches!(result, Err(FixtureError::Io { .. })));
    }

    #[tokio::test]
    async fn test_load_malformed_fixture_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(ICON_SETS_FILE), r#"{"docs": [{"id": 7}]}"#).unwrap();
        std::fs::write(dir.path().join(ICONS_FILE), r#"{"docs": []}"#).unwrap();

        let result = load_fixtures(&Database::new(), dir.path()).await;
        assert!(matches!(result, Err(FixtureError::Json { .. })));
    }

    #[tokio::test]
    async fn test_load_tolerates_missing_docs_key() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(ICON_SETS_FILE), "{}").unwrap();
        std::fs::write(dir.path().join(ICONS_FILE), "{}").unwrap();

        let stats = load_fixtures(&Database::new(), dir.path()).await.unwrap();
        assert_eq!(stats, LoadStats::default());
    }
}
