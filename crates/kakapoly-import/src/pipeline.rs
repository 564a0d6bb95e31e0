use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use kakapoly_core::{DocumentStore, Icon, IconSet, IconSetPatch, StoreError};
use kakapoly_db::Database;

use crate::pack::PackSource;

/// Error type for importing one pack.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Import task failed: {0}")]
    Task(String),
}

impl ImportError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result of importing one pack.
#[derive(Debug)]
pub struct PackOutcome {
    pub slug: String,
    /// Number of icons linked to the icon set on success
    pub result: Result<usize, ImportError>,
}

/// Result of `import_all`, one outcome per pack in input order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub packs: Vec<PackOutcome>,
}

impl ImportReport {
    pub fn is_ok(&self) -> bool {
        self.packs.iter().all(|p| p.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &PackOutcome> + '_ {
        self.packs.iter().filter(|p| p.result.is_err())
    }

    /// Total icons imported by the packs that succeeded.
    pub fn icons_imported(&self) -> usize {
        self.packs
            .iter()
            .filter_map(|p| p.result.as_ref().ok())
            .sum()
    }
}

/// Import one pack into `db`.
///
/// The icon set is inserted first with no icons, then one icon per SVG file,
/// then the icon set is patched with the collected ids. A read failure aborts
/// the pack: icons inserted before it stay in the store and the icon set
/// keeps its empty list.
pub async fn import_pack(
    db: &Database,
    icons_root: &Path,
    pack: &PackSource,
) -> Result<IconSet, ImportError> {
    let icon_set = db.icon_sets.insert(IconSet::new(
        &pack.name,
        &pack.slug,
        &pack.project_url,
        &pack.figma_file_url,
        &pack.current_version,
    ))?;

    let mut icon_ids = Vec::new();
    for dir in &pack.dirs {
        let dir = icons_root.join(dir);
        for path in list_svg_files(&dir).await? {
            let svg = tokio::fs::read_to_string(&path)
                .await
                .map_err(ImportError::io(&path))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let icon = db.icons.insert(Icon::new(name, &icon_set.id, svg))?;
            icon_ids.push(icon.id);
        }
    }

    let icon_set = db
        .icon_sets
        .update(&icon_set.id, IconSetPatch::icons(icon_ids))?;
    Ok(icon_set)
}

/// Regular `.svg` files directly inside `dir`, sorted by file name.
async fn list_svg_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(ImportError::io(dir))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(ImportError::io(dir))? {
        let path = entry.path();
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(ImportError::io(&path))?;

        if !metadata.is_file() || !is_svg(&path) {
            tracing::debug!("Skipping {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Import every pack concurrently, one task per pack.
///
/// A failing pack is logged and reported; it never stops its siblings.
pub async fn import_all(
    db: Arc<Database>,
    icons_root: PathBuf,
    packs: Vec<PackSource>,
) -> ImportReport {
    let icons_root = Arc::new(icons_root);

    let handles: Vec<_> = packs
        .into_iter()
        .map(|pack| {
            let db = db.clone();
            let icons_root = icons_root.clone();
            let slug = pack.slug.clone();
            tracing::info!(pack = %slug, "Importing {}", pack.name);
            let handle = tokio::spawn(async move { import_pack(&db, &icons_root, &pack).await });
            (slug, handle)
        })
        .collect();

    let mut report = ImportReport::default();
    for (slug, handle) in handles {
        let result = match handle.await {
            Ok(Ok(icon_set)) => {
                tracing::info!(pack = %slug, icons = icon_set.icons.len(), "Imported pack");
                Ok(icon_set.icons.len())
            }
            Ok(Err(e)) => {
                tracing::error!(pack = %slug, "Import failed: {}", e);
                Err(e)
            }
            Err(e) => {
                tracing::error!(pack = %slug, "Import task failed: {}", e);
                Err(ImportError::Task(e.to_string()))
            }
        };
        report.packs.push(PackOutcome { slug, result });
    }

    report
}
