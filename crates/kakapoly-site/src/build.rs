use std::path::{Path, PathBuf};

use thiserror::Error;

use kakapoly_core::DocumentStore;
use kakapoly_db::{load_fixtures, Database, FixtureError};

use crate::bundle::{bundle_icons, bundle_name};
use crate::pages::{icon_page, icon_set_page, icon_sets_page};
use crate::render::{render_home, render_icon, render_icon_set, render_icon_sets};
use crate::svg::download_name;

/// Subtrees of the output directory that every build regenerates from
/// scratch. Anything else in the output directory is left alone.
const GENERATED_DIRS: [&str; 2] = ["icon-sets", "icons"];

/// Site-wide presentation settings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Kakapoly Icons".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to bundle icon set {slug}: {source}")]
    Zip {
        slug: String,
        #[source]
        source: zip::result::ZipError,
    },
}

/// Counts of what `build_site` wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteReport {
    pub pages: usize,
    pub downloads: usize,
    /// Per-set zip archives
    pub bundles: usize,
    /// Pages left out because their data could not be resolved
    pub skipped: usize,
}

/// Render the whole site from the fixtures in `fixtures_dir` into `out_dir`.
///
/// The build is one render context: it loads the fixtures into its own
/// fresh store. Generated subtrees left by a previous build are removed
/// first, so pages of icons that no longer exist do not linger. Pages whose
/// references do not resolve are logged and skipped; failing to write any
/// file aborts the build.
pub async fn build_site(
    fixtures_dir: &Path,
    out_dir: &Path,
    config: &SiteConfig,
) -> Result<SiteReport, SiteError> {
    let db = Database::new();
    let loaded = load_fixtures(&db, fixtures_dir).await?;
    tracing::info!(
        icon_sets = loaded.icon_sets,
        icons = loaded.icons,
        "Building site into {}",
        out_dir.display()
    );

    clear_generated(out_dir).await?;

    let mut report = SiteReport::default();
    let title = config.title.as_str();

    write_file(&out_dir.join("index.html"), render_home(title).into_string()).await?;
    report.pages += 1;

    let sets = icon_sets_page(&db);
    write_file(
        &out_dir.join("icon-sets/index.html"),
        render_icon_sets(title, &sets).into_string(),
    )
    .await?;
    report.pages += 1;

    for icon_set in db.icon_sets.find_all() {
        match icon_set_page(&db, &icon_set.slug) {
            Ok(Some(page)) => {
                let path = out_dir.join("icon-sets").join(&icon_set.slug).join("index.html");
                write_file(&path, render_icon_set(title, &page).into_string()).await?;
                report.pages += 1;

                let bundle = bundle_icons(&page.icons).map_err(|source| SiteError::Zip {
                    slug: icon_set.slug.clone(),
                    source,
                })?;
                let path = out_dir
                    .join("icon-sets")
                    .join(&icon_set.slug)
                    .join(bundle_name(&icon_set));
                write_file(&path, bundle).await?;
                report.bundles += 1;
            }
            Ok(None) => report.skipped += 1,
            Err(e) => {
                tracing::warn!(slug = %icon_set.slug, "Skipping icon set page: {}", e);
                report.skipped += 1;
            }
        }
    }

    for icon in db.icons.find_all() {
        if !is_path_component(&icon.id) {
            tracing::warn!(id = %icon.id, "Skipping icon with unroutable id");
            report.skipped += 1;
            continue;
        }
        match icon_page(&db, &icon.id) {
            Ok(Some(page)) => {
                let dir = out_dir.join("icons").join(&icon.id);
                write_file(&dir.join("index.html"), render_icon(title, &page).into_string())
                    .await?;
                write_file(&dir.join(download_name(&icon.name)), &icon.svg).await?;
                report.pages += 1;
                report.downloads += 1;
            }
            Ok(None) => report.skipped += 1,
            Err(e) => {
                tracing::warn!(id = %icon.id, "Skipping icon page: {}", e);
                report.skipped += 1;
            }
        }
    }

    tracing::info!(
        pages = report.pages,
        downloads = report.downloads,
        bundles = report.bundles,
        skipped = report.skipped,
        "Site built"
    );
    Ok(report)
}

async fn clear_generated(out_dir: &Path) -> Result<(), SiteError> {
    for name in GENERATED_DIRS {
        let path = out_dir.join(name);
        match tokio::fs::remove_dir_all(&path).await {
            Ok(()) => tracing::debug!("Removed previous {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => return Err(SiteError::Io { path, source }),
        }
    }
    Ok(())
}

fn is_path_component(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}

async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), SiteError> {
    let io_err = |source: std::io::Error| SiteError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, contents).await.map_err(io_err)
}
