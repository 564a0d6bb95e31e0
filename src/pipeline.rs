use std::sync::Arc;

use kakapoly_db::{export_fixtures, Database, ExportReport};
use kakapoly_import::{import_all, load_packs, ImportReport};
use kakapoly_site::{build_site, SiteConfig, SiteError, SiteReport};

use crate::config::Config;

/// Outcome of one import run: per-pack import results and per-file export
/// results.
#[derive(Debug)]
pub struct ImportRun {
    pub import: ImportReport,
    pub export: ExportReport,
}

impl ImportRun {
    pub fn is_ok(&self) -> bool {
        self.import.is_ok() && self.export.is_ok()
    }
}

/// Import every configured pack into a fresh store and export it as
/// fixtures. Failed packs leave a partial fixture rather than aborting.
pub async fn import_and_export(config: &Config) -> ImportRun {
    let db = Arc::new(Database::new());

    let packs = load_packs(&config.icons_dir).await;
    tracing::info!(
        "Importing {} packs from {}",
        packs.len(),
        config.icons_dir.display()
    );
    let import = import_all(db.clone(), config.icons_dir.clone(), packs).await;

    if let Err(e) = db.check_integrity() {
        tracing::warn!("Store has unresolved references: {}", e);
    }

    let export = export_fixtures(&db, &config.fixtures_dir).await;
    ImportRun { import, export }
}

/// Render the static site from the exported fixtures.
pub async fn build(config: &Config) -> Result<SiteReport, SiteError> {
    let site = SiteConfig {
        title: config.site_title.clone(),
    };
    build_site(&config.fixtures_dir, &config.out_dir, &site).await
}
