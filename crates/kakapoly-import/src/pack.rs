use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the optional pack manifest inside the icons root.
pub const MANIFEST_FILE: &str = "packs.json";

/// One icon pack to import: fixed metadata plus the directories holding its
/// SVG files, relative to the icons root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackSource {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub project_url: String,
    #[serde(default)]
    pub figma_file_url: String,
    #[serde(default)]
    pub current_version: String,
    /// Imported in order; icon ids of later directories follow earlier ones
    pub dirs: Vec<PathBuf>,
}

impl PackSource {
    /// A pack whose files live in a single directory named after its slug.
    pub fn single_dir(
        name: impl Into<String>,
        slug: impl Into<String>,
        project_url: impl Into<String>,
        current_version: impl Into<String>,
    ) -> Self {
        let slug = slug.into();
        Self {
            name: name.into(),
            dirs: vec![PathBuf::from(&slug)],
            slug,
            project_url: project_url.into(),
            figma_file_url: String::new(),
            current_version: current_version.into(),
        }
    }
}

/// The packs shipped with the site.
///
/// Heroicons reads `solid` from `heroicons/solid`. The original site read
/// both halves from `heroicons/outline`, importing the outline set twice;
/// list `heroicons/outline` twice in `packs.json` to reproduce that.
pub fn builtin_packs() -> Vec<PackSource> {
    vec![
        PackSource {
            name: "heroicons".to_string(),
            slug: "heroicons".to_string(),
            project_url: "https://heroicons.com/".to_string(),
            figma_file_url: "https://www.figma.com/community/file/958423903283802665".to_string(),
            current_version: "1.0.6".to_string(),
            dirs: vec![
                PathBuf::from("heroicons/outline"),
                PathBuf::from("heroicons/solid"),
            ],
        },
        PackSource::single_dir("feather", "feather", "https://feathericons.com/", "4.29.0"),
        PackSource::single_dir("ionicons", "ionicons", "https://ionic.io/ionicons", "6.0.2"),
    ]
}

/// Load pack definitions from `<icons_root>/packs.json`.
/// Falls back to the built-in packs if the file is absent or unreadable.
pub async fn load_packs(icons_root: &Path) -> Vec<PackSource> {
    let manifest = icons_root.join(MANIFEST_FILE);
    match tokio::fs::read_to_string(&manifest).await {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(packs) => return packs,
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", manifest.display(), e);
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {}, using built-in packs", manifest.display());
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", manifest.display(), e);
        }
    }

    builtin_packs()
}
