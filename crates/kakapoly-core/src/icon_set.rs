use serde::{Deserialize, Serialize};

use crate::document::{new_id, Document};
use crate::error::ValidationError;
use crate::validation::Validator;

/// One icon pack.
///
/// `icons` holds the ids of the pack's icons in import order. It is empty
/// until every icon of the pack has been inserted, then patched once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSet {
    pub id: String,
    pub name: String,
    /// URL-safe routing key, unique across icon sets
    pub slug: String,
    pub project_url: String,
    pub figma_file_url: String,
    pub current_version: String,
    pub icons: Vec<String>,
}

impl IconSet {
    /// Create an icon set stub with a fresh id and no icons.
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        project_url: impl Into<String>,
        figma_file_url: impl Into<String>,
        current_version: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            slug: slug.into(),
            project_url: project_url.into(),
            figma_file_url: figma_file_url.into(),
            current_version: current_version.into(),
            icons: Vec::new(),
        }
    }
}

/// Fields of an icon set that may be patched after insert.
#[derive(Debug, Clone, Default)]
pub struct IconSetPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub project_url: Option<String>,
    pub figma_file_url: Option<String>,
    pub current_version: Option<String>,
    pub icons: Option<Vec<String>>,
}

impl IconSetPatch {
    /// Patch that replaces only the icon id list.
    pub fn icons(icons: Vec<String>) -> Self {
        Self {
            icons: Some(icons),
            ..Default::default()
        }
    }
}

impl Document for IconSet {
    const COLLECTION: &'static str = "iconSets";
    type Patch = IconSetPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "slug" => Some(&self.slug),
            "projectUrl" => Some(&self.project_url),
            "figmaFileUrl" => Some(&self.figma_file_url),
            "currentVersion" => Some(&self.current_version),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::validate_icon_set(self)
    }

    fn apply(&mut self, patch: IconSetPatch) {
        let IconSetPatch {
            name,
            slug,
            project_url,
            figma_file_url,
            current_version,
            icons,
        } = patch;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = slug {
            self.slug = v;
        }
        if let Some(v) = project_url {
            self.project_url = v;
        }
        if let Some(v) = figma_file_url {
            self.figma_file_url = v;
        }
        if let Some(v) = current_version {
            self.current_version = v;
        }
        if let Some(v) = icons {
            self.icons = v;
        }
    }

    fn unique_keys(&self) -> Vec<(&'static str, &str)> {
        vec![("slug", self.slug.as_str())]
    }
}
