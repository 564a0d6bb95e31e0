use serde::{Deserialize, Serialize};

use crate::document::{new_id, Document};
use crate::error::ValidationError;
use crate::validation::Validator;

/// One SVG asset belonging to exactly one icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Icon {
    pub id: String,
    /// Source filename, extension included (e.g. "arrow-up.svg")
    pub name: String,
    /// Id of the owning icon set
    pub icon_set: String,
    /// Raw SVG markup
    pub svg: String,
}

impl Icon {
    /// Create an icon with a freshly generated id.
    pub fn new(name: impl Into<String>, icon_set: impl Into<String>, svg: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, icon_set, svg)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        icon_set: impl Into<String>,
        svg: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_set: icon_set.into(),
            svg: svg.into(),
        }
    }
}

/// Fields of an icon that may be patched after insert.
#[derive(Debug, Clone, Default)]
pub struct IconPatch {
    pub name: Option<String>,
    pub svg: Option<String>,
}

impl Document for Icon {
    const COLLECTION: &'static str = "icons";
    type Patch = IconPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "iconSet" => Some(&self.icon_set),
            "svg" => Some(&self.svg),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Validator::validate_icon(self)
    }

    fn apply(&mut self, patch: IconPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(svg) = patch.svg {
            self.svg = svg;
        }
    }
}
