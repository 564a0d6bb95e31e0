use kakapoly_core::{Document, DocumentStore, Icon, IconSet, StoreError};

use crate::collection::Collection;

/// The icon store: one collection per record kind.
///
/// Constructed explicitly and shared by reference (usually `Arc<Database>`);
/// every import run and every render context owns its own instance.
#[derive(Default)]
pub struct Database {
    pub icon_sets: Collection<IconSet>,
    pub icons: Collection<Icon>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an icon set by its routing key.
    pub fn icon_set_by_slug(&self, slug: &str) -> Option<IconSet> {
        self.icon_sets.find_one_by("slug", slug)
    }

    /// Resolve `icon_set.icons` to the icon records, in list order.
    pub fn populate_icons(&self, icon_set: &IconSet) -> Result<Vec<Icon>, StoreError> {
        self.icons
            .find_many(&icon_set.icons)
            .map_err(|id| StoreError::DanglingReference {
                collection: IconSet::COLLECTION,
                field: "icons",
                id: id.to_string(),
            })
    }

    /// Resolve `icon.icon_set` to its icon set record.
    pub fn populate_icon_set(&self, icon: &Icon) -> Result<IconSet, StoreError> {
        self.icon_sets
            .find_by_id(&icon.icon_set)
            .ok_or_else(|| StoreError::DanglingReference {
                collection: Icon::COLLECTION,
                field: "iconSet",
                id: icon.icon_set.clone(),
            })
    }

    /// Verify every reference in both collections resolves.
    /// Returns the first dangling reference found.
    pub fn check_integrity(&self) -> Result<(), StoreError> {
        for icon_set in self.icon_sets.find_all() {
            self.populate_icons(&icon_set)?;
        }
        for icon in self.icons.find_all() {
            self.populate_icon_set(&icon)?;
        }
        Ok(())
    }
}
