//! Page data: what each page shows, queried from a loaded store.

use kakapoly_core::{DocumentStore, Icon, IconSet, StoreError};
use kakapoly_db::Database;

/// An icon set with its icons resolved, in set order.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSetPage {
    pub icon_set: IconSet,
    pub icons: Vec<Icon>,
}

/// An icon with its owning icon set resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPage {
    pub icon: Icon,
    pub icon_set: IconSet,
}

/// Every icon set with its icons. Sets with dangling references are
/// logged and left out.
pub fn icon_sets_page(db: &Database) -> Vec<IconSetPage> {
    db.icon_sets
        .find_all()
        .into_iter()
        .filter_map(|icon_set| match db.populate_icons(&icon_set) {
            Ok(icons) => Some(IconSetPage { icon_set, icons }),
            Err(e) => {
                tracing::warn!(slug = %icon_set.slug, "Skipping icon set: {}", e);
                None
            }
        })
        .collect()
}

/// The icon set routed at `slug`, or `None` if there is none.
pub fn icon_set_page(db: &Database, slug: &str) -> Result<Option<IconSetPage>, StoreError> {
    let Some(icon_set) = db.icon_set_by_slug(slug) else {
        return Ok(None);
    };
    let icons = db.populate_icons(&icon_set)?;
    Ok(Some(IconSetPage { icon_set, icons }))
}

/// The icon with `id`, or `None` if there is none.
pub fn icon_page(db: &Database, id: &str) -> Result<Option<IconPage>, StoreError> {
    let Some(icon) = db.icons.find_by_id(id) else {
        return Ok(None);
    };
    let icon_set = db.populate_icon_set(&icon)?;
    Ok(Some(IconPage { icon, icon_set }))
}
