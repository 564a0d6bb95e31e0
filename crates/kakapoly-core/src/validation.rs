use crate::error::ValidationError;
use crate::icon::Icon;
use crate::icon_set::IconSet;

/// Maximum length of a document id.
pub const MAX_ID_LEN: usize = 100;

/// Validator for store documents.
pub struct Validator;

impl Validator {
    /// Validate a document id.
    /// Must be non-empty and at most `MAX_ID_LEN` chars.
    pub fn validate_id(collection: &'static str, id: &str) -> Result<(), ValidationError> {
        Self::validate_required(collection, "id", id)?;
        let len = id.chars().count();
        if len > MAX_ID_LEN {
            return Err(ValidationError::IdTooLong { collection, len });
        }
        Ok(())
    }

    /// Validate a field that must carry a value.
    pub fn validate_required(
        collection: &'static str,
        field: &'static str,
        value: &str,
    ) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField { collection, field });
        }
        Ok(())
    }

    /// Validate a slug.
    /// Must be non-empty and only contain [a-zA-Z0-9_-].
    pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
        Self::validate_required("iconSets", "slug", slug)?;
        if !slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidSlug(slug.to_string()));
        }
        Ok(())
    }

    pub fn validate_icon_set(set: &IconSet) -> Result<(), ValidationError> {
        Self::validate_id("iconSets", &set.id)?;
        Self::validate_required("iconSets", "name", &set.name)?;
        Self::validate_slug(&set.slug)?;
        for icon_id in &set.icons {
            Self::validate_required("iconSets", "icons", icon_id)?;
        }
        Ok(())
    }

    pub fn validate_icon(icon: &Icon) -> Result<(), ValidationError> {
        Self::validate_id("icons", &icon.id)?;
        Self::validate_required("icons", "name", &icon.name)?;
        Self::validate_required("icons", "iconSet", &icon.icon_set)?;
        Ok(())
    }
}
