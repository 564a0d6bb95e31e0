//! Kakapoly Site - static pages rendered from the JSON fixtures.

pub mod build;
pub mod bundle;
pub mod pages;
pub mod render;
pub mod svg;

pub use build::{build_site, SiteConfig, SiteError, SiteReport};
pub use bundle::{bundle_icons, bundle_name};
pub use pages::{icon_page, icon_set_page, icon_sets_page, IconPage, IconSetPage};
