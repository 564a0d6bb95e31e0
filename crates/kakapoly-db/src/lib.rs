//! Kakapoly DB - in-memory document collections and JSON fixtures.

pub mod collection;
pub mod database;
pub mod fixtures;

pub use collection::Collection;
pub use database::Database;
pub use fixtures::{
    export_fixtures, load_fixtures, ExportReport, FixtureError, LoadStats, ICONS_FILE,
    ICON_SETS_FILE,
};
