//! Kakapoly Import - reads SVG icon packs from disk into the store.

pub mod pack;
pub mod pipeline;

pub use pack::{builtin_packs, load_packs, PackSource, MANIFEST_FILE};
pub use pipeline::{import_all, import_pack, ImportError, ImportReport, PackOutcome};
