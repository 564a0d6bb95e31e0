use std::path::PathBuf;

/// Pipeline configuration from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root holding one directory per icon pack (and optionally packs.json)
    pub icons_dir: PathBuf,
    /// Where iconSets.json and icons.json are written and read
    pub fixtures_dir: PathBuf,
    /// Where the static site is rendered
    pub out_dir: PathBuf,
    pub site_title: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// KAKAPOLY_ICONS_DIR defaults to "icons"
    /// KAKAPOLY_FIXTURES_DIR defaults to "database/dump/collections"
    /// KAKAPOLY_OUT_DIR defaults to "out"
    /// KAKAPOLY_SITE_TITLE defaults to "Kakapoly Icons"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            let value = lookup(name).unwrap_or_else(|| default.to_string());
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(name, "cannot be empty"));
            }
            Ok(value)
        };

        Ok(Config {
            icons_dir: var("KAKAPOLY_ICONS_DIR", "icons")?.into(),
            fixtures_dir: var("KAKAPOLY_FIXTURES_DIR", "database/dump/collections")?.into(),
            out_dir: var("KAKAPOLY_OUT_DIR", "out")?.into(),
            site_title: var("KAKAPOLY_SITE_TITLE", "Kakapoly Icons")?,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
