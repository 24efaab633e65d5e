use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Storefront identity, editable from the admin back office.
#[derive(Debug, Deserialize, Clone)]
pub struct BrandingConfig {
    #[serde(default = "default_store_name")]
    pub store_name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub contact_email: String,
}

fn default_store_name() -> String {
    "Joia Atelier".to_string()
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            tagline: String::new(),
            logo_url: String::new(),
            contact_email: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Seed the stock categories and collections on startup.
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of JOIA)
            // Eg.. `JOIA_BRANDING__TAGLINE=...` would set the tagline
            .add_source(config::Environment::with_prefix("JOIA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.branding.store_name, "Joia Atelier");
        assert!(config.catalog.seed_defaults);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.branding.store_name, "Joia Atelier");
    }
}
