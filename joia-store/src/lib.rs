pub mod app_config;
pub mod memory_repo;
pub mod seed;

pub use app_config::{BrandingConfig, Config};
pub use memory_repo::{CatalogStats, MemoryCatalog};
