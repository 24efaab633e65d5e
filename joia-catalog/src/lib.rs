pub mod money;
pub mod product;
pub mod repository;
pub mod variants;

pub use money::{format_brl, Brl};
pub use product::{Category, Collection, Product, StoneVariation};
pub use repository::{ProductRepository, TaxonomyRepository};
pub use variants::{
    description_for, has_variations, label_for, price_for, specs_for, stone_options, StoneOption,
};

/// Errors surfaced by the catalog repository layer. The variant resolver and
/// money formatting are total functions and never return these.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
