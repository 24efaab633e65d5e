use async_trait::async_trait;
use uuid::Uuid;

use crate::product::{Category, Collection, Product};

/// Repository trait for product catalog access. Implementations assign ids on
/// create; callers never compute identifiers themselves.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        product: Product,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_product(
        &self,
        id: Uuid,
    ) -> Result<Option<Product>, Box<dyn std::error::Error + Send + Sync>>;

    /// List products, optionally filtered by category slug.
    async fn list_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update_product(
        &self,
        id: Uuid,
        product: Product,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_product(
        &self,
        id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for the shop taxonomy (categories and collections).
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn create_category(
        &self,
        category: Category,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_categories(
        &self,
    ) -> Result<Vec<Category>, Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_category(
        &self,
        id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn create_collection(
        &self,
        collection: Collection,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_collections(
        &self,
    ) -> Result<Vec<Collection>, Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_collection(
        &self,
        id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
