use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use joia_catalog::product::{Category, Collection, Product};
use joia_catalog::repository::{ProductRepository, TaxonomyRepository};
use joia_catalog::CatalogError;

type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Counts surfaced on the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub products: usize,
    pub active_products: usize,
    pub categories: usize,
    pub collections: usize,
}

/// In-memory catalog backing store. Ids are assigned here, never by the
/// caller; taxonomy entries are keyed by their slug.
pub struct MemoryCatalog {
    products: RwLock<HashMap<Uuid, Product>>,
    categories: RwLock<BTreeMap<String, Category>>,
    collections: RwLock<BTreeMap<String, Collection>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            categories: RwLock::new(BTreeMap::new()),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn stats(&self) -> CatalogStats {
        let products = self.products.read().await;
        CatalogStats {
            products: products.len(),
            active_products: products.values().filter(|p| p.is_active).count(),
            categories: self.categories.read().await.len(),
            collections: self.collections.read().await.len(),
        }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryCatalog {
    async fn create_product(&self, mut product: Product) -> RepoResult<Uuid> {
        if product.name.trim().is_empty() {
            return Err(CatalogError::Validation("product name is required".into()).into());
        }

        // Server-assigned identity; whatever the caller put in `id` is
        // discarded.
        let id = Uuid::new_v4();
        product.id = id;

        tracing::debug!(%id, name = %product.name, "creating product");
        self.products.write().await.insert(id, product);
        Ok(id)
    }

    async fn get_product(&self, id: Uuid) -> RepoResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list_products(&self, category: Option<&str>) -> RepoResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut listed: Vec<Product> = products
            .values()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    async fn update_product(&self, id: Uuid, mut product: Product) -> RepoResult<()> {
        let mut products = self.products.write().await;
        if !products.contains_key(&id) {
            return Err(CatalogError::NotFound(id.to_string()).into());
        }
        product.id = id;
        tracing::debug!(%id, "updating product");
        products.insert(id, product);
        Ok(())
    }

    async fn delete_product(&self, id: Uuid) -> RepoResult<()> {
        if self.products.write().await.remove(&id).is_none() {
            return Err(CatalogError::NotFound(id.to_string()).into());
        }
        tracing::debug!(%id, "deleted product");
        Ok(())
    }
}

#[async_trait]
impl TaxonomyRepository for MemoryCatalog {
    async fn create_category(&self, category: Category) -> RepoResult<()> {
        let mut categories = self.categories.write().await;
        if categories.contains_key(&category.id) {
            return Err(CatalogError::DuplicateSlug(category.id).into());
        }
        categories.insert(category.id.clone(), category);
        Ok(())
    }

    async fn list_categories(&self) -> RepoResult<Vec<Category>> {
        Ok(self.categories.read().await.values().cloned().collect())
    }

    async fn delete_category(&self, id: &str) -> RepoResult<()> {
        if self.categories.write().await.remove(id).is_none() {
            return Err(CatalogError::NotFound(id.to_string()).into());
        }
        Ok(())
    }

    async fn create_collection(&self, collection: Collection) -> RepoResult<()> {
        let mut collections = self.collections.write().await;
        if collections.contains_key(&collection.id) {
            return Err(CatalogError::DuplicateSlug(collection.id).into());
        }
        collections.insert(collection.id.clone(), collection);
        Ok(())
    }

    async fn list_collections(&self) -> RepoResult<Vec<Collection>> {
        Ok(self.collections.read().await.values().cloned().collect())
    }

    async fn delete_collection(&self, id: &str) -> RepoResult<()> {
        if self.collections.write().await.remove(id).is_none() {
            return Err(CatalogError::NotFound(id.to_string()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let repo = MemoryCatalog::new();
        let mut product = Product::new("Anel Solitário Royal", 12500);
        let stale = Uuid::new_v4();
        product.id = stale;

        let id = repo.create_product(product).await.unwrap();
        assert_ne!(id, stale);
        assert_eq!(
            repo.get_product(id).await.unwrap().unwrap().name,
            "Anel Solitário Royal"
        );
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let repo = MemoryCatalog::new();
        let err = repo.create_product(Product::new("  ", 100)).await.unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let repo = MemoryCatalog::new();
        let mut ring = Product::new("Anel Aurora", 4200);
        ring.category = "aneis".to_string();
        let mut necklace = Product::new("Colar Minimalist Gold", 4200);
        necklace.category = "colares".to_string();
        repo.create_product(ring).await.unwrap();
        repo.create_product(necklace).await.unwrap();

        let rings = repo.list_products(Some("aneis")).await.unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].name, "Anel Aurora");
        assert_eq!(repo.list_products(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_id_stable() {
        let repo = MemoryCatalog::new();
        let id = repo
            .create_product(Product::new("Brinco Pérola", 2100))
            .await
            .unwrap();

        let mut updated = Product::new("Brinco Pérola Negra", 2600);
        updated.id = Uuid::new_v4();
        repo.update_product(id, updated).await.unwrap();

        let stored = repo.get_product(id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.price, 2600);
    }

    #[tokio::test]
    async fn test_delete_unknown_product_fails() {
        let repo = MemoryCatalog::new();
        assert!(repo.delete_product(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_category_slug_rejected() {
        let repo = MemoryCatalog::new();
        let category = Category {
            id: "aneis".to_string(),
            name: "Anéis".to_string(),
            description: String::new(),
        };
        repo.create_category(category.clone()).await.unwrap();
        let err = repo.create_category(category).await.unwrap_err();
        assert!(err.to_string().contains("aneis"));
    }

    #[tokio::test]
    async fn test_stats_reflect_contents() {
        let repo = MemoryCatalog::new();
        let mut hidden = Product::new("Pulseira Riviera", 8800);
        hidden.is_active = false;
        repo.create_product(hidden).await.unwrap();
        repo.create_product(Product::new("Anel Aurora", 4200))
            .await
            .unwrap();

        let stats = repo.stats().await;
        assert_eq!(stats.products, 2);
        assert_eq!(stats.active_products, 1);
        assert_eq!(stats.categories, 0);
    }
}
