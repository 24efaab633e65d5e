use joia_catalog::product::{Category, Collection};
use joia_catalog::repository::TaxonomyRepository;

/// Stock shop categories.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category {
            id: "aneis".to_string(),
            name: "Anéis".to_string(),
            description: "Símbolos de eternidade e compromisso.".to_string(),
        },
        Category {
            id: "colares".to_string(),
            name: "Colares".to_string(),
            description: "Elegância que envolve.".to_string(),
        },
        Category {
            id: "brincos".to_string(),
            name: "Brincos".to_string(),
            description: "Detalhes que iluminam.".to_string(),
        },
        Category {
            id: "pulseiras".to_string(),
            name: "Pulseiras".to_string(),
            description: "Toque de sofisticação.".to_string(),
        },
    ]
}

/// Stock curated collections.
pub fn default_collections() -> Vec<Collection> {
    vec![
        Collection {
            id: "eternal".to_string(),
            name: "Eternal Collection".to_string(),
            description: "Diamantes clássicos para momentos eternos.".to_string(),
            image: String::new(),
        },
        Collection {
            id: "aurora".to_string(),
            name: "Aurora Gold".to_string(),
            description: "O brilho quente do ouro 18k.".to_string(),
            image: String::new(),
        },
        Collection {
            id: "ocean".to_string(),
            name: "Ocean Pearls".to_string(),
            description: "Pérolas naturais de elegância atemporal.".to_string(),
            image: String::new(),
        },
    ]
}

/// Install the stock taxonomy into a fresh repository. Slugs already present
/// are left untouched.
pub async fn seed_taxonomy(
    repo: &dyn TaxonomyRepository,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let existing_categories: Vec<String> = repo
        .list_categories()
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    for category in default_categories() {
        if !existing_categories.contains(&category.id) {
            repo.create_category(category).await?;
        }
    }

    let existing_collections: Vec<String> = repo
        .list_collections()
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    for collection in default_collections() {
        if !existing_collections.contains(&collection.id) {
            repo.create_collection(collection).await?;
        }
    }

    tracing::info!("seeded default catalog taxonomy");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_repo::MemoryCatalog;

    #[tokio::test]
    async fn test_seed_installs_stock_taxonomy() {
        let repo = MemoryCatalog::new();
        seed_taxonomy(&repo).await.unwrap();

        assert_eq!(repo.list_categories().await.unwrap().len(), 4);
        assert_eq!(repo.list_collections().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = MemoryCatalog::new();
        seed_taxonomy(&repo).await.unwrap();
        seed_taxonomy(&repo).await.unwrap();

        assert_eq!(repo.list_categories().await.unwrap().len(), 4);
    }
}
