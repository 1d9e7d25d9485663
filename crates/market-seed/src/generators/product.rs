//! Deterministic product generation.
//!
//! Products are spread round-robin over the catalog: product `i` belongs to
//! category `i % categories` and seller `(i % sellers) + 1`, and its price,
//! stock and image are derived from `i` alone.

use std::collections::HashMap;

use crate::catalog::{self, PRODUCT_COUNT, PROVENANCE_TAG};
use crate::db::SeedError;

/// Number of distinct price points.
const PRICE_STEPS: usize = 50;
/// Number of distinct stock levels.
const STOCK_STEPS: usize = 20;
const BASE_PHOTO_ID: i64 = 1_500_000_000_000;
const PHOTO_ID_STRIDE: i64 = 1_000_000;

/// Generated product data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProduct {
    pub seller_id: i64,
    pub category_id: i64,
    /// Category name, kept for reporting. Not persisted.
    pub category_name: String,
    pub name: String,
    pub description: String,
    /// Price as a decimal string, e.g. `"1000"`.
    pub price: String,
    pub image_url: String,
    pub stock: i64,
    pub source: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Configuration for product generation.
#[derive(Debug, Clone)]
pub struct ProductGenConfig {
    /// Total number of products to generate.
    pub count: usize,
    /// Category names in assignment order.
    pub categories: Vec<String>,
    /// Number of sellers products are spread over.
    pub seller_count: usize,
}

impl Default for ProductGenConfig {
    fn default() -> Self {
        Self {
            count: PRODUCT_COUNT,
            categories: catalog::category_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            seller_count: catalog::SELLERS.len(),
        }
    }
}

/// Generates the product batch from the catalog.
pub struct ProductGenerator {
    config: ProductGenConfig,
}

impl ProductGenerator {
    /// Creates a generator over the fixed catalog.
    pub fn new() -> Self {
        Self {
            config: ProductGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProductGenConfig) -> Self {
        Self { config }
    }

    /// Number of products a batch will contain.
    pub fn count(&self) -> usize {
        self.config.count
    }

    /// Generates the product at `index`.
    ///
    /// `category_ids` maps category names to their stored ids.
    pub fn generate(
        &self,
        index: usize,
        category_ids: &HashMap<String, i64>,
        now_ms: i64,
    ) -> Result<GeneratedProduct, SeedError> {
        if self.config.categories.is_empty() || self.config.seller_count == 0 {
            return Err(SeedError::EmptyCatalog);
        }

        let category_name = &self.config.categories[index % self.config.categories.len()];
        let category_id = *category_ids
            .get(category_name)
            .ok_or_else(|| SeedError::MissingCategory(category_name.clone()))?;

        Ok(GeneratedProduct {
            seller_id: seller_id_for(index, self.config.seller_count),
            category_id,
            category_name: category_name.clone(),
            name: format!("{category_name} Item {}", index + 1),
            description: format!(
                "High-quality {category_name} from authentic Kenyan markets. Perfect for your needs."
            ),
            price: price_for(index),
            image_url: image_url_for(index),
            stock: stock_for(index),
            source: PROVENANCE_TAG.to_string(),
            created_at: now_ms,
            updated_at: now_ms,
        })
    }

    /// Generates the full batch in index order.
    pub fn generate_batch(
        &self,
        category_ids: &HashMap<String, i64>,
        now_ms: i64,
    ) -> Result<Vec<GeneratedProduct>, SeedError> {
        (0..self.config.count)
            .map(|i| self.generate(i, category_ids, now_ms))
            .collect()
    }
}

impl Default for ProductGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based seller id for product `index`.
pub fn seller_id_for(index: usize, seller_count: usize) -> i64 {
    (index % seller_count) as i64 + 1
}

/// Price string cycling 1000, 1100, ... 5900.
pub fn price_for(index: usize) -> String {
    (1000 + (index % PRICE_STEPS) * 100).to_string()
}

/// Stock level cycling 5 through 24.
pub fn stock_for(index: usize) -> i64 {
    5 + (index % STOCK_STEPS) as i64
}

/// Image URL with a synthetic photo id.
pub fn image_url_for(index: usize) -> String {
    let photo_id = BASE_PHOTO_ID + index as i64 * PHOTO_ID_STRIDE;
    format!("https://images.unsplash.com/photo-{photo_id}?w=500&h=500&fit=crop")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_ids() -> HashMap<String, i64> {
        catalog::CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.to_string(), i as i64 + 1))
            .collect()
    }

    #[test]
    fn test_first_product() {
        let product_gen = ProductGenerator::new();
        let product = product_gen.generate(0, &catalog_ids(), 42).unwrap();

        assert_eq!(product.category_name, "Shoes");
        assert_eq!(product.category_id, 1);
        assert_eq!(product.seller_id, 1);
        assert_eq!(product.name, "Shoes Item 1");
        assert_eq!(product.price, "1000");
        assert_eq!(product.stock, 5);
        assert_eq!(
            product.image_url,
            "https://images.unsplash.com/photo-1500000000000?w=500&h=500&fit=crop"
        );
        assert_eq!(product.source, "nairobi_market");
        assert_eq!(product.created_at, 42);
        assert_eq!(product.updated_at, 42);
    }

    #[test]
    fn test_last_product() {
        let product_gen = ProductGenerator::new();
        let product = product_gen.generate(1183, &catalog_ids(), 0).unwrap();

        assert_eq!(product.category_name, "Watches");
        assert_eq!(product.seller_id, 4);
        assert_eq!(product.name, "Watches Item 1184");
        assert_eq!(product.price, "4300");
        assert_eq!(product.stock, 8);
        assert_eq!(
            product.image_url,
            "https://images.unsplash.com/photo-1501183000000?w=500&h=500&fit=crop"
        );
    }

    #[test]
    fn test_generate_batch() {
        let product_gen = ProductGenerator::new();
        let products = product_gen.generate_batch(&catalog_ids(), 0).unwrap();

        assert_eq!(products.len(), PRODUCT_COUNT);

        for (i, product) in products.iter().enumerate() {
            assert_eq!(product.category_name, catalog::CATEGORIES[i % 8].name);
            assert_eq!(product.seller_id, (i % 5) as i64 + 1);

            let price: usize = product.price.parse().unwrap();
            assert!((1000..=5900).contains(&price));
            assert_eq!(price % 100, 0);
            assert!((5..=24).contains(&product.stock));
        }
    }

    #[test]
    fn test_description_mentions_category() {
        let product_gen = ProductGenerator::new();
        let product = product_gen.generate(5, &catalog_ids(), 0).unwrap();

        assert_eq!(product.category_name, "Home Decor");
        assert_eq!(
            product.description,
            "High-quality Home Decor from authentic Kenyan markets. Perfect for your needs."
        );
    }

    #[test]
    fn test_missing_category() {
        let product_gen = ProductGenerator::new();
        let mut ids = catalog_ids();
        ids.remove("Fashion");

        assert!(product_gen.generate(0, &ids, 0).is_ok());
        let err = product_gen.generate(1, &ids, 0).unwrap_err();
        assert!(matches!(err, SeedError::MissingCategory(ref name) if name == "Fashion"));
    }

    #[test]
    fn test_empty_catalog() {
        let product_gen = ProductGenerator::with_config(ProductGenConfig {
            categories: Vec::new(),
            ..Default::default()
        });

        assert!(matches!(
            product_gen.generate(0, &HashMap::new(), 0),
            Err(SeedError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_price_and_stock_cycles() {
        assert_eq!(price_for(49), "5900");
        assert_eq!(price_for(50), "1000");
        assert_eq!(stock_for(19), 24);
        assert_eq!(stock_for(20), 5);
    }
}
