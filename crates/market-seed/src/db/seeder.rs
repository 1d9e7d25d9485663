//! Database seeding utilities.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info};

use super::schema;
use crate::catalog::{CATEGORIES, SELLERS};
use crate::config::SeedConfig;
use crate::generators::{GeneratedProduct, ProductGenConfig, ProductGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Category not found: {0}")]
    MissingCategory(String),
    #[error("Catalog has no categories or sellers")]
    EmptyCatalog,
}

/// Row counts of the seeded tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TableCounts {
    pub categories: i64,
    pub sellers: i64,
    pub products: i64,
}

/// Timing of a seeding run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SeedMetrics {
    /// Time spent generating products (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent in the database transaction (milliseconds).
    pub seeding_time_ms: u64,
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Categories newly inserted; existing names are skipped.
    pub categories_inserted: u64,
    /// Sellers newly inserted.
    pub sellers_inserted: u64,
    pub products_inserted: u64,
    /// Table sizes after the commit.
    pub counts: TableCounts,
    pub metrics: SeedMetrics,
}

/// Database seeder for the market catalog.
pub struct Seeder {
    pool: SqlitePool,
    batch_size: usize,
    product_count: usize,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            batch_size: 50,
            product_count: ProductGenConfig::default().count,
        }
    }

    /// Opens the configured database, creating the file if needed.
    ///
    /// The pool holds a single connection for the whole run.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool)
            .with_batch_size(config.batch_size)
            .with_product_count(config.product_count))
    }

    /// Sets the batch size for bulk inserts.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Sets the number of products generated per run.
    pub fn with_product_count(mut self, count: usize) -> Self {
        self.product_count = count;
        self
    }

    /// Seeds everything using the current time for all timestamps.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        self.seed(now_millis()).await
    }

    /// Seeds the schema, catalog and products in a single transaction.
    ///
    /// Every row inserted carries `now_ms` as its timestamps. Nothing is
    /// persisted unless the whole run succeeds.
    pub async fn seed(&self, now_ms: i64) -> Result<SeedReport, SeedError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        schema::ensure_schema(&mut tx).await?;

        info!("Seeding categories...");
        let categories_inserted = Self::seed_categories(&mut tx, now_ms).await?;

        info!("Seeding sellers...");
        let sellers_inserted = Self::seed_sellers(&mut tx, now_ms).await?;

        let category_ids = Self::category_ids(&mut tx).await?;

        let product_gen = ProductGenerator::with_config(ProductGenConfig {
            count: self.product_count,
            ..Default::default()
        });
        info!("Seeding {} products...", product_gen.count());
        let generation_started = Instant::now();
        let products = product_gen.generate_batch(&category_ids, now_ms)?;
        let generation_time_ms = generation_started.elapsed().as_millis() as u64;

        let products_inserted = self.insert_products(&mut tx, &products).await?;
        let counts = Self::count_rows(&mut tx).await?;

        tx.commit().await?;

        let seeding_time_ms = started.elapsed().as_millis() as u64;

        info!(
            categories_inserted,
            sellers_inserted,
            products_inserted,
            "Seeding committed"
        );

        Ok(SeedReport {
            categories_inserted,
            sellers_inserted,
            products_inserted,
            counts,
            metrics: SeedMetrics {
                generation_time_ms,
                seeding_time_ms,
            },
        })
    }

    /// Inserts the fixed categories, skipping names that already exist.
    async fn seed_categories(conn: &mut SqliteConnection, now_ms: i64) -> Result<u64, SeedError> {
        let mut inserted = 0;

        for category in &CATEGORIES {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO categories (name, description, createdAt)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(category.name)
            .bind(category.description)
            .bind(now_ms)
            .execute(&mut *conn)
            .await?;

            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    /// Inserts the fixed sellers, skipping any that conflict with existing rows.
    async fn seed_sellers(conn: &mut SqliteConnection, now_ms: i64) -> Result<u64, SeedError> {
        let mut inserted = 0;

        for seller in &SELLERS {
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO sellers
                    (userId, storeName, description, whatsappPhone, rating, totalSales, createdAt, updatedAt)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(seller.user_id)
            .bind(seller.store_name)
            .bind(seller.description)
            .bind(seller.whatsapp_phone)
            .bind(seller.rating)
            .bind(seller.total_sales)
            .bind(now_ms)
            .bind(now_ms)
            .execute(&mut *conn)
            .await?;

            inserted += result.rows_affected();
        }

        Ok(inserted)
    }

    /// Reads back the category table as a name to id map.
    async fn category_ids(conn: &mut SqliteConnection) -> Result<HashMap<String, i64>, SeedError> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM categories")
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows.into_iter().map(|(id, name)| (name, id)).collect())
    }

    /// Bulk inserts products as multi-row statements of `batch_size` rows.
    async fn insert_products(
        &self,
        conn: &mut SqliteConnection,
        products: &[GeneratedProduct],
    ) -> Result<u64, SeedError> {
        let mut inserted = 0;

        for chunk in products.chunks(self.batch_size) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO products (sellerId, categoryId, name, description, price, imageUrl, stock, source, createdAt, updatedAt) ",
            );
            builder.push_values(chunk, |mut row, product| {
                row.push_bind(product.seller_id)
                    .push_bind(product.category_id)
                    .push_bind(product.name.as_str())
                    .push_bind(product.description.as_str())
                    .push_bind(product.price.as_str())
                    .push_bind(product.image_url.as_str())
                    .push_bind(product.stock)
                    .push_bind(product.source.as_str())
                    .push_bind(product.created_at)
                    .push_bind(product.updated_at);
            });

            let result = builder.build().execute(&mut *conn).await?;
            inserted += result.rows_affected();

            debug!("  Inserted {}/{} products", inserted, products.len());
        }

        Ok(inserted)
    }

    async fn count_rows(conn: &mut SqliteConnection) -> Result<TableCounts, SeedError> {
        let counts = sqlx::query_as::<_, TableCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM categories) AS categories,
                (SELECT COUNT(*) FROM sellers) AS sellers,
                (SELECT COUNT(*) FROM products) AS products
            "#,
        )
        .fetch_one(&mut *conn)
        .await?;

        Ok(counts)
    }

    /// Returns the current row counts, creating the tables if they are missing.
    pub async fn counts(&self) -> Result<TableCounts, SeedError> {
        let mut conn = self.pool.acquire().await?;
        schema::ensure_schema(&mut conn).await?;
        Self::count_rows(&mut conn).await
    }

    /// Clears all seeded data and resets the id sequences.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        let mut tx = self.pool.begin().await?;
        schema::ensure_schema(&mut tx).await?;

        // Products reference sellers and categories
        sqlx::query("DELETE FROM products").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM sellers").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM categories")
            .execute(&mut *tx)
            .await?;
        sqlx::query(
            "DELETE FROM sqlite_sequence WHERE name IN ('products', 'sellers', 'categories')",
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("All data cleared");
        Ok(())
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Current time in milliseconds since the Unix epoch.
fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
