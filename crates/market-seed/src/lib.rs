//! Demo data seeding for the Nairobi market catalog.
//!
//! This crate populates a local SQLite database with a fixed catalog of
//! categories and sellers plus a deterministic batch of products spread
//! round-robin across them.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use market_seed::prelude::*;
//!
//! let config = SeedConfig::from_current_dir()?;
//! let seeder = Seeder::connect(&config).await?;
//! let report = seeder.run().await?;
//! assert_eq!(report.products_inserted, 1184);
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{CATEGORIES, CategorySpec, PRODUCT_COUNT, SELLERS, SellerSpec};
    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedReport, Seeder, TableCounts};
    pub use crate::generators::{GeneratedProduct, ProductGenConfig, ProductGenerator};
}
