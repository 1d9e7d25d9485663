//! Database integration for seeding the market catalog.
//!
//! The [`Seeder`] creates the schema, inserts the fixed catalog and the
//! generated products inside a single transaction.

pub mod schema;
mod seeder;

pub use seeder::{SeedError, SeedMetrics, SeedReport, Seeder, TableCounts};
