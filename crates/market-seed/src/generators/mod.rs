//! Entity generators for seed data.
//!
//! - [`ProductGenerator`]: Generate the round-robin product batch from the catalog

pub mod product;

pub use product::{GeneratedProduct, ProductGenConfig, ProductGenerator};
