//! Catalog domain module.
//!
//! This crate contains the product record type, implemented purely as
//! immutable domain data (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductId};
