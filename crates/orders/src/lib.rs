//! Orders domain module.
//!
//! This crate contains the order record type, implemented purely as
//! immutable domain data (no IO, no HTTP, no storage).

pub mod order;

pub use order::{Order, OrderId};
