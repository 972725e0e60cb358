//! Customers domain module.
//!
//! This crate contains the customer record type, implemented purely as
//! immutable domain data (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{Customer, CustomerId};
