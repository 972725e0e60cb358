use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopfront_catalog::Product;
use shopfront_core::{Entity, EntityId};
use shopfront_customers::Customer;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order record.
///
/// References exactly one customer and zero or more products. The product
/// sequence keeps its insertion order and may contain duplicates. Equality
/// and hashing follow identity (the id), so an order can key a grouping map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_date: NaiveDate,
    customer: Customer,
    products: Vec<Product>,
}

impl Order {
    pub fn new(
        id: OrderId,
        order_date: NaiveDate,
        customer: Customer,
        products: Vec<Product>,
    ) -> Self {
        Self {
            id,
            order_date,
            customer,
            products,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// True when any product in the order carries the given category label
    /// (ASCII case-insensitive).
    pub fn contains_category(&self, label: &str) -> bool {
        self.products.iter().any(|p| p.category_matches(label))
    }

    /// Sum of the order's product prices; 0.0 for an empty order.
    pub fn product_total(&self) -> f64 {
        self.products.iter().map(Product::price).sum()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
