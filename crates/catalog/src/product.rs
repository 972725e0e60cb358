use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, EntityId};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog record: Product.
///
/// Immutable after construction. Categories are free-form labels compared
/// case-insensitively; the price is always non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    price: f64,
}

impl Product {
    /// Create a product record.
    ///
    /// Rejects an empty name, an empty category, and a negative or
    /// non-finite price.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("product category cannot be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "product price must be a non-negative finite number (got {price})"
            )));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Compare the category against a label, ignoring ASCII case.
    pub fn category_matches(&self, label: &str) -> bool {
        self.category.eq_ignore_ascii_case(label)
    }

    /// Produce a new product with a different price; the original is untouched.
    pub fn with_price(&self, price: f64) -> DomainResult<Self> {
        Self::new(self.id, self.name.clone(), self.category.clone(), price)
    }

    /// Produce a new product with the price scaled by `factor`.
    ///
    /// Scaling a non-negative price by a non-negative factor cannot violate
    /// the price invariant, so this is infallible. Callers pass factors in
    /// `[0, 1]` (e.g. `0.9` for a 10% discount).
    pub fn discounted(&self, factor: f64) -> Self {
        debug_assert!(factor.is_finite() && factor >= 0.0);
        Self {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price * factor,
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
