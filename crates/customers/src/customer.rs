use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, EntityId};

/// Customer identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub EntityId);

impl CustomerId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Customer record.
///
/// Equality and hashing follow identity (the id), so a customer can key a
/// grouping map directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    tier: u8,
}

impl Customer {
    /// Create a customer record.
    ///
    /// The tier is a small positive integer classifying customer status
    /// (e.g. 1–3); zero is rejected.
    pub fn new(id: CustomerId, name: impl Into<String>, tier: u8) -> DomainResult<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if tier == 0 {
            return Err(DomainError::validation("customer tier must be positive"));
        }

        Ok(Self { id, name, tier })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
