use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product. `available = false` marks a soft-deleted record:
/// logically removed but physically retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload. The id is assigned by the datastore and `available`
/// starts as true, so neither appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

/// Partial update payload. Absent fields are left unchanged. Carries no id
/// and no `available`, so a payload can never override the addressed id or
/// flip availability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        price: f64,
        available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            available,
            created_at,
            updated_at,
        }
    }
}
