use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gym merchandise item tracked with a unit price and stock count.
///
/// # Fields
///
/// * `id` - Auto-increment primary key
/// * `name` - Item name
/// * `category` - Item category (e.g. "Apparel", "Supplements")
/// * `unit_price` - Price per unit in dollars
/// * `quantity_in_stock` - Units currently on hand
/// * `created_at` - Record creation timestamp
/// * `updated_at` - Record last modification timestamp
///
/// The total stock value is computed at display time via
/// [`stock_value`](GymMerch::stock_value); it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GymMerch {
    /// Auto-increment primary key
    pub id: i64,

    /// Item name
    pub name: String,

    /// Item category
    pub category: String,

    /// Price per unit in dollars
    pub unit_price: f64,

    /// Units currently on hand
    pub quantity_in_stock: i64,

    /// Record creation timestamp
    pub created_at: DateTime<Utc>,

    /// Record last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl GymMerch {
    /// Build a merchandise record ready for insertion.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: f64,
        quantity_in_stock: i64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity_in_stock,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Total value of stock on hand (`unit_price * quantity_in_stock`).
    pub fn stock_value(&self) -> f64 {
        self.unit_price * self.quantity_in_stock as f64
    }
}
