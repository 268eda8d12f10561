//! Gym merchandise management and the stock value report.

use gymdesk_storage::models::GymMerch;
use gymdesk_storage::repositories::{MerchRepository, SqliteMerchRepository};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::ServiceResult;

/// One line of the merchandise stock report.
///
/// `value` is `unit_price * quantity_in_stock`, computed at report time
/// and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct StockLine {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity_in_stock: i64,
    pub value: f64,
}

impl From<&GymMerch> for StockLine {
    fn from(merch: &GymMerch) -> Self {
        Self {
            id: merch.id,
            name: merch.name.clone(),
            unit_price: merch.unit_price,
            quantity_in_stock: merch.quantity_in_stock,
            value: merch.stock_value(),
        }
    }
}

/// Service for merchandise operations.
pub struct MerchService {
    merch: SqliteMerchRepository,
}

impl MerchService {
    /// Create a merchandise service over the given pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            merch: SqliteMerchRepository::new(pool),
        }
    }

    /// Add a merchandise item
    pub async fn add(&self, merch: &GymMerch) -> ServiceResult<GymMerch> {
        let mut created = merch.clone();
        created.id = self.merch.create(merch).await?;
        info!(name = %created.name, id = created.id, "merch added");
        Ok(created)
    }

    /// Get a merchandise item by id
    pub async fn get(&self, id: i64) -> ServiceResult<Option<GymMerch>> {
        let merch = self.merch.find_by_id(id).await?;
        if merch.is_none() {
            warn!(id, "merch not found");
        }
        Ok(merch)
    }

    /// Get all merchandise items
    pub async fn all(&self) -> ServiceResult<Vec<GymMerch>> {
        Ok(self.merch.find_all().await?)
    }

    /// Update a merchandise item (full field set)
    pub async fn update(&self, merch: &GymMerch) -> ServiceResult<()> {
        self.merch.update(merch).await?;
        info!(id = merch.id, "merch updated");
        Ok(())
    }

    /// Delete a merchandise item by id
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.merch.delete(id).await?;
        info!(id, "merch deleted");
        Ok(())
    }

    /// Build the stock report: one line per item with its computed value.
    pub async fn stock_report(&self) -> ServiceResult<Vec<StockLine>> {
        let items = self.merch.find_all().await?;
        Ok(items.iter().map(StockLine::from).collect())
    }
}
