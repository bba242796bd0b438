use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entities::store::Store;

/// Raised once a mall-owned store has been inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCreated {
    pub store_id: Uuid,
    pub mall_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl StoreCreated {
    /// `None` for stores that do not belong to a mall
    pub fn for_store(store: &Store) -> Option<Self> {
        store.mall_id.map(|mall_id| Self {
            store_id: store.id,
            mall_id,
            created_at: store.created_at,
        })
    }
}
