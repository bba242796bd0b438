/// `StoreRepository` over the in-memory tables
use crate::modules::store::domain::{NewStore, Store, StoreChanges, StoreRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::MemoryTransaction;
use chrono::Utc;
use uuid::Uuid;

impl StoreRepository for MemoryTransaction<'_> {
    fn insert_store(&mut self, store: &NewStore) -> AppResult<Store> {
        // Mirrors the foreign key on stores.mall_id
        if let Some(mall_id) = store.mall_id {
            if !self.tables.malls.iter().any(|mall| mall.id == mall_id) {
                return Err(AppError::DatabaseError(format!(
                    "Foreign key violation: mall {} does not exist",
                    mall_id
                )));
            }
        }

        let now = Utc::now();
        let inserted = Store {
            id: Uuid::new_v4(),
            name: store.name.clone(),
            category: store.category.clone(),
            mall_id: store.mall_id,
            created_at: now,
            updated_at: now,
        };

        self.tables.stores.push(inserted.clone());
        Ok(inserted)
    }

    fn find_store(&mut self, id: Uuid) -> AppResult<Option<Store>> {
        Ok(self.tables.stores.iter().find(|store| store.id == id).cloned())
    }

    fn update_store(&mut self, id: Uuid, changes: &StoreChanges) -> AppResult<Store> {
        let store = self
            .tables
            .stores
            .iter_mut()
            .find(|store| store.id == id)
            .ok_or_else(|| AppError::not_found("Store", id))?;

        store.apply(changes);
        Ok(store.clone())
    }

    fn delete_store(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.tables.stores.len();
        self.tables.stores.retain(|store| store.id != id);

        if self.tables.stores.len() == before {
            return Err(AppError::not_found("Store", id));
        }
        Ok(())
    }

    fn count_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<i64> {
        let count = self
            .tables
            .stores
            .iter()
            .filter(|store| store.mall_id == Some(mall_id))
            .count();

        Ok(count as i64)
    }

    fn list_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<Vec<Store>> {
        Ok(self
            .tables
            .stores
            .iter()
            .filter(|store| store.mall_id == Some(mall_id))
            .cloned()
            .collect())
    }
}
