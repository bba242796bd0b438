/// `MallRepository` over the in-memory tables
use crate::modules::mall::domain::{Mall, MallChanges, MallRepository, NewMall};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::MemoryTransaction;
use chrono::Utc;
use uuid::Uuid;

impl MemoryTransaction<'_> {
    fn mall_mut(&mut self, id: Uuid) -> AppResult<&mut Mall> {
        self.tables
            .malls
            .iter_mut()
            .find(|mall| mall.id == id)
            .ok_or_else(|| AppError::not_found("Mall", id))
    }
}

impl MallRepository for MemoryTransaction<'_> {
    fn insert_mall(&mut self, mall: &NewMall) -> AppResult<Mall> {
        let now = Utc::now();
        let inserted = Mall {
            id: Uuid::new_v4(),
            name: mall.name.clone(),
            city: mall.city.clone(),
            revenue: 0,
            capacity: mall.capacity,
            created_at: now,
            updated_at: now,
        };

        self.tables.malls.push(inserted.clone());
        Ok(inserted)
    }

    fn find_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>> {
        Ok(self.tables.malls.iter().find(|mall| mall.id == id).cloned())
    }

    fn lock_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>> {
        // Transactions are already serialized by the unit of work
        self.find_mall(id)
    }

    fn list_malls(&mut self) -> AppResult<Vec<Mall>> {
        Ok(self.tables.malls.clone())
    }

    fn update_mall(&mut self, id: Uuid, changes: &MallChanges) -> AppResult<Mall> {
        let mall = self.mall_mut(id)?;
        mall.apply(changes);
        Ok(mall.clone())
    }

    fn increase_revenue(&mut self, id: Uuid, amount: i64) -> AppResult<Mall> {
        let mall = self.mall_mut(id)?;
        mall.revenue += amount;
        mall.updated_at = Utc::now();
        Ok(mall.clone())
    }

    fn delete_mall(&mut self, id: Uuid) -> AppResult<()> {
        // Mirrors the foreign key on stores.mall_id
        if self.tables.stores.iter().any(|store| store.mall_id == Some(id)) {
            return Err(AppError::DatabaseError(format!(
                "Foreign key violation: mall {} still has stores",
                id
            )));
        }

        let before = self.tables.malls.len();
        self.tables.malls.retain(|mall| mall.id != id);

        if self.tables.malls.len() == before {
            return Err(AppError::not_found("Mall", id));
        }
        Ok(())
    }
}
