/// Diesel implementation of `StoreRepository` on a PostgreSQL transaction
use super::models::{NewStoreModel, StoreChangeset, StoreModel};
use crate::modules::store::domain::{NewStore, Store, StoreChanges, StoreRepository};
use crate::schema::stores;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::PgTransaction;
use diesel::prelude::*;
use uuid::Uuid;

impl StoreRepository for PgTransaction<'_> {
    fn insert_store(&mut self, store: &NewStore) -> AppResult<Store> {
        let inserted = diesel::insert_into(stores::table)
            .values(NewStoreModel::from(store))
            .returning(StoreModel::as_returning())
            .get_result(self.connection())
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert store: {}", e)))?;

        Ok(inserted.into())
    }

    fn find_store(&mut self, id: Uuid) -> AppResult<Option<Store>> {
        let found = stores::table
            .find(id)
            .select(StoreModel::as_select())
            .first(self.connection())
            .optional()?;

        Ok(found.map(Store::from))
    }

    fn update_store(&mut self, id: Uuid, changes: &StoreChanges) -> AppResult<Store> {
        let updated = diesel::update(stores::table.find(id))
            .set(StoreChangeset::from(changes))
            .returning(StoreModel::as_returning())
            .get_result(self.connection())
            .optional()?;

        updated
            .map(Store::from)
            .ok_or_else(|| AppError::not_found("Store", id))
    }

    fn delete_store(&mut self, id: Uuid) -> AppResult<()> {
        let deleted = diesel::delete(stores::table.find(id)).execute(self.connection())?;

        if deleted == 0 {
            return Err(AppError::not_found("Store", id));
        }
        Ok(())
    }

    fn count_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<i64> {
        let count = stores::table
            .filter(stores::mall_id.eq(mall_id))
            .count()
            .get_result(self.connection())?;

        Ok(count)
    }

    fn list_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<Vec<Store>> {
        let rows = stores::table
            .filter(stores::mall_id.eq(mall_id))
            .order((stores::created_at.asc(), stores::id.asc()))
            .select(StoreModel::as_select())
            .load(self.connection())?;

        Ok(rows.into_iter().map(Store::from).collect())
    }
}
