/// Diesel implementation of `MallRepository` on a PostgreSQL transaction
use super::models::{MallChangeset, MallModel, NewMallModel};
use crate::modules::mall::domain::{Mall, MallChanges, MallRepository, NewMall};
use crate::schema::malls;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::PgTransaction;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

impl MallRepository for PgTransaction<'_> {
    fn insert_mall(&mut self, mall: &NewMall) -> AppResult<Mall> {
        let inserted = diesel::insert_into(malls::table)
            .values(NewMallModel::from(mall))
            .returning(MallModel::as_returning())
            .get_result(self.connection())
            .map_err(|e| AppError::DatabaseError(format!("Failed to insert mall: {}", e)))?;

        Ok(inserted.into())
    }

    fn find_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>> {
        let found = malls::table
            .find(id)
            .select(MallModel::as_select())
            .first(self.connection())
            .optional()?;

        Ok(found.map(Mall::from))
    }

    fn lock_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>> {
        // SELECT ... FOR UPDATE serializes store creation per mall
        let found = malls::table
            .find(id)
            .select(MallModel::as_select())
            .for_update()
            .get_result(self.connection())
            .optional()?;

        Ok(found.map(Mall::from))
    }

    fn list_malls(&mut self) -> AppResult<Vec<Mall>> {
        let rows = malls::table
            .order((malls::created_at.asc(), malls::id.asc()))
            .select(MallModel::as_select())
            .load(self.connection())?;

        Ok(rows.into_iter().map(Mall::from).collect())
    }

    fn update_mall(&mut self, id: Uuid, changes: &MallChanges) -> AppResult<Mall> {
        let updated = diesel::update(malls::table.find(id))
            .set(MallChangeset::from(changes))
            .returning(MallModel::as_returning())
            .get_result(self.connection())
            .optional()?;

        updated
            .map(Mall::from)
            .ok_or_else(|| AppError::not_found("Mall", id))
    }

    fn increase_revenue(&mut self, id: Uuid, amount: i64) -> AppResult<Mall> {
        // Single UPDATE so concurrent increments cannot be lost
        let updated = diesel::update(malls::table.find(id))
            .set((
                malls::revenue.eq(malls::revenue + amount),
                malls::updated_at.eq(Utc::now()),
            ))
            .returning(MallModel::as_returning())
            .get_result(self.connection())
            .optional()?;

        updated
            .map(Mall::from)
            .ok_or_else(|| AppError::not_found("Mall", id))
    }

    fn delete_mall(&mut self, id: Uuid) -> AppResult<()> {
        let deleted = diesel::delete(malls::table.find(id)).execute(self.connection())?;

        if deleted == 0 {
            return Err(AppError::not_found("Mall", id));
        }
        Ok(())
    }
}
