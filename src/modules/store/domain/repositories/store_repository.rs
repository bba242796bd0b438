/// Repository trait for store persistence, scoped to one transaction
use crate::modules::store::domain::entities::store::{NewStore, Store, StoreChanges};
use crate::shared::errors::AppResult;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait StoreRepository {
    /// Insert a new store; the backend assigns id and timestamps
    fn insert_store(&mut self, store: &NewStore) -> AppResult<Store>;

    fn find_store(&mut self, id: Uuid) -> AppResult<Option<Store>>;

    /// Fails with `NotFound` when the store does not exist
    fn update_store(&mut self, id: Uuid, changes: &StoreChanges) -> AppResult<Store>;

    /// Fails with `NotFound` when the store does not exist
    fn delete_store(&mut self, id: Uuid) -> AppResult<()>;

    fn count_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<i64>;

    /// Stores owned by the mall, oldest first
    fn list_stores_by_mall(&mut self, mall_id: Uuid) -> AppResult<Vec<Store>>;
}
