/// Repository trait for mall persistence
///
/// Implemented by transaction handles, so every call takes part in the
/// surrounding unit of work.
use crate::modules::mall::domain::entities::mall::{Mall, MallChanges, NewMall};
use crate::shared::errors::AppResult;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
pub trait MallRepository {
    /// Insert a new mall; the backend assigns id, revenue and timestamps
    fn insert_mall(&mut self, mall: &NewMall) -> AppResult<Mall>;

    fn find_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>>;

    /// Like `find_mall`, but holds a row lock until the transaction ends
    fn lock_mall(&mut self, id: Uuid) -> AppResult<Option<Mall>>;

    fn list_malls(&mut self) -> AppResult<Vec<Mall>>;

    /// Fails with `NotFound` when the mall does not exist
    fn update_mall(&mut self, id: Uuid, changes: &MallChanges) -> AppResult<Mall>;

    /// Atomically add `amount` to the mall's revenue
    fn increase_revenue(&mut self, id: Uuid, amount: i64) -> AppResult<Mall>;

    /// Fails with `NotFound` when the mall does not exist
    fn delete_mall(&mut self, id: Uuid) -> AppResult<()>;
}
