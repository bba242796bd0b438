/// Transactional scoping over the mall and store repositories.
///
/// A `UnitOfWork` runs a closure against a `Transaction` handle: returning
/// `Ok` commits every write made through the handle, returning `Err` rolls
/// all of them back.
use crate::modules::mall::domain::MallRepository;
use crate::modules::store::domain::StoreRepository;
use crate::shared::errors::{AppError, AppResult};
use async_trait::async_trait;
use tokio::sync::oneshot;

/// Everything a single transaction can read and write
pub trait Transaction: MallRepository + StoreRepository {}

impl<T: MallRepository + StoreRepository + ?Sized> Transaction for T {}

pub type TransactionWork = Box<dyn FnOnce(&mut dyn Transaction) -> AppResult<()> + Send>;

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Run `work` inside one transaction, committing only when it succeeds
    async fn execute(&self, work: TransactionWork) -> AppResult<()>;

    /// Short backend label for logs
    fn backend_name(&self) -> &'static str;
}

impl dyn UnitOfWork {
    /// Run `work` in a transaction and hand back the value it produced
    pub async fn transaction<T, F>(&self, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut dyn Transaction) -> AppResult<T> + Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();

        self.execute(Box::new(move |tx| {
            let value = work(tx)?;
            // The receiver lives until `execute` returns, so this cannot fail.
            let _ = sender.send(value);
            Ok(())
        }))
        .await?;

        receiver.await.map_err(|_| {
            AppError::InternalError("Transaction committed without producing a result".to_string())
        })
    }
}
