use crate::modules::mall::application::event_handlers::on_store_created;
use crate::modules::mall::domain::MallOccupancy;
use crate::modules::store::domain::{NewStore, Store, StoreChanges, StoreCreated};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::persistence::{Transaction, UnitOfWork};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info};
use std::sync::Arc;
use uuid::Uuid;

pub struct StoreService {
    uow: Arc<dyn UnitOfWork>,
}

impl StoreService {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    /// Create a store, optionally inside a mall.
    ///
    /// Field and capacity errors are collected together. The mall row is
    /// locked before its stores are counted, and the revenue credit commits
    /// in the same transaction as the insert.
    pub async fn create_store(
        &self,
        name: String,
        category: String,
        mall_id: Option<Uuid>,
    ) -> AppResult<Store> {
        let new_store = NewStore::new(name, category, mall_id);

        let store = self
            .uow
            .transaction(move |tx| {
                let mut errors = new_store.validate();

                if let Some(mall_id) = new_store.mall_id {
                    let occupancy = load_occupancy(tx, mall_id)?;
                    errors.merge(occupancy.admission_errors());
                }

                if !errors.is_empty() {
                    LogContext::validation_rejected("Store", &errors);
                    return Err(errors.into());
                }

                let store = tx.insert_store(&new_store)?;

                if let Some(event) = StoreCreated::for_store(&store) {
                    on_store_created(&mut *tx, &event)?;
                }

                Ok(store)
            })
            .await?;

        log_info!(
            "Created store {} '{}' ({}){}",
            store.id,
            store.name,
            store.category,
            store
                .mall_id
                .map(|mall_id| format!(" in mall {}", mall_id))
                .unwrap_or_default()
        );
        Ok(store)
    }

    pub async fn get_store(&self, id: Uuid) -> AppResult<Option<Store>> {
        self.uow.transaction(move |tx| tx.find_store(id)).await
    }

    /// Persist attribute changes; capacity and revenue are left alone.
    /// An empty change set returns the store untouched.
    pub async fn update_store(&self, id: Uuid, changes: StoreChanges) -> AppResult<Store> {
        changes.validate().into_result()?;

        let store = self
            .uow
            .transaction(move |tx| {
                if changes.is_empty() {
                    return tx
                        .find_store(id)?
                        .ok_or_else(|| AppError::not_found("Store", id));
                }
                tx.update_store(id, &changes)
            })
            .await?;

        log_debug!("Updated store {}", store.id);
        Ok(store)
    }

    pub async fn destroy_store(&self, id: Uuid) -> AppResult<()> {
        self.uow.transaction(move |tx| tx.delete_store(id)).await?;

        log_info!("Destroyed store {}", id);
        Ok(())
    }
}

/// Load the mall under a row lock together with its current store count
fn load_occupancy(tx: &mut dyn Transaction, mall_id: Uuid) -> AppResult<MallOccupancy> {
    let mall = tx
        .lock_mall(mall_id)?
        .ok_or_else(|| AppError::not_found("Mall", mall_id))?;
    let store_count = tx.count_stores_by_mall(mall_id)?;

    Ok(MallOccupancy::new(mall, store_count))
}
