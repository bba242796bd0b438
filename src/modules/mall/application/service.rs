use super::event_handlers::credit_store_revenue;
use crate::modules::mall::domain::{Mall, MallChanges, NewMall};
use crate::modules::store::domain::Store;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::persistence::{Transaction, UnitOfWork};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of destroying a mall together with its stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MallDestroyed {
    pub mall_id: Uuid,
    pub stores_removed: usize,
}

pub struct MallService {
    uow: Arc<dyn UnitOfWork>,
}

impl MallService {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }

    pub async fn create_mall(
        &self,
        name: String,
        city: String,
        capacity: Option<i32>,
    ) -> AppResult<Mall> {
        let new_mall = NewMall::new(name, city, capacity);

        // Nothing is written when any field is invalid
        let errors = new_mall.validate();
        if !errors.is_empty() {
            LogContext::validation_rejected("Mall", &errors);
            return Err(errors.into());
        }

        let mall = self
            .uow
            .transaction(move |tx| tx.insert_mall(&new_mall))
            .await?;

        log_info!(
            "Created mall {} '{}' in {} (capacity {})",
            mall.id,
            mall.name,
            mall.city,
            mall.capacity
        );
        Ok(mall)
    }

    pub async fn get_mall(&self, id: Uuid) -> AppResult<Option<Mall>> {
        self.uow.transaction(move |tx| tx.find_mall(id)).await
    }

    pub async fn get_all_malls(&self) -> AppResult<Vec<Mall>> {
        self.uow.transaction(|tx| tx.list_malls()).await
    }

    /// Update name, city or capacity. Revenue is never written directly.
    ///
    /// An empty change set returns the mall as stored, `updated_at` included.
    pub async fn update_mall(&self, id: Uuid, changes: MallChanges) -> AppResult<Mall> {
        changes.validate().into_result()?;

        let mall = self
            .uow
            .transaction(move |tx| {
                if changes.is_empty() {
                    return tx
                        .find_mall(id)?
                        .ok_or_else(|| AppError::not_found("Mall", id));
                }
                tx.update_mall(id, &changes)
            })
            .await?;

        log_debug!("Updated mall {}", mall.id);
        Ok(mall)
    }

    /// Destroy the mall's stores, then the mall, in one transaction
    pub async fn destroy_mall(&self, id: Uuid) -> AppResult<MallDestroyed> {
        let timer = TimedOperation::new("destroy_mall");

        let destroyed = self
            .uow
            .transaction(move |tx| destroy_with_stores(tx, id))
            .await?;

        timer.finish_with_info(&format!("{} stores removed", destroyed.stores_removed));
        log_info!(
            "Destroyed mall {} and {} of its stores",
            destroyed.mall_id,
            destroyed.stores_removed
        );
        Ok(destroyed)
    }

    /// Stores currently owned by the mall; empty when it has none
    pub async fn list_stores(&self, mall_id: Uuid) -> AppResult<Vec<Store>> {
        self.uow
            .transaction(move |tx| {
                tx.find_mall(mall_id)?
                    .ok_or_else(|| AppError::not_found("Mall", mall_id))?;
                tx.list_stores_by_mall(mall_id)
            })
            .await
    }

    /// Add one store's worth of revenue. Each call adds again.
    pub async fn increase_revenue(&self, mall_id: Uuid) -> AppResult<Mall> {
        self.uow
            .transaction(move |tx| credit_store_revenue(tx, mall_id))
            .await
    }

    pub fn backend_name(&self) -> &'static str {
        self.uow.backend_name()
    }
}

/// Delete every store the mall owns, then the mall.
///
/// Any error leaves the caller's transaction to roll back the store deletes.
fn destroy_with_stores(tx: &mut dyn Transaction, id: Uuid) -> AppResult<MallDestroyed> {
    tx.find_mall(id)?
        .ok_or_else(|| AppError::not_found("Mall", id))?;

    let stores = tx.list_stores_by_mall(id)?;
    for store in &stores {
        tx.delete_store(store.id)?;
    }
    tx.delete_mall(id)?;

    Ok(MallDestroyed {
        mall_id: id,
        stores_removed: stores.len(),
    })
}
