use super::application::service::StoreService;
use super::domain::{Store, StoreChanges};
use crate::shared::errors::{AppError, AppResult};

use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub mall_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStoreRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyStoreRequest {
    pub id: Uuid,
}

pub async fn create_store(
    request: CreateStoreRequest,
    store_service: &StoreService,
) -> AppResult<Store> {
    log_debug!("create_store: {:?}", request);
    store_service
        .create_store(request.name, request.category, request.mall_id)
        .await
        .map_err(|e| {
            if e.is_infrastructure() {
                log_error!("Failed to create store: {}", e);
            }
            e
        })
}

pub async fn get_store(request: GetStoreRequest, store_service: &StoreService) -> AppResult<Store> {
    store_service
        .get_store(request.id)
        .await?
        .ok_or_else(|| AppError::not_found("Store", request.id))
}

pub async fn update_store(
    request: UpdateStoreRequest,
    store_service: &StoreService,
) -> AppResult<Store> {
    let changes = StoreChanges {
        name: request.name,
        category: request.category,
    };
    store_service.update_store(request.id, changes).await
}

pub async fn destroy_store(
    request: DestroyStoreRequest,
    store_service: &StoreService,
) -> AppResult<()> {
    store_service.destroy_store(request.id).await
}
