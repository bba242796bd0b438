use super::application::service::{MallDestroyed, MallService};
use super::domain::{Mall, MallChanges};
use crate::modules::store::domain::Store;
use crate::shared::errors::{AppError, AppResult};

use crate::{log_debug, log_error};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMallRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMallRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMallRequest {
    pub id: Uuid,
    pub name: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyMallRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMallStoresRequest {
    pub mall_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncreaseMallRevenueRequest {
    pub id: Uuid,
}

pub async fn create_mall(request: CreateMallRequest, mall_service: &MallService) -> AppResult<Mall> {
    log_debug!("create_mall: {:?}", request);
    mall_service
        .create_mall(request.name, request.city, request.capacity)
        .await
        .map_err(|e| {
            if e.is_infrastructure() {
                log_error!("Failed to create mall: {}", e);
            }
            e
        })
}

pub async fn get_mall(request: GetMallRequest, mall_service: &MallService) -> AppResult<Mall> {
    mall_service
        .get_mall(request.id)
        .await?
        .ok_or_else(|| AppError::not_found("Mall", request.id))
}

pub async fn get_all_malls(mall_service: &MallService) -> AppResult<Vec<Mall>> {
    mall_service.get_all_malls().await
}

pub async fn update_mall(request: UpdateMallRequest, mall_service: &MallService) -> AppResult<Mall> {
    let changes = MallChanges {
        name: request.name,
        city: request.city,
        capacity: request.capacity,
    };
    mall_service.update_mall(request.id, changes).await
}

pub async fn destroy_mall(
    request: DestroyMallRequest,
    mall_service: &MallService,
) -> AppResult<MallDestroyed> {
    mall_service.destroy_mall(request.id).await.map_err(|e| {
        log_error!("Failed to destroy mall {}: {}", request.id, e);
        e
    })
}

pub async fn list_mall_stores(
    request: ListMallStoresRequest,
    mall_service: &MallService,
) -> AppResult<Vec<Store>> {
    mall_service.list_stores(request.mall_id).await
}

pub async fn increase_mall_revenue(
    request: IncreaseMallRevenueRequest,
    mall_service: &MallService,
) -> AppResult<Mall> {
    mall_service.increase_revenue(request.id).await
}
