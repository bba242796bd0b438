/// Mall behaviour against the in-memory backend
///
/// Tests cover:
/// - Field validation (name presence and length, city presence)
/// - Default capacity and revenue
/// - Listing stores
/// - Cascading destroy
mod utils;

use plaza_lib::modules::mall::MallChanges;
use plaza_lib::shared::AppError;
use utils::factories::{MallFactory, StoreFactory};
use utils::helpers::build_test_services;
use uuid::Uuid;

// ================================================================================================
// VALIDATION TESTS
// ================================================================================================

#[tokio::test]
async fn mall_without_name_is_invalid() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .create_mall(String::new(), String::new(), None)
        .await
        .unwrap_err();

    let errors = err.validation_errors().expect("validation error");
    assert!(errors.get("name").contains(&"can't be blank".to_string()));
}

#[tokio::test]
async fn mall_with_short_name_is_invalid() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .create_mall("foo".to_string(), "Vancouver".to_string(), None)
        .await
        .unwrap_err();

    let errors = err.validation_errors().expect("validation error");
    assert!(errors
        .get("name")
        .contains(&"is too short (minimum is 5 characters)".to_string()));
}

#[tokio::test]
async fn mall_without_city_is_invalid() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .create_mall(String::new(), String::new(), None)
        .await
        .unwrap_err();

    let errors = err.validation_errors().expect("validation error");
    assert!(errors.get("city").contains(&"can't be blank".to_string()));
}

#[tokio::test]
async fn invalid_mall_is_not_persisted() {
    let services = build_test_services();
    let mall_service = &services.context.mall_service;

    let _ = mall_service
        .create_mall("foo".to_string(), String::new(), None)
        .await;

    assert!(mall_service.get_all_malls().await.unwrap().is_empty());
}

#[tokio::test]
async fn mall_with_long_name_and_city_is_valid() {
    let services = build_test_services();

    let mall = services
        .context
        .mall_service
        .create_mall("Pacific Centre".to_string(), "Vancouver".to_string(), None)
        .await
        .unwrap();

    assert_eq!(mall.name, "Pacific Centre");
    assert_eq!(mall.city, "Vancouver");
    assert_eq!(mall.revenue, 0);
}

// ================================================================================================
// DEFAULTS & ATTRIBUTE UPDATES
// ================================================================================================

#[tokio::test]
async fn mall_has_default_capacity_of_ten() {
    let services = build_test_services();

    let mall = MallFactory::new()
        .named("Mall1")
        .create(&services.context.mall_service)
        .await;

    assert_eq!(mall.capacity, 10);
}

#[tokio::test]
async fn explicit_capacity_is_kept() {
    let services = build_test_services();

    let mall = MallFactory::new()
        .with_capacity(3)
        .create(&services.context.mall_service)
        .await;

    assert_eq!(mall.capacity, 3);
}

#[tokio::test]
async fn update_mall_validates_and_persists() {
    let services = build_test_services();
    let mall_service = &services.context.mall_service;
    let mall = MallFactory::new().create(mall_service).await;

    let err = mall_service
        .update_mall(
            mall.id,
            MallChanges {
                name: Some("abc".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(err.validation_errors().unwrap().has_field("name"));

    let updated = mall_service
        .update_mall(
            mall.id,
            MallChanges {
                city: Some("Burnaby".to_string()),
                capacity: Some(20),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.city, "Burnaby");
    assert_eq!(updated.capacity, 20);
    assert_eq!(updated.name, mall.name);

    let reloaded = mall_service.get_mall(mall.id).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn update_missing_mall_is_not_found() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .update_mall(Uuid::new_v4(), MallChanges::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

// ================================================================================================
// ASSOCIATIONS
// ================================================================================================

#[tokio::test]
async fn mall_can_list_its_stores() {
    let services = build_test_services();
    let mall = MallFactory::new()
        .create(&services.context.mall_service)
        .await;

    let stores = services
        .context
        .mall_service
        .list_stores(mall.id)
        .await
        .unwrap();
    assert!(stores.is_empty());

    let store = StoreFactory::new()
        .in_mall(&mall)
        .create(&services.context.store_service)
        .await;
    StoreFactory::new()
        .named("Elsewhere")
        .create(&services.context.store_service)
        .await;

    let stores = services
        .context
        .mall_service
        .list_stores(mall.id)
        .await
        .unwrap();
    assert_eq!(stores, vec![store]);
}

#[tokio::test]
async fn listing_stores_of_missing_mall_is_not_found() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .list_stores(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

// ================================================================================================
// REVENUE
// ================================================================================================

#[tokio::test]
async fn increase_revenue_adds_one_thousand_per_call() {
    let services = build_test_services();
    let mall_service = &services.context.mall_service;
    let mall = MallFactory::new().create(mall_service).await;

    mall_service.increase_revenue(mall.id).await.unwrap();
    let mall = mall_service.increase_revenue(mall.id).await.unwrap();

    assert_eq!(mall.revenue, 2000);
}

// ================================================================================================
// DESTROY
// ================================================================================================

#[tokio::test]
async fn destroying_mall_destroys_its_stores() {
    let services = build_test_services();
    let mall_service = &services.context.mall_service;
    let store_service = &services.context.store_service;

    let mall = MallFactory::new().named("Mall2").create(mall_service).await;
    let store = StoreFactory::new()
        .in_category("blah")
        .in_mall(&mall)
        .create(store_service)
        .await;

    let destroyed = mall_service.destroy_mall(mall.id).await.unwrap();

    assert_eq!(destroyed.stores_removed, 1);
    assert_eq!(services.committed_store_count().await, 0);
    assert!(store_service.get_store(store.id).await.unwrap().is_none());
    assert!(mall_service.get_mall(mall.id).await.unwrap().is_none());
}

#[tokio::test]
async fn destroying_mall_leaves_other_stores_alone() {
    let services = build_test_services();
    let mall_service = &services.context.mall_service;
    let store_service = &services.context.store_service;

    let doomed = MallFactory::new().named("Doomed Mall").create(mall_service).await;
    let kept = MallFactory::new().named("Kept Mall").create(mall_service).await;
    StoreFactory::create_many(&doomed, 3, store_service).await;
    let survivor = StoreFactory::new().in_mall(&kept).create(store_service).await;
    let standalone = StoreFactory::new().create(store_service).await;

    let destroyed = mall_service.destroy_mall(doomed.id).await.unwrap();

    assert_eq!(destroyed.stores_removed, 3);
    assert_eq!(services.committed_store_count().await, 2);
    assert!(store_service.get_store(survivor.id).await.unwrap().is_some());
    assert!(store_service.get_store(standalone.id).await.unwrap().is_some());
}

#[tokio::test]
async fn destroying_missing_mall_is_not_found() {
    let services = build_test_services();

    let err = services
        .context
        .mall_service
        .destroy_mall(Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn empty_mall_update_leaves_row_untouched() {
    let services = build_test_services();
    let mall = MallFactory::new()
        .create(&services.context.mall_service)
        .await;

    let unchanged = services
        .context
        .mall_service
        .update_mall(mall.id, MallChanges::default())
        .await
        .unwrap();

    assert_eq!(unchanged, mall);
}
