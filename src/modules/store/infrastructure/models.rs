use crate::modules::mall::infrastructure::models::MallModel;
use crate::modules::store::domain::{NewStore, Store, StoreChanges};
use crate::schema::stores;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading with associations support
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(MallModel, foreign_key = mall_id))]
#[diesel(table_name = stores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoreModel {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub mall_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new stores
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stores)]
pub struct NewStoreModel<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub mall_id: Option<Uuid>,
}

// For updating existing stores (mall_id is fixed at creation)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = stores)]
pub struct StoreChangeset<'a> {
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

impl From<StoreModel> for Store {
    fn from(model: StoreModel) -> Self {
        Store {
            id: model.id,
            name: model.name,
            category: model.category,
            mall_id: model.mall_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl<'a> From<&'a NewStore> for NewStoreModel<'a> {
    fn from(store: &'a NewStore) -> Self {
        NewStoreModel {
            name: &store.name,
            category: &store.category,
            mall_id: store.mall_id,
        }
    }
}

impl<'a> From<&'a StoreChanges> for StoreChangeset<'a> {
    fn from(changes: &'a StoreChanges) -> Self {
        StoreChangeset {
            name: changes.name.as_deref(),
            category: changes.category.as_deref(),
            updated_at: Utc::now(),
        }
    }
}
