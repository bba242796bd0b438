use crate::shared::validation::{PresenceRule, ValidationChain, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub mall_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A store that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    pub name: String,
    pub category: String,
    pub mall_id: Option<Uuid>,
}

/// Attribute updates. The owning mall is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreChanges {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl Store {
    pub fn apply(&mut self, changes: &StoreChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(category) = &changes.category {
            self.category = category.clone();
        }
        self.updated_at = Utc::now();
    }
}

impl NewStore {
    pub fn new(name: impl Into<String>, category: impl Into<String>, mall_id: Option<Uuid>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            mall_id,
        }
    }

    /// Field errors only; the capacity check needs the owning mall
    pub fn validate(&self) -> ValidationErrors {
        StoreChanges {
            name: Some(self.name.clone()),
            category: Some(self.category.clone()),
        }
        .validate()
    }
}

impl StoreChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none()
    }

    pub fn validate(&self) -> ValidationErrors {
        store_validator().validate(self)
    }
}

fn changed_name(changes: &StoreChanges) -> Option<&str> {
    changes.name.as_deref()
}

fn changed_category(changes: &StoreChanges) -> Option<&str> {
    changes.category.as_deref()
}

fn store_validator() -> ValidationChain<StoreChanges> {
    ValidationChain::new()
        .add_rule(Arc::new(PresenceRule::new("name", changed_name)))
        .add_rule(Arc::new(PresenceRule::new("category", changed_category)))
}
