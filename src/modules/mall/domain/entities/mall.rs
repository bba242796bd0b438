use crate::shared::validation::{MinLengthRule, PresenceRule, ValidationChain, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Stores a mall may hold when no capacity is given
pub const DEFAULT_CAPACITY: i32 = 10;
pub const MIN_NAME_LENGTH: usize = 5;
/// Revenue credited to a mall for every store opened in it
pub const REVENUE_PER_STORE: i64 = 1000;

pub const CAPACITY_EXCEEDED_MESSAGE: &str = "too many stores";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mall {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub revenue: i64,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A mall that has not been persisted yet; the id is assigned on insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMall {
    pub name: String,
    pub city: String,
    pub capacity: i32,
}

/// Attribute updates; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MallChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub capacity: Option<i32>,
}

/// A mall together with the number of stores it currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MallOccupancy {
    pub mall: Mall,
    pub store_count: i64,
}

impl Mall {
    /// Apply attribute changes in place
    pub fn apply(&mut self, changes: &MallChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(city) = &changes.city {
            self.city = city.clone();
        }
        if let Some(capacity) = changes.capacity {
            self.capacity = capacity;
        }
        self.updated_at = Utc::now();
    }
}

impl NewMall {
    pub fn new(name: impl Into<String>, city: impl Into<String>, capacity: Option<i32>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            capacity: capacity.unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// All field errors at once; empty when the mall may be saved
    pub fn validate(&self) -> ValidationErrors {
        let changes = MallChanges {
            name: Some(self.name.clone()),
            city: Some(self.city.clone()),
            capacity: Some(self.capacity),
        };
        changes.validate()
    }
}

impl MallChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none() && self.capacity.is_none()
    }

    /// Validate the fields being set; fields left as `None` are not checked
    pub fn validate(&self) -> ValidationErrors {
        mall_validator().validate(self)
    }
}

impl MallOccupancy {
    pub fn new(mall: Mall, store_count: i64) -> Self {
        Self { mall, store_count }
    }

    /// Whether one more store fits under the capacity ceiling
    pub fn has_room(&self) -> bool {
        self.store_count < i64::from(self.mall.capacity)
    }

    /// Capacity errors for admitting one more store
    pub fn admission_errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !self.has_room() {
            errors.add("capacity", CAPACITY_EXCEEDED_MESSAGE);
        }
        errors
    }
}

fn changed_name(changes: &MallChanges) -> Option<&str> {
    changes.name.as_deref()
}

fn changed_city(changes: &MallChanges) -> Option<&str> {
    changes.city.as_deref()
}

fn mall_validator() -> ValidationChain<MallChanges> {
    ValidationChain::new()
        .add_rule(Arc::new(PresenceRule::new("name", changed_name)))
        .add_rule(Arc::new(MinLengthRule::new(
            "name",
            MIN_NAME_LENGTH,
            changed_name,
        )))
        .add_rule(Arc::new(PresenceRule::new("city", changed_city)))
}
