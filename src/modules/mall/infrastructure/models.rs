use crate::modules::mall::domain::{Mall, MallChanges, NewMall};
use crate::schema::malls;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = malls)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MallModel {
    pub id: uuid::Uuid,
    pub name: String,
    pub city: String,
    pub revenue: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub capacity: i32,
}

// For inserting new malls (id, revenue and timestamps use column defaults)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = malls)]
pub struct NewMallModel<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub capacity: i32,
}

// For updating existing malls; `None` fields are left untouched
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = malls)]
pub struct MallChangeset<'a> {
    pub name: Option<&'a str>,
    pub city: Option<&'a str>,
    pub capacity: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl From<MallModel> for Mall {
    fn from(model: MallModel) -> Self {
        Mall {
            id: model.id,
            name: model.name,
            city: model.city,
            revenue: model.revenue,
            capacity: model.capacity,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl<'a> From<&'a NewMall> for NewMallModel<'a> {
    fn from(mall: &'a NewMall) -> Self {
        NewMallModel {
            name: &mall.name,
            city: &mall.city,
            capacity: mall.capacity,
        }
    }
}

impl<'a> From<&'a MallChanges> for MallChangeset<'a> {
    fn from(changes: &'a MallChanges) -> Self {
        MallChangeset {
            name: changes.name.as_deref(),
            city: changes.city.as_deref(),
            capacity: changes.capacity,
            updated_at: Utc::now(),
        }
    }
}
