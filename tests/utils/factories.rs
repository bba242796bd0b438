/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use plaza_lib::modules::mall::{Mall, MallService};
use plaza_lib::modules::store::{Store, StoreService};
use uuid::Uuid;

pub struct MallFactory {
    name: String,
    city: String,
    capacity: Option<i32>,
}

impl Default for MallFactory {
    fn default() -> Self {
        Self {
            name: "Pacific Centre".to_string(),
            city: "Vancouver".to_string(),
            capacity: None,
        }
    }
}

impl MallFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn in_city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub async fn create(self, service: &MallService) -> Mall {
        service
            .create_mall(self.name, self.city, self.capacity)
            .await
            .expect("factory mall should be valid")
    }
}

pub struct StoreFactory {
    name: String,
    category: String,
    mall_id: Option<Uuid>,
}

impl Default for StoreFactory {
    fn default() -> Self {
        Self {
            name: "Store".to_string(),
            category: "retail".to_string(),
            mall_id: None,
        }
    }
}

impl StoreFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn in_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn in_mall(mut self, mall: &Mall) -> Self {
        self.mall_id = Some(mall.id);
        self
    }

    pub async fn create(self, service: &StoreService) -> Store {
        service
            .create_store(self.name, self.category, self.mall_id)
            .await
            .expect("factory store should be valid")
    }

    /// Create `count` stores in the mall
    pub async fn create_many(mall: &Mall, count: usize, service: &StoreService) -> Vec<Store> {
        let mut stores = Vec::with_capacity(count);
        for i in 0..count {
            stores.push(
                StoreFactory::new()
                    .named(&format!("Store {}", i + 1))
                    .in_category("Food")
                    .in_mall(mall)
                    .create(service)
                    .await,
            );
        }
        stores
    }
}
