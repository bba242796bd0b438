/// Mall-side reactions to store lifecycle events.
///
/// Handlers run inside the caller's transaction, so a failure here undoes the
/// store insert that raised the event.
use crate::log_debug;
use crate::modules::mall::domain::{Mall, MallRepository, REVENUE_PER_STORE};
use crate::modules::store::domain::StoreCreated;
use crate::shared::errors::AppResult;
use uuid::Uuid;

/// Add one store's worth of revenue to the mall
pub fn credit_store_revenue<R>(repo: &mut R, mall_id: Uuid) -> AppResult<Mall>
where
    R: MallRepository + ?Sized,
{
    let mall = repo.increase_revenue(mall_id, REVENUE_PER_STORE)?;
    log_debug!("Mall {} revenue is now {}", mall.id, mall.revenue);
    Ok(mall)
}

pub fn on_store_created<R>(repo: &mut R, event: &StoreCreated) -> AppResult<Mall>
where
    R: MallRepository + ?Sized,
{
    log_debug!(
        "Handling StoreCreated for store {} in mall {}",
        event.store_id,
        event.mall_id
    );
    credit_store_revenue(repo, event.mall_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::mall::domain::repositories::mall_repository::MockMallRepository;
    use crate::shared::errors::AppError;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn mall_with_revenue(id: Uuid, revenue: i64) -> Mall {
        let now = Utc::now();
        Mall {
            id,
            name: "Pacific Centre".to_string(),
            city: "Vancouver".to_string(),
            revenue,
            capacity: 10,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn store_created_credits_exactly_one_thousand() {
        let mall_id = Uuid::new_v4();
        let mut repo = MockMallRepository::new();
        repo.expect_increase_revenue()
            .with(eq(mall_id), eq(1000))
            .times(1)
            .returning(|id, amount| Ok(mall_with_revenue(id, amount)));

        let event = StoreCreated {
            store_id: Uuid::new_v4(),
            mall_id,
            created_at: Utc::now(),
        };

        let mall = on_store_created(&mut repo, &event).unwrap();
        assert_eq!(mall.revenue, 1000);
    }

    #[test]
    fn missing_mall_propagates_not_found() {
        let mall_id = Uuid::new_v4();
        let mut repo = MockMallRepository::new();
        repo.expect_increase_revenue()
            .times(1)
            .returning(|id, _| Err(AppError::not_found("Mall", id)));

        let err = credit_store_revenue(&mut repo, mall_id).unwrap_err();
        assert!(err.is_not_found());
    }
}
