use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::error::DomainError;

/// External credit score lookup. Stateless from the caller's point of view;
/// one call per credit check, no lifecycle held across calls.
#[async_trait]
pub trait CreditLimitProvider {
    async fn credit_limit(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<i64, DomainError>;
}
