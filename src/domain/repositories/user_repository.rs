use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::user::User};

/// Persistence sink for validated users. The usecase calls this exactly once
/// per successful registration and never for a rejected one.
#[async_trait]
pub trait UserRepository {
    async fn add_user(&self, user: &User) -> Result<(), RepositoryError>;
}
