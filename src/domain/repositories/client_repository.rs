use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::client::Client};

#[async_trait]
pub trait ClientRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, RepositoryError>;
}
