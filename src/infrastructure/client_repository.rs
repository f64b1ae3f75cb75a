use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::{
    error::RepositoryError, models::client::Client,
    repositories::client_repository::ClientRepository,
};
use crate::infrastructure::entities::clients;

#[derive(Clone)]
pub struct PostgresClientRepository {
    db: DatabaseConnection,
}

impl PostgresClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, RepositoryError> {
        let client = clients::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(client.map(|model| Client::new(model.id, model.name)))
    }
}
