use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use uuid::Uuid;

use crate::domain::{
    error::RepositoryError, models::user::User, repositories::user_repository::UserRepository,
};
use crate::infrastructure::entities::users;

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn add_user(&self, user: &User) -> Result<(), RepositoryError> {
        let user_model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(user.first_name().to_string()),
            last_name: Set(user.last_name().to_string()),
            email: Set(user.email().to_string()),
            date_of_birth: Set(user.date_of_birth()),
            client_id: Set(user.client().id()),
            credit_limit: Set(user.credit_limit()),
        };
        users::Entity::insert(user_model)
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}
