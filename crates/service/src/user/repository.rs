use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::user::{self, UserData};

/// Storage gateway for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn create(&self, data: UserData) -> Result<user::Model, ServiceError>;
    async fn update(&self, id: i32, data: UserData) -> Result<user::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        Ok(user::list(&self.db).await?)
    }

    async fn create(&self, data: UserData) -> Result<user::Model, ServiceError> {
        Ok(user::create(&self.db, data).await?)
    }

    async fn update(&self, id: i32, data: UserData) -> Result<user::Model, ServiceError> {
        Ok(user::replace(&self.db, id, data).await?)
    }
}
