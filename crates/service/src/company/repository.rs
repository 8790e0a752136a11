use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::company::{self, CompanyData};

/// Storage gateway for companies.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError>;
    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
    async fn create(&self, data: CompanyData) -> Result<company::Model, ServiceError>;
    async fn update(&self, id: i32, data: CompanyData) -> Result<company::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<company::Model>, ServiceError> {
        Ok(company::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<company::Model>, ServiceError> {
        Ok(company::find(&self.db, id).await?)
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(company::exists(&self.db, id).await?)
    }

    async fn create(&self, data: CompanyData) -> Result<company::Model, ServiceError> {
        Ok(company::create(&self.db, data).await?)
    }

    async fn update(&self, id: i32, data: CompanyData) -> Result<company::Model, ServiceError> {
        Ok(company::replace(&self.db, id, data).await?)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        Ok(company::delete(&self.db, id).await?)
    }
}
