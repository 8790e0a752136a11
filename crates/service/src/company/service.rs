use std::sync::Arc;
use tracing::{info, instrument};

use super::{Company, CompanyPayload, CompanyRepository};
use crate::errors::ServiceError;

/// Application service for the company resource.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
}

impl<R: CompanyRepository> Clone for CompanyService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Company>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Company, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("company"))
    }

    #[instrument(skip_all)]
    pub async fn create(&self, payload: CompanyPayload) -> Result<Company, ServiceError> {
        let data = payload.validate()?;
        let created = self.repo.create(data).await?;
        info!(id = created.id, "company created");
        Ok(created)
    }

    /// Full replace; `notes` becomes null when omitted.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i32, payload: CompanyPayload) -> Result<Company, ServiceError> {
        let data = payload.validate()?;
        self.repo.update(id, data).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "company deleted");
        Ok(())
    }
}
