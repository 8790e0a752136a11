use std::sync::Arc;
use tracing::{info, instrument};

use super::{User, UserPayload, UserRepository};
use crate::company::CompanyRepository;
use crate::errors::ServiceError;
use models::user::UserData;

/// Application service for the user resource.
/// `companyId` is a soft reference: it must name an existing company when written.
pub struct UserService<U: UserRepository, C: CompanyRepository> {
    users: Arc<U>,
    companies: Arc<C>,
}

impl<U: UserRepository, C: CompanyRepository> Clone for UserService<U, C> {
    fn clone(&self) -> Self {
        Self { users: Arc::clone(&self.users), companies: Arc::clone(&self.companies) }
    }
}

impl<U: UserRepository, C: CompanyRepository> UserService<U, C> {
    pub fn new(users: Arc<U>, companies: Arc<C>) -> Self { Self { users, companies } }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.users.list().await
    }

    #[instrument(skip_all, fields(payload = %payload))]
    pub async fn create(&self, payload: UserPayload) -> Result<User, ServiceError> {
        let data = self.checked(payload).await?;
        let created = self.users.create(data).await?;
        info!(id = created.id, "user created");
        Ok(created)
    }

    /// Full replace; optional fields become null when omitted or empty.
    #[instrument(skip(self, payload), fields(payload = %payload))]
    pub async fn update(&self, id: i32, payload: UserPayload) -> Result<User, ServiceError> {
        let data = self.checked(payload).await?;
        self.users.update(id, data).await
    }

    async fn checked(&self, payload: UserPayload) -> Result<UserData, ServiceError> {
        let data = payload.validate()?;
        if let Some(company_id) = data.company_id {
            if !self.companies.exists(company_id).await? {
                return Err(ServiceError::Validation(format!("company {} does not exist", company_id)));
            }
        }
        Ok(data)
    }
}
