use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{CompanyService, SeaOrmCompanyRepository};
use service::user::{SeaOrmUserRepository, UserService};

pub type Companies = CompanyService<SeaOrmCompanyRepository>;
pub type Users = UserService<SeaOrmUserRepository, SeaOrmCompanyRepository>;

/// Shared handler state: one connection pool behind both resource services.
#[derive(Clone)]
pub struct AppState {
    pub companies: Companies,
    pub users: Users,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let company_repo = Arc::new(SeaOrmCompanyRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db));
        Self {
            companies: CompanyService::new(Arc::clone(&company_repo)),
            users: UserService::new(user_repo, company_repo),
        }
    }
}
