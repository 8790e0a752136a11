//! User resource: list, create, replace. There is no read-one or delete.

mod repository;
mod service;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use models::user::UserData;

pub use models::user::Model as User;
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;

pub const MISSING_CREDENTIALS: &str = "Username and password are required.";

/// User fields as sent by the console. Unknown fields such as `id` or `createdAt` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub phone: Option<i64>,
    pub company_id: Option<i32>,
}

impl UserPayload {
    /// Require credentials and collapse empty optional values to null.
    pub fn validate(self) -> Result<UserData, ServiceError> {
        let (Some(username), Some(password)) = (non_empty(self.username), non_empty(self.password)) else {
            return Err(ServiceError::Validation(MISSING_CREDENTIALS.into()));
        };
        Ok(UserData {
            username,
            password,
            email: non_empty(self.email),
            notes: non_empty(self.notes),
            phone: non_zero(self.phone),
            company_id: non_zero(self.company_id),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn non_zero<T: Default + PartialEq>(value: Option<T>) -> Option<T> {
    value.filter(|v| *v != T::default())
}

impl std::fmt::Display for UserPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user {:?}", self.username.as_deref().unwrap_or("<none>"))
    }
}
