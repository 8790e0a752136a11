//! Company resource: list, read one, create, replace, delete.

mod repository;
mod service;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use models::company::CompanyData;

pub use models::company::Model as Company;
pub use repository::{CompanyRepository, SeaOrmCompanyRepository};
pub use service::CompanyService;

/// Company fields as sent by the console. Unknown fields such as `id` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<i64>,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub primary_contact: Option<String>,
}

impl CompanyPayload {
    /// Check that every required column is present and turn the payload into a row.
    pub fn validate(self) -> Result<CompanyData, ServiceError> {
        let mut missing = Vec::new();
        let name = required_text(self.name, "name", &mut missing);
        let address = required_text(self.address, "address", &mut missing);
        let email = required_text(self.email, "email", &mut missing);
        let primary_contact = required_text(self.primary_contact, "primaryContact", &mut missing);
        if self.phone.is_none() {
            missing.push("phone");
        }
        match (name, address, self.phone, email, primary_contact) {
            (Some(name), Some(address), Some(phone), Some(email), Some(primary_contact)) if missing.is_empty() => {
                Ok(CompanyData { name, address, phone, email, notes: self.notes, primary_contact })
            }
            _ => Err(ServiceError::Validation(format!("Missing required fields: {}", missing.join(", ")))),
        }
    }
}

fn required_text(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
