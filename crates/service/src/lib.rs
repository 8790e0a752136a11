//! Resource services for companies and users.
//! - Validate and normalize wire payloads before they reach storage.
//! - Talk to storage only through the repository traits.
//! - Report failures as a closed [`errors::ServiceError`].

pub mod errors;
pub mod company;
pub mod user;
#[cfg(test)]
pub mod test_support;
