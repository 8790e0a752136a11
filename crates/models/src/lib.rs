//! SeaORM entities and row-level operations for companies and users.

pub mod errors;
pub mod db;
pub mod company;
pub mod user;

#[cfg(test)]
mod tests;
