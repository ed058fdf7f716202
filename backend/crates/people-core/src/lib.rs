pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::person::Person;
pub use models::person_patch::PersonPatch;

/// Maximum byte length accepted for any text field on a person
pub const MAX_FIELD_LENGTH: usize = 1024;

#[cfg(test)]
mod tests;
