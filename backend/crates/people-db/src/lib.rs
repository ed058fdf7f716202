pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::storage::{close, connect, ping};
pub use error::{DbError, Result};
pub use repositories::person_repository::PersonRepository;
