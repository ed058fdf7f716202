pub mod person_repository;
