pub mod people;
pub mod person_dto;
