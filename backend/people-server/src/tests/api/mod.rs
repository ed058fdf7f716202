mod error;
mod person_dto;
