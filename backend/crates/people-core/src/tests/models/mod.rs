mod person;
mod person_patch;
