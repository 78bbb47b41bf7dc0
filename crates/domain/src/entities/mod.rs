//! Domain entities - Core business objects with identity

mod person;

pub use person::Person;
