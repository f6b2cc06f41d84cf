//! Business logic, free from any web framework concerns.

pub mod greeting;
pub mod person;
