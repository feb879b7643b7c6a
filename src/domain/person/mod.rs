// Person domain module
// Contains the person aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod person;
pub mod value_objects;

// Re-export main types for convenience
pub use events::PersonEvent;
pub use person::Person;
pub use value_objects::{DogDisposition, ParseDogDispositionError};
