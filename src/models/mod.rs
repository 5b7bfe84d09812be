//! Domain models shared by the calendar, pricing and booking modules.

pub mod availability;
pub mod pet;

pub use availability::{AvailabilityStatus, DayAvailability};
pub use pet::{DogSize, PetConfig, PetCount, PetType};
