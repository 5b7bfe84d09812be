//! Pet configuration models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Cat,
    Dog,
}

/// Only meaningful for dogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogSize {
    #[default]
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetCount {
    #[default]
    One,
    Two,
}

impl PetCount {
    /// Number of pet names a booking with this count carries
    pub const fn as_usize(self) -> usize {
        match self {
            PetCount::One => 1,
            PetCount::Two => 2,
        }
    }
}

/// The pet configuration a stay is priced for.
///
/// `dog_size` is kept even for cats so a form can remember the last choice,
/// but [`PetConfig::effective_dog_size`] drops it for anything but dogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetConfig {
    pub pet_type: PetType,
    #[serde(default)]
    pub dog_size: DogSize,
    #[serde(default)]
    pub pet_count: PetCount,
}

impl PetConfig {
    pub const fn cat(pet_count: PetCount) -> Self {
        Self {
            pet_type: PetType::Cat,
            dog_size: DogSize::Small,
            pet_count,
        }
    }

    pub const fn dog(dog_size: DogSize, pet_count: PetCount) -> Self {
        Self {
            pet_type: PetType::Dog,
            dog_size,
            pet_count,
        }
    }

    pub const fn effective_dog_size(&self) -> Option<DogSize> {
        match self.pet_type {
            PetType::Dog => Some(self.dog_size),
            PetType::Cat => None,
        }
    }
}
