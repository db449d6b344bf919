use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Pet archetypes. Serialized as the upper-case name the client keys on.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PetType {
    Luffy,
    Dragon,
    Phoenix,
    Tiger,
    Wolf,
    Panda,
}

impl PetType {
    pub const ALL: [PetType; 6] = [
        PetType::Luffy,
        PetType::Dragon,
        PetType::Phoenix,
        PetType::Tiger,
        PetType::Wolf,
        PetType::Panda,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PetType::Luffy => "LUFFY",
            PetType::Dragon => "DRAGON",
            PetType::Phoenix => "PHOENIX",
            PetType::Tiger => "TIGER",
            PetType::Wolf => "WOLF",
            PetType::Panda => "PANDA",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown pet type {0:?}")]
pub struct UnknownPetType(pub String);

impl FromStr for PetType {
    type Err = UnknownPetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPetType(s.into()))
    }
}

/// One owned pet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub hp: i32, // current hit-points, never above max_hp
    pub max_hp: i32,
    pub energy: u32,
    pub attack: u32,
    pub level: u32,
    pub exp: u32, // 0..100 between calls
}

/// Display metadata for a pet type.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct PetTypeInfo {
    pub emoji: &'static str,
    pub color: &'static str,
    pub sound: &'static str,
}

/// A purchasable archetype.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct ShopListing {
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub price: u32,
    pub attack: u32,
    pub hp: i32,
}

/// Coins plus the owned roster, in ownership order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GameState {
    pub coins: u32,
    pub pets: Vec<Pet>,
}

impl GameState {
    pub fn pet(&self, id: u64) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn pet_mut(&mut self, id: u64) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| p.id == id)
    }
}
