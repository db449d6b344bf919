//! Static reference data: pet-type metadata, the shop, and the starter roster.

use crate::game::types::{GameState, Pet, PetType, PetTypeInfo, ShopListing};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub const STARTING_COINS: u32 = 1000;
pub const STARTER_PET_ID: u64 = 1;

/// Energy every purchased pet arrives with.
pub const PURCHASED_ENERGY: u32 = 100;

static PET_TYPES: Lazy<BTreeMap<PetType, PetTypeInfo>> = Lazy::new(|| {
    let info = |emoji, color, sound| PetTypeInfo {
        emoji,
        color,
        sound,
    };
    BTreeMap::from([
        (PetType::Luffy, info("🐵", "orange", "Gomu Gomu!")),
        (PetType::Dragon, info("🐉", "red", "ROAAR!")),
        (PetType::Phoenix, info("🦅", "yellow", "SCREECH!")),
        (PetType::Tiger, info("🐯", "orange", "GRRR!")),
        (PetType::Wolf, info("🐺", "gray", "AWOO!")),
        (PetType::Panda, info("🐼", "green", "RAWR!")),
    ])
});

const SHOP: [ShopListing; 5] = [
    ShopListing {
        pet_type: PetType::Dragon,
        price: 500,
        attack: 25,
        hp: 120,
    },
    ShopListing {
        pet_type: PetType::Phoenix,
        price: 600,
        attack: 22,
        hp: 110,
    },
    ShopListing {
        pet_type: PetType::Tiger,
        price: 400,
        attack: 23,
        hp: 105,
    },
    ShopListing {
        pet_type: PetType::Wolf,
        price: 450,
        attack: 21,
        hp: 100,
    },
    ShopListing {
        pet_type: PetType::Panda,
        price: 550,
        attack: 24,
        hp: 115,
    },
];

pub fn pet_types() -> &'static BTreeMap<PetType, PetTypeInfo> {
    &PET_TYPES
}

pub fn shop() -> &'static [ShopListing] {
    &SHOP
}

/// Look a listing up by its wire name. `None` for unknown or unlisted types.
pub fn listing(type_name: &str) -> Option<&'static ShopListing> {
    let pet_type = type_name.parse::<PetType>().ok()?;
    SHOP.iter().find(|l| l.pet_type == pet_type)
}

pub fn starter_pet() -> Pet {
    Pet {
        id: STARTER_PET_ID,
        name: "LUFFY".into(),
        pet_type: PetType::Luffy,
        hp: 100,
        max_hp: 100,
        energy: 76,
        attack: 20,
        level: 1,
        exp: 0,
    }
}

/// Fresh game: starting purse and the starter pet.
pub fn seed_state() -> GameState {
    GameState {
        coins: STARTING_COINS,
        pets: vec![starter_pet()],
    }
}
