use crate::{
    error::{GameError, Result},
    game::{
        catalog,
        progression::grant_exp,
        rng::Roller,
        types::{GameState, Pet},
    },
};
use serde::Serialize;
use std::{ops::Range, time::Duration};

pub const TRAIN_ENERGY_COST: u32 = 20;
pub const TRAIN_EXP: u32 = 30;
pub const TRAIN_REWARD: u32 = 50;

pub const BATTLE_EXP: u32 = 50;
pub const BATTLE_REWARD: u32 = 200;
/// Added on top of attack for every hit.
pub const DAMAGE_SPREAD: Range<u32> = 0..10;

pub const FOOD_SUCCESS_CHANCE: f64 = 0.7;
pub const FOOD_POWER: Range<u32> = 10..30;
pub const DEFAULT_SEARCH_DELAY_MS: Range<u32> = 1000..3000;

/// Result of a successful training session.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TrainOutcome {
    pub pet: Pet,
    pub coins: u32,
    pub leveled_up: bool,
}

/// Result of a successful purchase.
#[derive(Debug, Serialize, Clone)]
pub struct Purchase {
    pub pet: Pet,
    pub coins: u32,
}

/// Full account of one resolved battle.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    pub winner_id: u64,
    pub winner: String,
    pub battle_log: Vec<String>,
    pub coins: u32,
}

/// Everything decided up-front for a food search: how long it takes and
/// what it finds. `power == None` means the pet gets lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlan {
    pub pet_id: u64,
    /// Game generation the search was started in.
    pub generation: u64,
    pub delay: Duration,
    pub power: Option<u32>,
}

/// How a food search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodSearch {
    Found { power: u32, pet: Pet },
    Lost,
}

/// The rules engine. Owns the game state, the pet-id counter and the
/// random source; every mutation goes through here.
pub struct Engine {
    state: GameState,
    next_pet_id: u64,
    /// Bumped on every reset; searches from an older game are void.
    generation: u64,
    rng: Box<dyn Roller>,
    search_delay_ms: Range<u32>,
}

impl Engine {
    pub fn new(rng: Box<dyn Roller>) -> Self {
        Self::with_search_delay(rng, DEFAULT_SEARCH_DELAY_MS)
    }

    pub fn with_search_delay(rng: Box<dyn Roller>, search_delay_ms: Range<u32>) -> Self {
        Self {
            state: catalog::seed_state(),
            next_pet_id: catalog::STARTER_PET_ID + 1,
            generation: 0,
            rng,
            search_delay_ms,
        }
    }

    /// Resume from an existing state. New ids continue after the highest one
    /// already owned.
    pub fn from_state(state: GameState, rng: Box<dyn Roller>) -> Self {
        let next_pet_id = state.pets.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            state,
            next_pet_id,
            generation: 0,
            rng,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn pet_mut(&mut self, id: u64) -> Result<&mut Pet> {
        self.state.pet_mut(id).ok_or(GameError::PetNotFound(id))
    }

    /// Spend energy for exp; always pays the flat coin reward.
    pub fn train(&mut self, pet_id: u64) -> Result<TrainOutcome> {
        let pet = self.pet_mut(pet_id)?;
        if pet.energy < TRAIN_ENERGY_COST {
            return Err(GameError::InsufficientEnergy {
                have: pet.energy,
                need: TRAIN_ENERGY_COST,
            });
        }

        pet.energy -= TRAIN_ENERGY_COST;
        let leveled_up = grant_exp(pet, TRAIN_EXP, true);
        if leveled_up {
            log::info!("{} reached level {}", pet.name, pet.level);
        }
        let pet = pet.clone();

        self.state.coins += TRAIN_REWARD;
        Ok(TrainOutcome {
            pet,
            coins: self.state.coins,
            leveled_up,
        })
    }

    /// Buy a pet from the shop by type name.
    pub fn buy(&mut self, type_name: &str) -> Result<Purchase> {
        let listing =
            catalog::listing(type_name).ok_or_else(|| GameError::UnknownType(type_name.into()))?;
        if self.state.coins < listing.price {
            return Err(GameError::InsufficientFunds {
                have: self.state.coins,
                need: listing.price,
            });
        }

        let pet = Pet {
            id: self.next_pet_id,
            name: format!("{}_{}", listing.pet_type, self.state.pets.len() + 1),
            pet_type: listing.pet_type,
            hp: listing.hp,
            max_hp: listing.hp,
            energy: catalog::PURCHASED_ENERGY,
            attack: listing.attack,
            level: 1,
            exp: 0,
        };
        self.next_pet_id += 1;
        self.state.pets.push(pet.clone());
        self.state.coins -= listing.price;

        log::info!("bought {} for {} coins", pet.name, listing.price);
        Ok(Purchase {
            pet,
            coins: self.state.coins,
        })
    }

    /// Resolve a whole battle between two owned pets.
    ///
    /// Pet 1 strikes on odd turns, pet 2 on even turns, until one side's
    /// running hp drops to zero or below. The loser keeps at least 1 hp.
    pub fn battle(&mut self, pet1_id: u64, pet2_id: u64) -> Result<BattleReport> {
        let p1 = self
            .state
            .pet(pet1_id)
            .cloned()
            .ok_or(GameError::PetNotFound(pet1_id))?;
        let p2 = self
            .state
            .pet(pet2_id)
            .cloned()
            .ok_or(GameError::PetNotFound(pet2_id))?;
        if pet1_id == pet2_id {
            return Err(GameError::InvalidPair(pet1_id));
        }

        // 1️⃣  Fight on running hp; persisted pets stay untouched meanwhile.
        let mut hp1 = p1.hp;
        let mut hp2 = p2.hp;
        let mut battle_log = Vec::new();
        let mut turn = 1_u32;
        while hp1 > 0 && hp2 > 0 {
            let (attacker, target_hp) = if turn % 2 == 1 {
                (&p1, &mut hp2)
            } else {
                (&p2, &mut hp1)
            };
            let damage = attacker.attack + self.rng.roll(DAMAGE_SPREAD);
            *target_hp -= damage as i32;
            battle_log.push(format!("{} menyerang! -{} HP", attacker.name, damage));
            turn += 1;
        }

        // 2️⃣  Winner levels first, then keeps its running hp.
        let (winner_id, winner_hp, loser_id, loser_hp) = if hp1 > 0 {
            (pet1_id, hp1, pet2_id, hp2)
        } else {
            (pet2_id, hp2, pet1_id, hp1)
        };

        let winner = self.pet_mut(winner_id)?;
        if grant_exp(winner, BATTLE_EXP, false) {
            log::info!("{} reached level {}", winner.name, winner.level);
        }
        winner.hp = winner_hp.min(winner.max_hp);
        let winner_name = winner.name.clone();

        // 3️⃣  Loser is never left at 0 hp.
        let loser = self.pet_mut(loser_id)?;
        loser.hp = loser_hp.max(1);

        self.state.coins += BATTLE_REWARD;
        log::info!(
            "battle {} vs {}: {} wins after {} turns",
            p1.name,
            p2.name,
            winner_name,
            battle_log.len()
        );

        Ok(BattleReport {
            winner_id,
            winner: winner_name,
            battle_log,
            coins: self.state.coins,
        })
    }

    /// Start a food search: validate the pet and roll delay and outcome.
    /// Nothing is mutated until [`Engine::apply_food`].
    pub fn plan_search(&mut self, pet_id: u64) -> Result<SearchPlan> {
        if self.state.pet(pet_id).is_none() {
            return Err(GameError::PetNotFound(pet_id));
        }

        let delay = Duration::from_millis(self.rng.roll(self.search_delay_ms.clone()).into());
        let power = self
            .rng
            .chance(FOOD_SUCCESS_CHANCE)
            .then(|| self.rng.roll(FOOD_POWER));

        Ok(SearchPlan {
            pet_id,
            generation: self.generation,
            delay,
            power,
        })
    }

    /// Feed the searching pet `power`: energy grows unbounded, hp is capped
    /// at max. A search started before the last reset finds no pet.
    pub fn apply_food(&mut self, plan: &SearchPlan, power: u32) -> Result<Pet> {
        if plan.generation != self.generation {
            return Err(GameError::PetNotFound(plan.pet_id));
        }
        let pet = self.pet_mut(plan.pet_id)?;
        pet.energy += power;
        pet.hp = (pet.hp + power as i32).min(pet.max_hp);
        Ok(pet.clone())
    }

    /// Throw the whole game away and start from the seed state. Pet ids keep
    /// counting so ids from before the reset are never handed out again.
    pub fn reset(&mut self) {
        self.state = catalog::seed_state();
        self.generation += 1;
        log::info!("game reset (generation {})", self.generation);
    }
}
