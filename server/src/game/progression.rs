//! Experience and level-up rules shared by training and battles.

use crate::game::types::Pet;

pub const EXP_PER_LEVEL: u32 = 100;
pub const LEVEL_ATTACK_BONUS: u32 = 5;
pub const LEVEL_HP_BONUS: i32 = 20;

/// Add `amount` exp and apply at most one level-up.
///
/// `heal` also raises current hp by the max-hp bonus (training does,
/// battles don't). Returns `true` when the pet levelled up.
pub fn grant_exp(pet: &mut Pet, amount: u32, heal: bool) -> bool {
    pet.exp += amount;
    if pet.exp < EXP_PER_LEVEL {
        return false;
    }

    pet.level += 1;
    pet.attack += LEVEL_ATTACK_BONUS;
    pet.max_hp += LEVEL_HP_BONUS;
    if heal {
        pet.hp = (pet.hp + LEVEL_HP_BONUS).min(pet.max_hp);
    }
    pet.exp -= EXP_PER_LEVEL;
    true
}
