//! Deterministic battle resolution with scripted damage rolls.
//!
//! Run with `cargo test -p pet-sim-server --tests`.

use pet_sim_server::{
    error::GameError,
    game::{
        logic::{Engine, BATTLE_REWARD},
        rng::{GameRng, Roller},
        types::{GameState, Pet, PetType},
    },
};
use std::{collections::VecDeque, ops::Range};

/// Hands out pre-recorded rolls; falls back to the range floor when empty.
struct Script {
    rolls: VecDeque<u32>,
}

impl Roller for Script {
    fn roll(&mut self, range: Range<u32>) -> u32 {
        self.rolls.pop_front().unwrap_or(range.start)
    }

    fn chance(&mut self, _p: f64) -> bool {
        true
    }
}

fn scripted(rolls: &[u32]) -> Box<dyn Roller> {
    Box::new(Script {
        rolls: rolls.iter().copied().collect(),
    })
}

fn pet(id: u64, name: &str, attack: u32, hp: i32, exp: u32) -> Pet {
    Pet {
        id,
        name: name.into(),
        pet_type: PetType::Wolf,
        hp,
        max_hp: 100,
        energy: 50,
        attack,
        level: 1,
        exp,
    }
}

fn duel(a: Pet, b: Pet, rolls: &[u32]) -> Engine {
    let state = GameState {
        coins: 0,
        pets: vec![a, b],
    };
    Engine::from_state(state, scripted(rolls))
}

#[test]
fn pet1_wins_with_exact_log_and_hp() {
    let mut engine = duel(pet(1, "A", 20, 50, 0), pet(2, "B", 15, 40, 0), &[5, 3, 5]);

    let report = engine.battle(1, 2).unwrap();

    assert_eq!(
        report.battle_log,
        vec![
            "A menyerang! -25 HP",
            "B menyerang! -18 HP",
            "A menyerang! -25 HP",
        ]
    );
    assert_eq!(report.winner, "A");
    assert_eq!(report.winner_id, 1);

    let state = engine.state();
    let a = state.pet(1).unwrap();
    let b = state.pet(2).unwrap();
    assert_eq!(a.hp, 32, "winner keeps its running hp");
    assert_eq!(a.exp, 50);
    assert_eq!(a.level, 1);
    assert_eq!(b.hp, 1, "loser is clamped to 1 hp");
    assert_eq!(b.exp, 0);
    assert_eq!(state.coins, BATTLE_REWARD);
}

#[test]
fn pet2_wins_and_levels_without_healing() {
    let mut engine = duel(pet(1, "A", 20, 20, 0), pet(2, "B", 15, 100, 60), &[0, 9]);

    let report = engine.battle(1, 2).unwrap();

    assert_eq!(
        report.battle_log,
        vec!["A menyerang! -20 HP", "B menyerang! -24 HP"]
    );
    assert_eq!(report.winner, "B");

    let b = engine.state().pet(2).unwrap();
    assert_eq!(b.level, 2);
    assert_eq!(b.exp, 10);
    assert_eq!(b.attack, 20);
    assert_eq!(b.max_hp, 120);
    assert_eq!(b.hp, 80, "level-up in battle does not restore hp");

    assert_eq!(engine.state().pet(1).unwrap().hp, 1);
}

#[test]
fn battle_against_itself_is_rejected() {
    let mut engine = duel(pet(1, "A", 20, 50, 0), pet(2, "B", 15, 40, 0), &[]);
    let before = engine.state().clone();

    assert_eq!(engine.battle(1, 1).unwrap_err(), GameError::InvalidPair(1));
    assert_eq!(engine.state(), &before);
}

#[test]
fn unknown_pet_against_itself_is_not_found() {
    let mut engine = duel(pet(1, "A", 20, 50, 0), pet(2, "B", 15, 40, 0), &[]);

    assert_eq!(engine.battle(9, 9).unwrap_err(), GameError::PetNotFound(9));
}

#[test]
fn missing_pet_is_not_found_and_nothing_changes() {
    let mut engine = duel(pet(1, "A", 20, 50, 0), pet(2, "B", 15, 40, 0), &[]);
    let before = engine.state().clone();

    assert_eq!(engine.battle(1, 9).unwrap_err(), GameError::PetNotFound(9));
    assert_eq!(engine.battle(9, 2).unwrap_err(), GameError::PetNotFound(9));
    assert_eq!(engine.state(), &before);
}

#[test]
fn random_battles_keep_invariants() {
    let mut engine = Engine::new(Box::new(GameRng::new(42)));
    engine.buy("TIGER").unwrap();
    engine.buy("WOLF").unwrap();

    for round in 0..50 {
        let coins = engine.state().coins;
        let (a, b) = if round % 2 == 0 { (1, 2) } else { (3, 2) };
        let report = engine.battle(a, b).unwrap();

        assert_eq!(engine.state().coins, coins + BATTLE_REWARD);
        assert!(!report.battle_log.is_empty());
        for p in &engine.state().pets {
            assert!(p.hp >= 1, "{} dropped to {}", p.name, p.hp);
            assert!(p.hp <= p.max_hp);
            assert!(p.exp < 100);
        }
    }
}
