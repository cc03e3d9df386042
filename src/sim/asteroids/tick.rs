//! Asteroids logical tick
//!
//! One tick: ship drift, targeting and firing, bullets with hit resolution,
//! asteroid drift, then the population floor.

use glam::IVec2;
use rand::Rng;

use super::state::{Asteroid, AsteroidsState, Ship};
use crate::consts::*;
use crate::sim::grid::{distance_squared, random_direction, within};

/// Fresh game: centered ship and the initial asteroid field
pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> AsteroidsState {
    let mut state = AsteroidsState::empty();
    for _ in 0..INITIAL_ASTEROIDS {
        spawn_asteroid(&mut state, rng);
    }
    state
}

/// Advance the game by one tick
pub fn tick<R: Rng + ?Sized>(state: &mut AsteroidsState, rng: &mut R) {
    state.ticks += 1;

    state.ship.update(rng);

    if let Some(target) = closest_asteroid(&state.ship, &state.asteroids).map(|a| a.pos) {
        state.ship.aim_at(target, rng);
        if let Some(bullet) = state.ship.try_fire() {
            state.bullets.push(bullet);
        }
    }

    update_bullets(state, rng);

    for asteroid in &mut state.asteroids {
        asteroid.advance();
    }

    while state.asteroids.len() < MIN_ASTEROIDS {
        spawn_asteroid(state, rng);
    }

    log::trace!(
        "Asteroids tick {}: ship={:?} asteroids={} bullets={}",
        state.ticks,
        state.ship.pos,
        state.asteroids.len(),
        state.bullets.len()
    );
}

/// Nearest asteroid to the ship; the earliest one wins ties
pub fn closest_asteroid<'a>(ship: &Ship, asteroids: &'a [Asteroid]) -> Option<&'a Asteroid> {
    asteroids
        .iter()
        .min_by_key(|a| distance_squared(ship.pos, a.pos))
}

/// Move bullets, drop spent ones and resolve hits
///
/// The bullet list is rebuilt from survivors. Each bullet consumes at most
/// one asteroid; fragments are appended and can be hit by later bullets in
/// the same pass.
fn update_bullets<R: Rng + ?Sized>(state: &mut AsteroidsState, rng: &mut R) {
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for mut bullet in bullets {
        bullet.advance();
        if bullet.is_spent() {
            continue;
        }

        let hit = state
            .asteroids
            .iter()
            .position(|a| within(bullet.pos, a.pos, HIT_RADIUS));

        match hit {
            Some(idx) => {
                let asteroid = state.asteroids.remove(idx);
                split_asteroid(state, &asteroid, rng);
            }
            None => survivors.push(bullet),
        }
    }

    state.bullets = survivors;
}

/// Replace a destroyed asteroid with two smaller fragments, if it was large
fn split_asteroid<R: Rng + ?Sized>(state: &mut AsteroidsState, asteroid: &Asteroid, rng: &mut R) {
    if asteroid.size <= 1 {
        log::debug!("Asteroid destroyed at {:?}", asteroid.pos);
        return;
    }

    for _ in 0..2 {
        let vel = random_direction(rng);
        let mut fragment = Asteroid::new(asteroid.pos, vel, rng);
        fragment.size = asteroid.size - 1;
        state.asteroids.push(fragment);
    }
    log::debug!("Asteroid split at {:?}", asteroid.pos);
}

/// Add a large asteroid at a random cell at least [`SPAWN_CLEARANCE`] from the ship
pub fn spawn_asteroid<R: Rng + ?Sized>(state: &mut AsteroidsState, rng: &mut R) {
    let pos = loop {
        let candidate = IVec2::new(
            rng.random_range(0..ASTEROIDS_GRID_SIZE),
            rng.random_range(0..ASTEROIDS_GRID_SIZE),
        );
        if !within(candidate, state.ship.pos, SPAWN_CLEARANCE) {
            break candidate;
        }
    };
    let vel = random_direction(rng);
    state.asteroids.push(Asteroid::new(pos, vel, rng));
    log::debug!("Asteroid spawned at {:?} moving {:?}", pos, vel);
}
