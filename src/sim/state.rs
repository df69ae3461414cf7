//! Game state and core simulation types
//!
//! The whole playthrough lives in one [`GameWorld`] aggregate: entities,
//! health, the containment field and the current phase. A new playthrough
//! means a fresh `GameWorld`; nothing here is reset in place.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;
use crate::{center_vertically, inset_from_right};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal, no way back to `Playing`
    Over(Outcome),
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The treasure reached the door
    Win,
    /// The health meter was exhausted
    Lose,
}

/// A moving (or movable) rectangle in the room.
///
/// `alpha` is a cosmetic channel the renderer reads back: 1.0 normally,
/// dimmed to 0.5 on frames where the player is in contact with an enemy.
/// The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            alpha: 1.0,
        }
    }

    /// The entity's footprint for collision tests
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Depleting health meter. Drains on enemy contact, never recovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMeter {
    pub value: i32,
    pub max: i32,
}

impl HealthMeter {
    pub fn new(max: i32) -> Self {
        Self { value: max, max }
    }

    pub fn damage(&mut self, amount: i32) {
        self.value -= amount;
    }

    /// Loss threshold is strictly below zero; a meter at exactly 0 is
    /// still alive for one more contact frame.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.value < 0
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    /// Run seed for reproducibility (drives the enemy spawn layout)
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Playable room interior
    pub field: Rect,
    /// The explorer
    pub player: Entity,
    /// Patrolling blobs, in spawn order
    pub enemies: Vec<Entity>,
    /// The treasure chest; follows the player while they overlap
    pub treasure: Entity,
    /// The exit door
    pub door: Entity,
    /// Player health
    pub health: HealthMeter,
}

impl GameWorld {
    /// Create a fresh playthrough with the given seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Entity::new(
            Vec2::new(
                PLAYER_SIZE.x + START_INSET,
                center_vertically(PLAYER_SIZE.y),
            ),
            PLAYER_SIZE,
        );
        let treasure = Entity::new(inset_from_right(TREASURE_SIZE, START_INSET), TREASURE_SIZE);
        let door = Entity::new(DOOR_POS, DOOR_SIZE);
        let enemies = generate_enemies(ENEMY_COUNT, &mut rng);

        log::info!("New world: seed={seed}, {} enemies", enemies.len());

        Self {
            seed,
            phase: GamePhase::Playing,
            field: Rect::new(FIELD_X, FIELD_Y, FIELD_WIDTH, FIELD_HEIGHT),
            player,
            enemies,
            treasure,
            door,
            health: HealthMeter::new(HEALTH_MAX),
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over(_))
    }
}

/// Place `count` enemies left-to-right at fixed spacing, each at a random
/// height, with vertical speed alternating in sign per spawn index (index 0
/// moves down). The alternation keeps the patrol phases staggered.
fn generate_enemies(count: usize, rng: &mut Pcg32) -> Vec<Entity> {
    let mut direction = 1.0;
    let y_max = (STAGE_HEIGHT - ENEMY_SIZE.y) as u32 - ENEMY_SPAWN_MARGIN;

    (0..count)
        .map(|i| {
            let x = ENEMY_SPACING * i as f32 + ENEMY_X_OFFSET;
            let y = rng.random_range(ENEMY_SPAWN_MARGIN..=y_max) as f32;

            let mut blob = Entity::new(Vec2::new(x, y), ENEMY_SIZE);
            blob.vel.y = ENEMY_SPEED * direction;
            direction = -direction;

            log::debug!("Spawned enemy {i} at ({x}, {y}), vy={}", blob.vel.y);
            blob
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_layout() {
        let world = GameWorld::new(7);
        assert_eq!(world.enemies.len(), ENEMY_COUNT);

        for (i, blob) in world.enemies.iter().enumerate() {
            // Fixed horizontal ladder from the x offset
            assert_eq!(blob.pos.x, ENEMY_X_OFFSET + ENEMY_SPACING * i as f32);
            // Random height stays inside the spawn band
            assert!(blob.pos.y >= ENEMY_SPAWN_MARGIN as f32);
            assert!(
                blob.pos.y <= STAGE_HEIGHT - ENEMY_SIZE.y - ENEMY_SPAWN_MARGIN as f32
            );
            // Alternating patrol direction, index 0 moving down
            let expected_vy = if i % 2 == 0 { ENEMY_SPEED } else { -ENEMY_SPEED };
            assert_eq!(blob.vel.y, expected_vy);
            assert_eq!(blob.vel.x, 0.0);
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let a = GameWorld::new(42);
        let b = GameWorld::new(42);
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.vel, eb.vel);
        }
    }

    #[test]
    fn test_initial_positions() {
        let world = GameWorld::new(1);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.health.value, HEALTH_MAX);

        // Player near the left wall, treasure near the right, both centered
        assert_eq!(world.player.pos.x, PLAYER_SIZE.x + START_INSET);
        assert_eq!(
            world.treasure.pos.x,
            STAGE_WIDTH - TREASURE_SIZE.x - START_INSET
        );
        assert_eq!(world.door.pos, DOOR_POS);
    }

    #[test]
    fn test_health_meter_threshold() {
        let mut health = HealthMeter::new(2);
        assert!(!health.is_depleted());
        health.damage(1);
        health.damage(1);
        // Exactly zero is not depleted
        assert_eq!(health.value, 0);
        assert!(!health.is_depleted());
        health.damage(1);
        assert_eq!(health.value, -1);
        assert!(health.is_depleted());
    }
}
