//! Treasure Hunter - a dungeon-escape arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//!
//! Rendering, asset loading and the OS input layer are external
//! collaborators: they feed key edge events into [`sim::input`] and read
//! entity geometry (and the player's `alpha`) back out after each tick.

pub mod sim;

pub use sim::{GamePhase, GameWorld, Outcome, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Stage dimensions (the dungeon backdrop is square)
    pub const STAGE_WIDTH: f32 = 512.0;
    pub const STAGE_HEIGHT: f32 = 512.0;

    /// Playable room interior; tighter than the stage because of the walls
    /// drawn into the backdrop.
    pub const FIELD_X: f32 = 28.0;
    pub const FIELD_Y: f32 = 10.0;
    pub const FIELD_WIDTH: f32 = 488.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Player movement speed while a directional key is held (pixels/frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Enemy vertical patrol speed (pixels/frame)
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Health meter capacity; contact with an enemy drains 1 unit per frame
    pub const HEALTH_MAX: i32 = 128;

    /// Enemy spawn layout
    pub const ENEMY_COUNT: usize = 6;
    pub const ENEMY_SPACING: f32 = 48.0;
    pub const ENEMY_X_OFFSET: f32 = 150.0;
    /// Vertical inset keeping spawns away from the top/bottom walls
    pub const ENEMY_SPAWN_MARGIN: u32 = 32;

    /// Offset the treasure keeps from the player's corner while carried
    pub const CARRY_OFFSET: Vec2 = Vec2::new(8.0, 8.0);

    /// Sprite footprints (matching the shipped texture atlas)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(26.0, 32.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(32.0, 24.0);
    pub const TREASURE_SIZE: Vec2 = Vec2::new(28.0, 24.0);
    pub const DOOR_SIZE: Vec2 = Vec2::new(55.0, 45.0);

    /// Horizontal inset for the player and treasure start positions
    pub const START_INSET: f32 = 48.0;
    /// Door sits against the top wall, just right of the corner
    pub const DOOR_POS: Vec2 = Vec2::new(32.0, 0.0);
}

/// Center a sprite of the given height on the stage vertically
#[inline]
pub fn center_vertically(height: f32) -> f32 {
    consts::STAGE_HEIGHT / 2.0 - height / 2.0
}

/// Top-left position for a sprite inset from the right stage edge
#[inline]
pub fn inset_from_right(size: Vec2, inset: f32) -> Vec2 {
    Vec2::new(
        consts::STAGE_WIDTH - size.x - inset,
        center_vertically(size.y),
    )
}
