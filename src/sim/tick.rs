//! Per-frame simulation step
//!
//! The frame driver calls [`tick`] once per display refresh and draws
//! afterwards. Order within a tick is fixed: player movement, enemy patrol
//! and contact, health, treasure carry, then the terminal checks. Once the
//! world is in a terminal phase the tick is a no-op.

use super::geometry::{Edge, contain, intersects};
use super::state::{GamePhase, GameWorld, Outcome};
use crate::consts::CARRY_OFFSET;

/// Advance the world by one frame.
pub fn tick(world: &mut GameWorld) {
    if world.is_over() {
        return;
    }

    // Integrate the player and clamp into the room. The player does not
    // bounce, so the reported edge is discarded.
    world.player.pos += world.player.vel;
    let _ = contain(&mut world.player, world.field);

    // Enemies patrol vertically and bounce off the top and bottom walls.
    // The hit flag is computed fresh each frame from the overlap tests, so
    // sustained contact registers once per frame for as long as it lasts.
    let mut player_hit = false;
    for enemy in &mut world.enemies {
        enemy.pos.y += enemy.vel.y;
        if let Some(Edge::Top | Edge::Bottom) = contain(enemy, world.field) {
            enemy.vel.y = -enemy.vel.y;
        }

        if intersects(world.player.rect(), enemy.rect()) {
            player_hit = true;
        }
    }

    // A hit frame dims the player (cosmetic, read back by the renderer)
    // and drains one unit of health.
    if player_hit {
        world.player.alpha = 0.5;
        world.health.damage(1);
    } else {
        world.player.alpha = 1.0;
    }

    // The treasure is carried by following the player while they overlap,
    // not picked up and detached.
    if intersects(world.player.rect(), world.treasure.rect()) {
        world.treasure.pos = world.player.pos + CARRY_OFFSET;
    }

    // Terminal checks. Win is evaluated first: a frame where the treasure
    // reaches the door and the meter runs out at once resolves as a win.
    if intersects(world.treasure.rect(), world.door.rect()) {
        world.phase = GamePhase::Over(Outcome::Win);
        log::info!("Treasure reached the door - win");
        return;
    }

    if world.health.is_depleted() {
        world.phase = GamePhase::Over(Outcome::Lose);
        log::info!("Health exhausted - lose");
    }
}
