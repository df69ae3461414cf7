//! Treasure Hunter entry point
//!
//! Headless frame driver: stands in for the renderer's game loop and the
//! OS input layer. A small autopilot synthesizes arrow-key edge events,
//! walking the explorer to the treasure and then to the door, so a whole
//! playthrough can run without a display.

use treasure_hunter::sim::{
    Dir, DirectionalBinding, Entity, GamePhase, GameWorld, Outcome, intersects, tick,
};

/// Give up on runs that never terminate (a bad seed can strand the
/// autopilot against a patrol lane).
const MAX_FRAMES: u32 = 10_000;

/// Steering deadzone in pixels; below the per-frame speed to avoid
/// oscillating around the target.
const DEADZONE: f32 = 4.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    let mut world = GameWorld::new(seed);
    let mut binding = DirectionalBinding::default();

    let mut frames = 0u32;
    while !world.is_over() && frames < MAX_FRAMES {
        steer(&mut world, &mut binding);
        tick(&mut world);
        frames += 1;
    }

    match world.phase {
        GamePhase::Over(Outcome::Win) => {
            println!(
                "You Win! (seed {seed}, {frames} frames, {} health left)",
                world.health.value
            );
        }
        GamePhase::Over(Outcome::Lose) => {
            println!("You Lose. (seed {seed}, {frames} frames)");
        }
        GamePhase::Playing => {
            println!("Stalled after {MAX_FRAMES} frames (seed {seed})");
        }
    }
}

/// Head for the treasure until it is being carried, then for the door.
fn steer(world: &mut GameWorld, binding: &mut DirectionalBinding) {
    let carrying = intersects(world.player.rect(), world.treasure.rect());
    let target = if carrying {
        world.door.rect().center()
    } else {
        world.treasure.rect().center()
    };
    let delta = target - world.player.rect().center();

    apply(binding, Dir::Left, delta.x < -DEADZONE, &mut world.player);
    apply(binding, Dir::Right, delta.x > DEADZONE, &mut world.player);
    apply(binding, Dir::Up, delta.y < -DEADZONE, &mut world.player);
    apply(binding, Dir::Down, delta.y > DEADZONE, &mut world.player);
}

/// Hold or release a key; the binding's edge handling makes repeated
/// holds/releases a no-op, just like real auto-repeat.
fn apply(binding: &mut DirectionalBinding, dir: Dir, held: bool, player: &mut Entity) {
    if held {
        binding.key_down(dir, player);
    } else {
        binding.key_up(dir, player);
    }
}
