//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per externally driven frame
//! - Seeded RNG only (spawn layout is a function of the world seed)
//! - Stable enemy iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod input;
pub mod state;
pub mod tick;

pub use geometry::{Edge, Rect, contain, intersects};
pub use input::{Dir, DirectionalBinding, KeyListener};
pub use state::{Entity, GamePhase, GameWorld, HealthMeter, Outcome};
pub use tick::tick;
