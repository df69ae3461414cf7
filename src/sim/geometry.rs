//! Axis-aligned rectangle geometry
//!
//! The two primitives every frame runs on: an AABB overlap test and a
//! containment clamp against the room interior. Both are branch-light and
//! allocation-free; they are the hot path of the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Entity;

/// An axis-aligned rectangle; `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Which edge of the containment field an entity breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Separating-axis overlap test for two AABBs.
///
/// True iff the center distance on each axis is strictly less than the
/// combined half-extents on that axis. Touching edges do not count as an
/// overlap. Precondition: both rectangles have positive width and height;
/// degenerate rectangles are not defended against.
#[inline]
pub fn intersects(a: Rect, b: Rect) -> bool {
    let delta = (a.center() - b.center()).abs();
    let reach = a.half_extent() + b.half_extent();
    delta.x < reach.x && delta.y < reach.y
}

/// Clamp an entity into the containment field, reporting the breached edge.
///
/// Edges are checked in fixed priority order - Left, Top, Right, Bottom -
/// and only the first violation is clamped and reported per call; a corner
/// breach resolves over two consecutive frames. Returns `None` (and leaves
/// the position untouched) when the entity is already inside.
///
/// The right and bottom limits are the field's `width` and `height` read as
/// absolute stage coordinates, not offsets from the field origin, so a
/// field with a non-zero origin is effectively inset on those two sides.
/// This matches the room geometry the game ships with and is relied on by
/// the patrol bounds; change it together with the field constants.
pub fn contain(entity: &mut Entity, field: Rect) -> Option<Edge> {
    if entity.pos.x < field.pos.x {
        entity.pos.x = field.pos.x;
        return Some(Edge::Left);
    }

    if entity.pos.y < field.pos.y {
        entity.pos.y = field.pos.y;
        return Some(Edge::Top);
    }

    if entity.pos.x + entity.size.x > field.size.x {
        entity.pos.x = field.size.x - entity.size.x;
        return Some(Edge::Right);
    }

    if entity.pos.y + entity.size.y > field.size.y {
        entity.pos.y = field.size.y - entity.size.y;
        return Some(Edge::Bottom);
    }

    None
}
