//! Directional input binding
//!
//! The device layer raises discrete press/release events per key code; this
//! module turns them into player velocity changes. Callbacks fire on the
//! edge of a transition only - auto-repeated "down" events while a key is
//! held are ignored. This is the only mutator of player velocity outside
//! the containment response in the tick.

use serde::{Deserialize, Serialize};

use super::state::Entity;
use crate::consts::PLAYER_SPEED;

/// The four movement directions, one per arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    Left,
    Up,
    Right,
    Down,
}

impl Dir {
    /// Map a device key code (browser arrow-key codes 37-40) to a
    /// direction. Unrecognized codes belong to the device layer.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Dir::Left),
            38 => Some(Dir::Up),
            39 => Some(Dir::Right),
            40 => Some(Dir::Down),
            _ => None,
        }
    }
}

/// Edge-triggered state for a single key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KeyListener {
    down: bool,
}

impl KeyListener {
    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[inline]
    pub fn is_up(&self) -> bool {
        !self.down
    }

    /// Record a device "down" event; true only on the up-to-down edge.
    pub fn press(&mut self) -> bool {
        let edge = !self.down;
        self.down = true;
        edge
    }

    /// Record a device "up" event; true only on the down-to-up edge.
    pub fn release(&mut self) -> bool {
        let edge = self.down;
        self.down = false;
        edge
    }
}

/// The four arrow-key listeners bound to the player.
///
/// Press sets the axis velocity to a fixed magnitude with sign per
/// direction, unconditionally - pressing Left sets `vx = -5` even while
/// Right is held. Release zeroes the axis only if the opposing key is not
/// currently down; with the opposite key held the release is a no-op, so
/// holding Right and tapping Left leaves `vx` at the Left value until
/// Right itself is released. The axis never dips to zero mid-reversal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionalBinding {
    left: KeyListener,
    up: KeyListener,
    right: KeyListener,
    down: KeyListener,
}

impl DirectionalBinding {
    pub fn is_down(&self, dir: Dir) -> bool {
        self.listener(dir).is_down()
    }

    fn listener(&self, dir: Dir) -> &KeyListener {
        match dir {
            Dir::Left => &self.left,
            Dir::Up => &self.up,
            Dir::Right => &self.right,
            Dir::Down => &self.down,
        }
    }

    /// Handle a raw device key event. Returns true if the code maps to a
    /// bound direction, in which case the caller should suppress the
    /// device's default handling.
    pub fn handle_key_code(&mut self, code: u32, pressed: bool, player: &mut Entity) -> bool {
        let Some(dir) = Dir::from_key_code(code) else {
            return false;
        };
        if pressed {
            self.key_down(dir, player);
        } else {
            self.key_up(dir, player);
        }
        true
    }

    /// Device "down" event for a direction.
    pub fn key_down(&mut self, dir: Dir, player: &mut Entity) {
        match dir {
            Dir::Left => {
                if self.left.press() {
                    player.vel.x = -PLAYER_SPEED;
                }
            }
            Dir::Up => {
                if self.up.press() {
                    player.vel.y = -PLAYER_SPEED;
                }
            }
            Dir::Right => {
                if self.right.press() {
                    player.vel.x = PLAYER_SPEED;
                }
            }
            Dir::Down => {
                if self.down.press() {
                    player.vel.y = PLAYER_SPEED;
                }
            }
        }
    }

    /// Device "up" event for a direction.
    pub fn key_up(&mut self, dir: Dir, player: &mut Entity) {
        match dir {
            Dir::Left => {
                if self.left.release() && self.right.is_up() {
                    player.vel.x = 0.0;
                }
            }
            Dir::Up => {
                if self.up.release() && self.down.is_up() {
                    player.vel.y = 0.0;
                }
            }
            Dir::Right => {
                if self.right.release() && self.left.is_up() {
                    player.vel.x = 0.0;
                }
            }
            Dir::Down => {
                if self.down.release() && self.up.is_up() {
                    player.vel.y = 0.0;
                }
            }
        }
    }
}
