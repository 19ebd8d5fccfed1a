//! Wall containment for the ball
//!
//! The field is an axis-aligned rectangle; the ball is a circle of fixed
//! radius. Hitting a wall is fully inelastic: the ball stops on that axis and
//! forgets the acceleration it had along it.

use glam::Vec2;

use super::state::IntegratorState;

/// Immutable field geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Ball radius
    pub radius: f32,
}

impl Field {
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        Self {
            width,
            height,
            radius,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Smallest allowed ball center
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    /// Largest allowed ball center
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.width - self.radius, self.height - self.radius)
    }

    /// Whether `pos` is a legal ball center
    pub fn contains(&self, pos: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
    }
}

/// One of the four field walls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which walls clamped the ball during one enforcement pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContacts {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallContacts {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn contains(&self, wall: Wall) -> bool {
        match wall {
            Wall::Left => self.left,
            Wall::Right => self.right,
            Wall::Top => self.top,
            Wall::Bottom => self.bottom,
        }
    }

    /// Walls that fired, in left/right/top/bottom order
    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        [Wall::Left, Wall::Right, Wall::Top, Wall::Bottom]
            .into_iter()
            .filter(|w| self.contains(*w))
    }
}

/// Clamp the ball inside `field`
///
/// Each wall is checked independently; a corner clamps both axes. A clamped
/// axis has its velocity and carried acceleration zeroed. Calling this twice
/// in a row is the same as calling it once.
pub fn enforce_boundaries(state: &mut IntegratorState, field: &Field) -> WallContacts {
    let min = field.min();
    let max = field.max();
    let mut contacts = WallContacts::default();

    if state.position.x < min.x {
        state.position.x = min.x;
        state.velocity.x = 0.0;
        state.last_acceleration.x = 0.0;
        contacts.left = true;
    }

    if state.position.x > max.x {
        state.position.x = max.x;
        state.velocity.x = 0.0;
        state.last_acceleration.x = 0.0;
        contacts.right = true;
    }

    if state.position.y < min.y {
        state.position.y = min.y;
        state.velocity.y = 0.0;
        state.last_acceleration.y = 0.0;
        contacts.top = true;
    }

    if state.position.y > max.y {
        state.position.y = max.y;
        state.velocity.y = 0.0;
        state.last_acceleration.y = 0.0;
        contacts.bottom = true;
    }

    contacts
}
