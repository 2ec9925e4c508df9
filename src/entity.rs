//! Movable screen objects.
//!
//! Every object on screen is a [`GameEntity`]: a centre position, a
//! per-frame velocity, and an extent used for bounds checks. The
//! [`EntityKind`] tag is the only thing that differs between the player,
//! enemies, and clouds.

use std::fmt;

use glam::Vec2;

/// Stable identifier assigned by the entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category tag used to group entities for iteration and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The single player craft.
    Player,
    /// A falling missile.
    Enemy,
    /// A decorative cloud.
    Cloud,
}

/// What an entity is, along with any per-kind data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The player craft.
    Player,
    /// A falling missile.
    Enemy,
    /// A cloud drawn at `scale` times its image size.
    Cloud {
        /// Integer scale factor in `1..=3`.
        scale: u8,
    },
}

impl EntityKind {
    /// Returns the category set this kind belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Player => Category::Player,
            Self::Enemy => Category::Enemy,
            Self::Cloud { .. } => Category::Cloud,
        }
    }
}

/// A movable, axis-aligned rectangle on the playfield.
///
/// Coordinates have their origin at the bottom-left corner of the screen with
/// `y` pointing up; `position` is the rectangle's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameEntity {
    /// Identifier assigned on insertion.
    pub id: EntityId,
    /// Kind tag.
    pub kind: EntityKind,
    /// Centre of the rectangle.
    pub position: Vec2,
    /// Displacement applied once per frame.
    pub velocity: Vec2,
    /// Width and height of the bounding rectangle.
    pub extent: Vec2,
}

impl GameEntity {
    /// Returns the x coordinate of the left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.position.x - self.extent.x / 2.0
    }

    /// Returns the x coordinate of the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.extent.x / 2.0
    }

    /// Returns the y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.extent.y / 2.0
    }

    /// Returns the y coordinate of the top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.position.y + self.extent.y / 2.0
    }

    /// Moves the entity so its left edge sits at `x`.
    pub fn set_left(&mut self, x: f32) {
        self.position.x = x + self.extent.x / 2.0;
    }

    /// Moves the entity so its right edge sits at `x`.
    pub fn set_right(&mut self, x: f32) {
        self.position.x = x - self.extent.x / 2.0;
    }

    /// Moves the entity so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.position.y = y + self.extent.y / 2.0;
    }

    /// Moves the entity so its top edge sits at `y`.
    pub fn set_top(&mut self, y: f32) {
        self.position.y = y - self.extent.y / 2.0;
    }

    /// Returns `true` if the two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use sky_shooter::entity::{EntityId, EntityKind, GameEntity};
    ///
    /// let at = |id, x: f32| GameEntity {
    ///     id: EntityId(id),
    ///     kind: EntityKind::Enemy,
    ///     position: Vec2::new(x, 0.0),
    ///     velocity: Vec2::ZERO,
    ///     extent: Vec2::splat(10.0),
    /// };
    /// assert!(at(1, 0.0).overlaps(&at(2, 9.0)));
    /// assert!(!at(1, 0.0).overlaps(&at(2, 10.0)));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bottom() < other.top()
            && other.bottom() < self.top()
    }

    /// Advances the position by one frame of velocity.
    pub fn step(&mut self) {
        self.position += self.velocity;
    }
}
