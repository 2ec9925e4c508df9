//! Timer-driven creation of enemies and clouds.
//!
//! Each category has its own repeating [`Timer`]. The frame driver feeds the
//! elapsed frame time into [`Spawner::tick`], which spawns once for every
//! interval that completed, so the cadence does not depend on the frame rate.

use std::time::Duration;

use bevy::time::{Timer, TimerMode};
use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::assets::SpriteExtents;
use crate::collection::EntityCollection;
use crate::constants::{
    CLOUD_SCALE_RANGE, CLOUD_SPAWN_INTERVAL, CLOUD_SPEED_RANGE, ENEMY_SPAWN_INTERVAL,
    ENEMY_SPEED_RANGE, SPAWN_DEPTH, SPAWN_MARGIN_X,
};
use crate::entity::{EntityId, EntityKind};
use crate::state::ScreenSize;

/// A fully rolled entity waiting to be inserted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    /// Kind of the new entity.
    pub kind: EntityKind,
    /// Centre position.
    pub position: Vec2,
    /// Per-frame velocity.
    pub velocity: Vec2,
    /// Bounding extent.
    pub extent: Vec2,
}

impl SpawnRequest {
    /// Inserts the rolled entity into `entities`.
    pub fn insert_into(self, entities: &mut EntityCollection) -> EntityId {
        entities.insert(self.kind, self.position, self.velocity, self.extent)
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "Rolled values are small integers that f32 represents exactly."
)]
fn roll<R: Rng + ?Sized>(rng: &mut R, (low, high): (i32, i32)) -> f32 {
    rng.gen_range(low..=high.max(low)) as f32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Screen dimensions are small positive whole numbers."
)]
fn whole(value: f32) -> i32 {
    value.round() as i32
}

/// Rolls a position whose centre is at least [`SPAWN_MARGIN_X`] from the side
/// edges and whose top edge is within [`SPAWN_DEPTH`] of the top of the screen.
fn roll_position<R: Rng + ?Sized>(rng: &mut R, screen: ScreenSize, extent: Vec2) -> Vec2 {
    let width = whole(screen.width);
    let height = whole(screen.height);
    let x = roll(rng, (SPAWN_MARGIN_X, width - SPAWN_MARGIN_X));
    let top = roll(rng, (height - SPAWN_DEPTH, height));
    Vec2::new(x, top - extent.y / 2.0)
}

/// Rolls a new enemy: random column, top edge at the top of the screen, and
/// a downward speed of 5 to 10 units per frame.
pub fn roll_enemy<R: Rng + ?Sized>(
    rng: &mut R,
    screen: ScreenSize,
    extents: &SpriteExtents,
) -> SpawnRequest {
    let kind = EntityKind::Enemy;
    let extent = extents.extent_for(kind);
    let position = roll_position(rng, screen, extent);
    let velocity = Vec2::new(0.0, roll(rng, ENEMY_SPEED_RANGE));
    SpawnRequest {
        kind,
        position,
        velocity,
        extent,
    }
}

/// Rolls a new cloud: random scale in `1..=3`, placed like an enemy, drifting
/// down at 2 to 5 units per frame.
pub fn roll_cloud<R: Rng + ?Sized>(
    rng: &mut R,
    screen: ScreenSize,
    extents: &SpriteExtents,
) -> SpawnRequest {
    let (low, high) = CLOUD_SCALE_RANGE;
    let kind = EntityKind::Cloud {
        scale: rng.gen_range(low..=high),
    };
    let extent = extents.extent_for(kind);
    let position = roll_position(rng, screen, extent);
    let velocity = Vec2::new(0.0, roll(rng, CLOUD_SPEED_RANGE));
    SpawnRequest {
        kind,
        position,
        velocity,
        extent,
    }
}

/// Two independent fixed-rate spawn timers.
#[derive(Debug, Clone)]
pub struct Spawner {
    enemy_timer: Timer,
    cloud_timer: Timer,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(ENEMY_SPAWN_INTERVAL, CLOUD_SPAWN_INTERVAL)
    }
}

impl Spawner {
    /// Creates a spawner with the given intervals.
    #[must_use]
    pub fn new(enemy_interval: Duration, cloud_interval: Duration) -> Self {
        Self {
            enemy_timer: Timer::new(enemy_interval, TimerMode::Repeating),
            cloud_timer: Timer::new(cloud_interval, TimerMode::Repeating),
        }
    }

    /// Advances both timers by `delta` and spawns one entity per completed
    /// interval, enemies first. Returns the ids of the new entities.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        delta: Duration,
        screen: ScreenSize,
        extents: &SpriteExtents,
        entities: &mut EntityCollection,
        rng: &mut R,
    ) -> Vec<EntityId> {
        let enemies = self.enemy_timer.tick(delta).times_finished_this_tick();
        let clouds = self.cloud_timer.tick(delta).times_finished_this_tick();

        let mut spawned = Vec::new();
        for _ in 0..enemies {
            spawned.push(roll_enemy(rng, screen, extents).insert_into(entities));
        }
        for _ in 0..clouds {
            spawned.push(roll_cloud(rng, screen, extents).insert_into(entities));
        }
        if !spawned.is_empty() {
            debug!("spawned {enemies} enemies and {clouds} clouds");
        }
        spawned
    }
}
