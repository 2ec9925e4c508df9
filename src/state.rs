//! The game state and the per-frame update step.
//!
//! [`GameState`] owns everything the window mutates: the entity collection,
//! the spawn timers, and the paused flag. The frame driver calls
//! [`GameState::advance_frame`] once per frame; key handlers mutate the
//! player's velocity between frames.

use std::time::Duration;

use bevy::prelude::Resource;
use glam::Vec2;
use log::{debug, info};
use rand::Rng;

use crate::assets::SpriteExtents;
use crate::collection::EntityCollection;
use crate::constants::{
    CLOUD_REMOVAL_SLACK, ENEMY_REMOVAL_BOTTOM, PLAYER_SPEED, PLAYER_START_BOTTOM, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use crate::entity::{Category, EntityId, EntityKind, GameEntity};
use crate::input::{GameKey, KeyResponse};
use crate::spawner::{SpawnRequest, Spawner};

/// Playfield dimensions, fixed when the window is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    /// Width in world units.
    pub width: f32,
    /// Height in world units.
    pub height: f32,
}

impl Default for ScreenSize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "Window dimensions are small whole numbers."
    )]
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH as f32,
            height: SCREEN_HEIGHT as f32,
        }
    }
}

/// What changed during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Entities created by the spawn timers.
    pub spawned: Vec<EntityId>,
    /// Entities dropped after leaving the screen.
    pub removed: Vec<EntityId>,
}

impl FrameReport {
    /// Returns `true` if nothing was added or removed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.spawned.is_empty() && self.removed.is_empty()
    }
}

/// Everything the game window owns and mutates.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    screen: ScreenSize,
    extents: SpriteExtents,
    entities: EntityCollection,
    spawner: Spawner,
    player: EntityId,
    paused: bool,
}

impl GameState {
    /// Creates a running game with the player centred horizontally just above
    /// the bottom of the screen.
    #[must_use]
    pub fn new(screen: ScreenSize, extents: SpriteExtents) -> Self {
        let mut entities = EntityCollection::new();
        let extent = extents.extent_for(EntityKind::Player);
        let position = Vec2::new(screen.width / 2.0, PLAYER_START_BOTTOM + extent.y / 2.0);
        let player = entities.insert(EntityKind::Player, position, Vec2::ZERO, extent);
        Self {
            screen,
            extents,
            entities,
            spawner: Spawner::default(),
            player,
            paused: false,
        }
    }

    /// Playfield dimensions.
    #[must_use]
    pub const fn screen(&self) -> ScreenSize {
        self.screen
    }

    /// Sprite sizes used for entity extents.
    #[must_use]
    pub const fn extents(&self) -> &SpriteExtents {
        &self.extents
    }

    /// All live entities.
    #[must_use]
    pub const fn entities(&self) -> &EntityCollection {
        &self.entities
    }

    /// Id of the player entity.
    #[must_use]
    pub const fn player_id(&self) -> EntityId {
        self.player
    }

    /// The player entity. Present for the whole lifetime of the state.
    #[must_use]
    pub fn player(&self) -> Option<&GameEntity> {
        self.entities.get(self.player)
    }

    fn player_mut(&mut self) -> Option<&mut GameEntity> {
        self.entities.get_mut(self.player)
    }

    /// Returns `true` while the update step is suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flips the paused flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    /// Inserts an already rolled entity.
    pub fn spawn(&mut self, request: SpawnRequest) -> EntityId {
        request.insert_into(&mut self.entities)
    }

    /// Handles a key press.
    ///
    /// Movement keys set the matching velocity component to a fixed speed;
    /// opposite keys overwrite each other. Pause toggles the paused flag. Quit
    /// asks the caller to close the window.
    pub fn key_pressed(&mut self, key: GameKey) -> KeyResponse {
        match key {
            GameKey::Quit => return KeyResponse::Quit,
            GameKey::Pause => {
                self.toggle_pause();
            }
            GameKey::Up | GameKey::Down | GameKey::Left | GameKey::Right => {
                if let Some(player) = self.player_mut() {
                    match key {
                        GameKey::Up => player.velocity.y = PLAYER_SPEED,
                        GameKey::Down => player.velocity.y = -PLAYER_SPEED,
                        GameKey::Left => player.velocity.x = -PLAYER_SPEED,
                        _ => player.velocity.x = PLAYER_SPEED,
                    }
                }
            }
        }
        KeyResponse::Continue
    }

    /// Handles a key release: releasing any vertical key zeroes vertical
    /// velocity and releasing any horizontal key zeroes horizontal velocity,
    /// regardless of whether the opposite key is still held.
    pub fn key_released(&mut self, key: GameKey) {
        let Some(player) = self.player_mut() else {
            return;
        };
        match key {
            GameKey::Up | GameKey::Down => player.velocity.y = 0.0,
            GameKey::Left | GameKey::Right => player.velocity.x = 0.0,
            GameKey::Quit | GameKey::Pause => {}
        }
    }

    /// Runs one frame: spawn timers first, then the update step.
    ///
    /// Does nothing at all while paused; the spawn timers do not advance
    /// either.
    pub fn advance_frame<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R) -> FrameReport {
        if self.paused {
            return FrameReport::default();
        }
        let spawned =
            self.spawner
                .tick(delta, self.screen, &self.extents, &mut self.entities, rng);
        let removed = self.update();
        let report = FrameReport { spawned, removed };
        if !report.is_quiet() {
            debug!(
                "frame: +{} -{} ({} live)",
                report.spawned.len(),
                report.removed.len(),
                self.entities.len()
            );
        }
        report
    }

    /// The update step: move everything, keep the player on screen, then drop
    /// entities that scrolled off. Skipped while paused. Returns the removed
    /// ids.
    pub fn update(&mut self) -> Vec<EntityId> {
        if self.paused {
            return Vec::new();
        }
        self.move_entities();
        self.clamp_player();
        self.remove_offscreen()
    }

    /// Adds one frame of velocity to every entity.
    pub fn move_entities(&mut self) {
        for entity in self.entities.iter_mut() {
            entity.step();
        }
    }

    /// Pulls the player back inside the screen, one edge at a time: top,
    /// right, bottom, then left.
    pub fn clamp_player(&mut self) {
        let ScreenSize { width, height } = self.screen;
        let Some(player) = self.player_mut() else {
            return;
        };
        if player.top() > height {
            player.set_top(height);
        }
        if player.right() > width {
            player.set_right(width);
        }
        if player.bottom() < 0.0 {
            player.set_bottom(0.0);
        }
        if player.left() < 0.0 {
            player.set_left(0.0);
        }
    }

    /// Ids of the enemies currently overlapping the player.
    ///
    /// Nothing in the frame step acts on this; the window decides what, if
    /// anything, a hit means.
    #[must_use]
    pub fn player_collisions(&self) -> Vec<EntityId> {
        let Some(player) = self.player() else {
            return Vec::new();
        };
        self.entities
            .in_category(Category::Enemy)
            .filter(|enemy| player.overlaps(enemy))
            .map(|enemy| enemy.id)
            .collect()
    }

    /// Drops enemies whose bottom edge reached the bottom of the screen and
    /// clouds whose bottom edge fell below `CLOUD_REMOVAL_SLACK - height`.
    pub fn remove_offscreen(&mut self) -> Vec<EntityId> {
        let mut removed = self.entities.remove_where(Category::Enemy, |enemy| {
            enemy.bottom() <= ENEMY_REMOVAL_BOTTOM
        });
        removed.extend(self.entities.remove_where(Category::Cloud, |cloud| {
            cloud.bottom() <= -cloud.extent.y + CLOUD_REMOVAL_SLACK
        }));
        removed
    }
}
