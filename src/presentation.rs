//! Presentation layer: camera, background, and sprites mirroring the game
//! state.
//!
//! `PresentationPlugin` is a passive observer. [`GameState`] is the only
//! source of truth; every frame the draw step spawns a sprite for each new
//! entity, moves existing sprites to their entity's position, and despawns
//! sprites whose entity was removed during the same frame.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use hashbrown::HashMap;

use crate::assets::{CLOUD_IMAGE, ENEMY_IMAGE, PLAYER_IMAGE};
use crate::entity::{EntityId, EntityKind, GameEntity};
use crate::plugin::FrameSet;
use crate::state::{GameState, ScreenSize};

/// Window background colour.
pub const SKY_BLUE: Color = Color::srgb(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);

/// Links a sprite entity to the game entity it draws.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteLink(pub EntityId);

/// Image handles for the three sprite kinds.
#[derive(Resource, Debug, Clone)]
pub struct SpriteHandles {
    player: Handle<Image>,
    enemy: Handle<Image>,
    cloud: Handle<Image>,
}

impl SpriteHandles {
    fn for_kind(&self, kind: EntityKind) -> Handle<Image> {
        match kind {
            EntityKind::Player => self.player.clone(),
            EntityKind::Enemy => self.enemy.clone(),
            EntityKind::Cloud { .. } => self.cloud.clone(),
        }
    }
}

/// Sprite entity currently drawing each game entity.
#[derive(Resource, Debug, Default)]
pub struct SpriteIndex(HashMap<EntityId, Entity>);

impl SpriteIndex {
    /// Number of mirrored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is mirrored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Draw order: clouds at the back, the player in front.
const fn layer(kind: EntityKind) -> f32 {
    match kind {
        EntityKind::Cloud { .. } => 0.0,
        EntityKind::Enemy => 1.0,
        EntityKind::Player => 2.0,
    }
}

/// Converts a game entity's bottom-left-origin position into a transform for
/// the centred 2D camera. Enemies are turned a quarter turn.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use sky_shooter::entity::{EntityId, EntityKind, GameEntity};
/// use sky_shooter::presentation::sprite_transform;
/// use sky_shooter::state::ScreenSize;
///
/// let player = GameEntity {
///     id: EntityId(0),
///     kind: EntityKind::Player,
///     position: Vec2::new(400.0, 300.0),
///     velocity: Vec2::ZERO,
///     extent: Vec2::splat(48.0),
/// };
/// let screen = ScreenSize { width: 800.0, height: 600.0 };
/// let transform = sprite_transform(&player, screen);
/// assert_eq!(transform.translation.truncate(), Vec2::ZERO);
/// ```
#[must_use]
pub fn sprite_transform(entity: &GameEntity, screen: ScreenSize) -> Transform {
    let translation = Vec3::new(
        entity.position.x - screen.width / 2.0,
        entity.position.y - screen.height / 2.0,
        layer(entity.kind),
    );
    let transform = Transform::from_translation(translation);
    match entity.kind {
        EntityKind::Enemy => transform.with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
        EntityKind::Player | EntityKind::Cloud { .. } => transform,
    }
}

const fn sprite_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Player => "Player",
        EntityKind::Enemy => "Enemy",
        EntityKind::Cloud { .. } => "Cloud",
    }
}

/// Draw step: brings the sprite entities in line with the game state.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn mirror_sprites_system(
    mut commands: Commands,
    state: Res<GameState>,
    handles: Res<SpriteHandles>,
    mut index: ResMut<SpriteIndex>,
    mut sprites: Query<&mut Transform, With<SpriteLink>>,
) {
    let screen = state.screen();
    let entities = state.entities();

    index.0.retain(|&id, &mut sprite| {
        let alive = entities.contains(id);
        if !alive {
            commands.entity(sprite).despawn();
        }
        alive
    });

    for entity in entities.iter() {
        let transform = sprite_transform(entity, screen);
        if let Some(&sprite) = index.0.get(&entity.id) {
            if let Ok(mut current) = sprites.get_mut(sprite) {
                *current = transform;
            }
            continue;
        }
        let sprite = commands
            .spawn((
                Sprite {
                    image: handles.for_kind(entity.kind),
                    custom_size: Some(state.extents().image_size(entity.kind)),
                    ..default()
                },
                transform,
                SpriteLink(entity.id),
                Name::new(sprite_name(entity.kind)),
            ))
            .id();
        index.0.insert(entity.id, sprite);
    }
}

fn load_sprite_handles(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SpriteHandles {
        player: asset_server.load(PLAYER_IMAGE),
        enemy: asset_server.load(ENEMY_IMAGE),
        cloud: asset_server.load(CLOUD_IMAGE),
    });
}

/// Spawns the presentation camera at startup if no camera exists.
fn camera_setup(mut commands: Commands, cameras: Query<&Camera2d>) {
    if cameras.is_empty() {
        commands.spawn((Camera2d, Name::new("PresentationCamera")));
    }
}

/// Plugin owning the camera, the background colour, and sprite mirroring.
///
/// Add it after [`ShooterPlugin`](crate::ShooterPlugin); the mirroring system
/// runs in [`FrameSet::Draw`].
#[derive(Debug, Default)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_BLUE));
        app.init_resource::<SpriteIndex>();
        app.add_systems(Startup, (camera_setup, load_sprite_handles));
        app.add_systems(
            Update,
            mirror_sprites_system
                .in_set(FrameSet::Draw)
                .run_if(resource_exists::<SpriteHandles>.and(resource_exists::<GameState>)),
        );
    }
}
