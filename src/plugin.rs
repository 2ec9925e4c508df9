//! Bevy plugin wiring the game state into the frame schedule.
//!
//! Per frame, in order: keyboard handling, the frame advance (spawn timers
//! then the update step), and the collision policy. The presentation layer
//! mirrors the state into sprites after these have run.

use bevy::input::keyboard::KeyCode;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::SpriteExtents;
use crate::input::{GameKey, KeyResponse};
use crate::state::{GameState, ScreenSize};

/// What happens when an enemy overlaps the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Overlaps are detectable through [`GameState::player_collisions`] but
    /// nothing reacts to them.
    #[default]
    Ignore,
    /// The first overlap closes the window.
    EndGame,
}

/// Runtime configuration read when [`ShooterPlugin`] is built.
///
/// Insert a customised value before adding the plugin to override the
/// defaults.
///
/// ```ignore
/// use bevy::prelude::*;
/// use sky_shooter::{CollisionPolicy, ShooterPlugin, ShooterSettings};
///
/// App::new()
///     .insert_resource(ShooterSettings {
///         collision_policy: CollisionPolicy::EndGame,
///         ..default()
///     })
///     .add_plugins(ShooterPlugin);
/// ```
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ShooterSettings {
    /// Playfield dimensions.
    pub screen: ScreenSize,
    /// Reaction to player/enemy overlap.
    pub collision_policy: CollisionPolicy,
}

/// Random source for spawn positions and speeds.
#[derive(Resource, Debug, Clone)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    /// Creates a reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// System sets making the per-frame order explicit.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard events are applied to the state.
    Input,
    /// Spawn timers and the update step run.
    Simulate,
    /// The state is mirrored into whatever draws it.
    Draw,
}

/// Applies this frame's key presses and releases.
///
/// Unbound keys are ignored. A quit press requests app exit. Presses landing
/// in the same frame are applied in [`GameKey`] order, so of two opposite
/// directions Down beats Up and Right beats Left.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<GameState>,
    mut exit: MessageWriter<AppExit>,
) {
    let mut pressed: Vec<GameKey> = keyboard
        .get_just_pressed()
        .filter_map(|&code| GameKey::from_key_code(code))
        .collect();
    pressed.sort_unstable();
    pressed.dedup();
    for key in pressed {
        if state.key_pressed(key) == KeyResponse::Quit {
            info!("quit requested");
            exit.write(AppExit::Success);
        }
    }
    for key in keyboard
        .get_just_released()
        .filter_map(|&code| GameKey::from_key_code(code))
    {
        state.key_released(key);
    }
}

/// Advances the spawn timers by the frame time and runs the update step.
///
/// Reads the real clock: the virtual clock clamps long frames and would drop
/// spawns.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_frame_system(
    time: Res<Time<Real>>,
    mut state: ResMut<GameState>,
    mut rng: ResMut<SpawnRng>,
) {
    if state.is_paused() {
        return;
    }
    state.advance_frame(time.delta(), &mut rng.0);
}

/// Reacts to player/enemy overlap according to [`CollisionPolicy`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn collision_policy_system(
    settings: Res<ShooterSettings>,
    state: Res<GameState>,
    mut exit: MessageWriter<AppExit>,
) {
    if settings.collision_policy == CollisionPolicy::Ignore || state.is_paused() {
        return;
    }
    let hits = state.player_collisions();
    if let Some(first) = hits.first() {
        info!("player hit by enemy {first}; ending game");
        exit.write(AppExit::Success);
    }
}

/// Plugin owning the game state and the per-frame simulation systems.
///
/// # Resources
///
/// - Reads [`ShooterSettings`] and [`SpriteExtents`] if present, falling back
///   to their defaults.
/// - Inserts [`GameState`] built from them, and [`SpawnRng`] unless one was
///   inserted beforehand.
/// - Ensures `ButtonInput<KeyCode>` exists so the plugin also runs without
///   bevy's input plugin.
#[derive(Debug, Default)]
pub struct ShooterPlugin;

impl Plugin for ShooterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShooterSettings>();
        app.init_resource::<SpriteExtents>();
        app.init_resource::<SpawnRng>();
        app.init_resource::<ButtonInput<KeyCode>>();

        let world = app.world();
        let screen = world.resource::<ShooterSettings>().screen;
        let extents = *world.resource::<SpriteExtents>();
        debug!("playfield {}x{}", screen.width, screen.height);
        app.insert_resource(GameState::new(screen, extents));

        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Simulate, FrameSet::Draw).chain(),
        );
        app.add_systems(
            Update,
            (
                keyboard_input_system.in_set(FrameSet::Input),
                (advance_frame_system, collision_policy_system)
                    .chain()
                    .in_set(FrameSet::Simulate),
            ),
        );
    }
}
