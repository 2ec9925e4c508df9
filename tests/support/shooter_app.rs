//! Headless app builder shared by plugin integration tests.

use bevy::input::keyboard::KeyCode;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use sky_shooter::{GameEntity, GameState, ShooterPlugin, ShooterSettings, SpawnRng};

/// Seed used for every headless app so spawns are reproducible.
pub const TEST_SEED: u64 = 0x5eed_cafe;

/// Builds an app with `MinimalPlugins`, a seeded spawn RNG, the given
/// settings, and `ShooterPlugin`.
pub fn shooter_app(settings: ShooterSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(settings);
    app.insert_resource(SpawnRng::seeded(TEST_SEED));
    app.add_plugins(ShooterPlugin);
    app
}

/// Presses `key` for exactly one frame.
pub fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    frame(app);
}

/// Releases `key` and runs one frame.
pub fn lift(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
    frame(app);
}

/// Runs one frame, then clears this frame's just-pressed/released keys the way
/// bevy's input plugin would at the start of the next one.
pub fn frame(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

/// Borrows the game state.
pub fn state(app: &App) -> &GameState {
    app.world().resource::<GameState>()
}

/// Copies the player entity out of the game state.
pub fn player(app: &App) -> GameEntity {
    *state(app).player().expect("player is always present")
}
