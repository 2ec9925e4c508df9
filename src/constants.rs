//! Gameplay tuning constants shared by the spawner, the update step, and the
//! window setup.
//!
//! Speeds are expressed in units per frame: the update step adds velocity to
//! position once per frame without scaling by elapsed time.

use std::time::Duration;

/// Window title shown by the primary window.
pub const WINDOW_TITLE: &str = "Space Shooter";
/// Width of the playfield in world units (and window pixels).
pub const SCREEN_WIDTH: u32 = 800;
/// Height of the playfield in world units (and window pixels).
pub const SCREEN_HEIGHT: u32 = 600;

/// Speed applied to the player on a movement key press.
pub const PLAYER_SPEED: f32 = 5.0;
/// Distance between the bottom of the screen and the player's bottom edge at
/// startup.
pub const PLAYER_START_BOTTOM: f32 = 10.0;

/// Interval between enemy spawns.
pub const ENEMY_SPAWN_INTERVAL: Duration = Duration::from_millis(250);
/// Interval between cloud spawns.
pub const CLOUD_SPAWN_INTERVAL: Duration = Duration::from_secs(1);

/// Horizontal margin kept between a spawned centre and the screen edges.
pub const SPAWN_MARGIN_X: i32 = 10;
/// How far below the top of the screen a spawned top edge may start.
pub const SPAWN_DEPTH: i32 = 10;

/// Inclusive vertical speed range for enemies. Always downward.
pub const ENEMY_SPEED_RANGE: (i32, i32) = (-10, -5);
/// Inclusive vertical speed range for clouds. Always downward.
pub const CLOUD_SPEED_RANGE: (i32, i32) = (-5, -2);
/// Inclusive range for the cloud scale factor.
pub const CLOUD_SCALE_RANGE: (u8, u8) = (1, 3);

/// Enemies are dropped once their bottom edge reaches this height.
pub const ENEMY_REMOVAL_BOTTOM: f32 = 0.0;
/// Clouds are dropped once their bottom edge reaches `-height` plus this slack.
pub const CLOUD_REMOVAL_SLACK: f32 = 60.0;
