#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate for a small top-down arcade shooter.
//!
//! The player flies a craft at the bottom of the screen while missiles and
//! clouds fall from the top. [`GameState`] holds the whole simulation and is
//! driven once per frame by [`ShooterPlugin`]; with the `render` feature,
//! `PresentationPlugin` draws it.
pub mod assets;
pub mod collection;
pub mod constants;
pub mod entity;
pub mod input;
pub mod logging;
pub mod plugin;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod spawner;
pub mod state;
pub use constants::*;

// Re-export commonly used items
pub use assets::{AssetError, AssetManifest, SpriteExtents};
pub use collection::EntityCollection;
pub use entity::{Category, EntityId, EntityKind, GameEntity};
pub use input::{GameKey, KeyResponse};
pub use logging::init as init_logging;
pub use plugin::{CollisionPolicy, FrameSet, ShooterPlugin, ShooterSettings, SpawnRng};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use spawner::{SpawnRequest, Spawner};
pub use state::{FrameReport, GameState, ScreenSize};
