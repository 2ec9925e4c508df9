//! Sprite image locations and the extents measured from them.
//!
//! The three sprite images are checked once at startup, before any window is
//! created. A missing or undecodable image is fatal: [`AssetManifest::load_extents`]
//! returns an [`AssetError`] and the binary aborts.

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use glam::Vec2;
use log::debug;
use thiserror::Error;

use crate::entity::EntityKind;

/// Asset-relative path of the player craft image.
pub const PLAYER_IMAGE: &str = "images/jet.png";
/// Asset-relative path of the enemy missile image.
pub const ENEMY_IMAGE: &str = "images/missile.png";
/// Asset-relative path of the cloud image.
pub const CLOUD_IMAGE: &str = "images/cloud.png";

/// Directory name of the asset root, matching bevy's default asset folder.
pub const ASSET_DIR: &str = "assets";

/// Errors raised while checking sprite images.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The image file does not exist.
    #[error("sprite image not found: {}", path.display())]
    MissingFile {
        /// Full path that was checked.
        path: PathBuf,
    },
    /// The image exists but its header could not be decoded.
    #[error("sprite image {} could not be read", path.display())]
    Unreadable {
        /// Full path that was read.
        path: PathBuf,
        /// Decoder failure.
        #[source]
        source: image::ImageError,
    },
}

/// Unscaled image sizes of the three sprites.
///
/// Bounding extents for entities are derived from these: enemies are drawn a
/// quarter turn rotated, so their extent swaps width and height, and clouds
/// are multiplied by their scale factor.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SpriteExtents {
    /// Player image size.
    pub player: Vec2,
    /// Enemy image size before rotation.
    pub enemy: Vec2,
    /// Cloud image size at scale 1.
    pub cloud: Vec2,
}

impl Default for SpriteExtents {
    /// Sizes of the bundled images, used when running headless.
    fn default() -> Self {
        Self {
            player: Vec2::new(48.0, 48.0),
            enemy: Vec2::new(40.0, 12.0),
            cloud: Vec2::new(64.0, 32.0),
        }
    }
}

impl SpriteExtents {
    /// Returns the image size drawn for `kind`, before any rotation.
    #[must_use]
    pub fn image_size(&self, kind: EntityKind) -> Vec2 {
        match kind {
            EntityKind::Player => self.player,
            EntityKind::Enemy => self.enemy,
            EntityKind::Cloud { scale } => self.cloud * f32::from(scale),
        }
    }

    /// Returns the on-screen bounding extent for `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use sky_shooter::assets::SpriteExtents;
    /// use sky_shooter::entity::EntityKind;
    ///
    /// let extents = SpriteExtents {
    ///     player: Vec2::new(10.0, 20.0),
    ///     enemy: Vec2::new(30.0, 4.0),
    ///     cloud: Vec2::new(8.0, 6.0),
    /// };
    /// assert_eq!(extents.extent_for(EntityKind::Enemy), Vec2::new(4.0, 30.0));
    /// assert_eq!(extents.extent_for(EntityKind::Cloud { scale: 3 }), Vec2::new(24.0, 18.0));
    /// ```
    #[must_use]
    pub fn extent_for(&self, kind: EntityKind) -> Vec2 {
        let size = self.image_size(kind);
        match kind {
            EntityKind::Enemy => Vec2::new(size.y, size.x),
            EntityKind::Player | EntityKind::Cloud { .. } => size,
        }
    }
}

/// Where the sprite images live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    root: PathBuf,
}

impl AssetManifest {
    /// Creates a manifest rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locates the asset root the same way bevy's file reader does:
    /// `BEVY_ASSET_ROOT`, then `CARGO_MANIFEST_DIR`, then the directory of the
    /// running executable, each joined with [`ASSET_DIR`].
    #[must_use]
    pub fn discover() -> Self {
        let base = std::env::var_os("BEVY_ASSET_ROOT")
            .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
            .map(PathBuf::from)
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(Path::to_path_buf))
            })
            .unwrap_or_default();
        Self::new(base.join(ASSET_DIR))
    }

    /// Root directory holding the images.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads the dimensions of all three images.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::MissingFile`] if an image is absent and
    /// [`AssetError::Unreadable`] if one cannot be decoded.
    pub fn load_extents(&self) -> Result<SpriteExtents, AssetError> {
        Ok(SpriteExtents {
            player: self.measure(PLAYER_IMAGE)?,
            enemy: self.measure(ENEMY_IMAGE)?,
            cloud: self.measure(CLOUD_IMAGE)?,
        })
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "Sprite dimensions are far below f32's exact integer range."
    )]
    fn measure(&self, relative: &str) -> Result<Vec2, AssetError> {
        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(AssetError::MissingFile { path });
        }
        let (width, height) = image::image_dimensions(&path)
            .map_err(|source| AssetError::Unreadable {
                path: path.clone(),
                source,
            })?;
        debug!("{} is {width}x{height}", path.display());
        Ok(Vec2::new(width as f32, height as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    fn write_png(root: &Path, relative: &str, width: u32, height: u32) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create image directory");
        }
        image::RgbaImage::new(width, height)
            .save(&path)
            .expect("write test image");
    }

    #[fixture]
    fn asset_root() -> TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_png(dir.path(), PLAYER_IMAGE, 30, 20);
        write_png(dir.path(), ENEMY_IMAGE, 16, 4);
        write_png(dir.path(), CLOUD_IMAGE, 12, 6);
        dir
    }

    #[rstest]
    fn load_extents_reads_image_dimensions(asset_root: TempDir) {
        let extents = AssetManifest::new(asset_root.path())
            .load_extents()
            .expect("all images present");
        assert_eq!(extents.player, Vec2::new(30.0, 20.0));
        assert_eq!(extents.enemy, Vec2::new(16.0, 4.0));
        assert_eq!(extents.cloud, Vec2::new(12.0, 6.0));
    }

    #[rstest]
    #[case::player(PLAYER_IMAGE)]
    #[case::enemy(ENEMY_IMAGE)]
    #[case::cloud(CLOUD_IMAGE)]
    fn missing_image_is_reported(asset_root: TempDir, #[case] relative: &str) {
        fs::remove_file(asset_root.path().join(relative)).expect("remove image");
        let err = AssetManifest::new(asset_root.path())
            .load_extents()
            .expect_err("a missing image must fail");
        match &err {
            AssetError::MissingFile { path } => assert!(path.ends_with(relative)),
            AssetError::Unreadable { .. } => panic!("expected MissingFile, got {err:?}"),
        }
    }

    #[rstest]
    fn garbage_image_is_unreadable(asset_root: TempDir) {
        fs::write(asset_root.path().join(CLOUD_IMAGE), b"not a png").expect("overwrite image");
        let err = AssetManifest::new(asset_root.path())
            .load_extents()
            .expect_err("garbage must fail");
        assert!(matches!(err, AssetError::Unreadable { .. }), "got {err:?}");
    }

    #[test]
    fn extents_scale_clouds_and_rotate_enemies() {
        let extents = SpriteExtents::default();
        assert_eq!(extents.extent_for(EntityKind::Player), extents.player);
        assert_eq!(
            extents.extent_for(EntityKind::Enemy),
            Vec2::new(extents.enemy.y, extents.enemy.x)
        );
        assert_eq!(
            extents.extent_for(EntityKind::Cloud { scale: 2 }),
            extents.cloud * 2.0
        );
    }
}
