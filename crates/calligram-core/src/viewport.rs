//! Viewport: screen/scene coordinate conversion.
//!
//! The scene lives in a fixed 1200x800 logical coordinate system; the
//! viewport maps it onto whatever on-screen rectangle the surrounding UI
//! gives the canvas, with uniform scaling and centered letterboxing.

use crate::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Uniform scale plus offset mapping scene coordinates to screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Translation applied after scaling, in screen units.
    pub offset: Vec2,
    /// Uniform scene-to-screen scale factor.
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}

impl Viewport {
    /// Identity mapping: screen coordinates equal scene coordinates.
    pub fn identity() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Fit the full canvas into an on-screen rectangle of the given size,
    /// preserving aspect ratio and centering the letterboxed result.
    pub fn fit(screen: Size) -> Self {
        let width = screen.width.max(1.0);
        let height = screen.height.max(1.0);
        let scale = (width / CANVAS_WIDTH).min(height / CANVAS_HEIGHT);
        let offset = Vec2::new(
            (width - CANVAS_WIDTH * scale) / 2.0,
            (height - CANVAS_HEIGHT * scale) / 2.0,
        );
        Self { offset, scale }
    }

    /// The scene-to-screen affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// The screen-to-scene affine transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset)
    }

    /// Convert a screen point to scene coordinates.
    pub fn screen_to_scene(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a scene point to screen coordinates.
    pub fn scene_to_screen(&self, scene_point: Point) -> Point {
        self.transform() * scene_point
    }

    /// Convert a screen-space delta to a scene-space delta. Pure scaling;
    /// the offset cancels out of differences.
    pub fn screen_delta_to_scene(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }
}
