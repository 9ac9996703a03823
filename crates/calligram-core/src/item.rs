//! Text item: a single placed, styled, transformable text overlay.

use crate::effect;
use kurbo::{Affine, Point, Rect, Shape, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for text items.
///
/// Ids are generated monotonically per scene and never reused, even after
/// the item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Text layout effect: binds the text to a generated curve instead of a
/// straight baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Straight baseline, text is not path-bound.
    #[default]
    None,
    /// Circular arc.
    Curve,
    /// Sine wave with short segments.
    Wave,
    /// Sine wave with long, shallow segments.
    Flag,
}

impl Effect {
    /// All selectable effects.
    pub fn all() -> &'static [Effect] {
        &[Effect::None, Effect::Curve, Effect::Wave, Effect::Flag]
    }
}

/// Style options for creating a new text item.
///
/// The external UI hands these over as a plain option object; every missing
/// field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Text content (empty renders as zero-width).
    pub text: String,
    /// Font size in canvas units.
    pub size: f64,
    /// Font family, passed through opaquely.
    pub family: String,
    /// Text color, any valid color string.
    pub color: String,
    /// Bold weight flag.
    pub bold: bool,
    /// Layout effect.
    pub effect: Effect,
    /// Effect intensity (only meaningful when `effect != None`).
    pub strength: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            size: 48.0,
            family: "Cairo, sans-serif".to_string(),
            color: "#000".to_string(),
            bold: false,
            effect: Effect::None,
            strength: 100.0,
        }
    }
}

/// Partial style update for the selected item.
///
/// Only the provided fields are applied; position, rotation and scale are
/// interaction-only and cannot be changed through a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub text: Option<String>,
    pub size: Option<f64>,
    pub family: Option<String>,
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub effect: Option<Effect>,
    pub strength: Option<f64>,
}

/// One placed text overlay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub id: ItemId,
    /// Text content.
    pub text: String,
    /// Font size in canvas units.
    pub size: f64,
    /// Font family identifier, opaque.
    pub family: String,
    /// Color value, opaque (hex or named).
    pub color: String,
    /// Bold weight flag.
    pub bold: bool,
    /// Layout effect.
    pub effect: Effect,
    /// Effect intensity; clamped to a minimum of 6 at render time only.
    pub strength: f64,
    /// Scene-space anchor x (center of item). Not clamped to the canvas.
    pub x: f64,
    /// Scene-space anchor y (center of item). Not clamped to the canvas.
    pub y: f64,
    /// Rotation in degrees, unbounded.
    pub rotate: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl TextItem {
    pub(crate) fn new(id: ItemId, style: TextStyle, position: Point) -> Self {
        Self {
            id,
            text: style.text,
            size: style.size,
            family: style.family,
            color: style.color,
            bold: style.bold,
            effect: style.effect,
            strength: style.strength,
            x: position.x,
            y: position.y,
            rotate: 0.0,
            scale: 1.0,
        }
    }

    /// Apply a partial style update.
    pub fn apply_patch(&mut self, patch: &StylePatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(family) = &patch.family {
            self.family = family.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(bold) = patch.bold {
            self.bold = bold;
        }
        if let Some(effect) = patch.effect {
            self.effect = effect;
        }
        if let Some(strength) = patch.strength {
            self.strength = strength;
        }
    }

    /// Scene-space center of the item.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The local-to-scene transform: translate, then rotate, then scale.
    pub fn transform(&self) -> Affine {
        Affine::translate(Vec2::new(self.x, self.y))
            * Affine::rotate(self.rotate.to_radians())
            * Affine::scale(self.scale)
    }

    /// Approximate width of the rendered text.
    ///
    /// Font-metric free: character count times an empirical per-weight
    /// width factor. Actual width depends on the font.
    fn approximate_width(&self) -> f64 {
        let char_width_factor = if self.bold { 0.60 } else { 0.55 };
        self.text.chars().count() as f64 * self.size * char_width_factor
    }

    /// Approximate bounding box of the rendered text in local coordinates,
    /// centered at the origin.
    ///
    /// For path-bound text the generated baseline path's bounding box is
    /// inflated by the font size to account for glyph extent above and
    /// below the baseline.
    pub fn local_bounds(&self) -> Rect {
        match self.effect {
            Effect::None => {
                let width = self.approximate_width().max(20.0);
                let height = self.size * 1.2;
                Rect::new(-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
            }
            _ => {
                let path =
                    effect::baseline_path(self.effect, self.strength, effect::PATH_WIDTH);
                let pad = self.size * 0.6;
                path.bounding_box().inflate(pad, pad)
            }
        }
    }

    /// Check whether a scene-space point hits this item's body.
    pub fn hit_test(&self, scene_point: Point) -> bool {
        if self.scale.abs() < f64::EPSILON {
            return false;
        }
        let local = self.transform().inverse() * scene_point;
        self.local_bounds().contains(local)
    }
}
