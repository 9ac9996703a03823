//! Text-path generation for layout effects.
//!
//! Builds the parametric baseline curve that path-bound text follows. The
//! same path feeds both the renderer (as an SVG path) and handle-position
//! derivation (through its bounding box), so it must be deterministic:
//! identical inputs always produce identical geometry.

use crate::item::Effect;
use kurbo::{Arc, BezPath, Point, Vec2};
use std::f64::consts::PI;

/// Baseline length for the straight, wave and flag effects.
pub const PATH_WIDTH: f64 = 520.0;

/// Minimum effect strength, enforced at path-generation time regardless of
/// the stored item value.
pub const MIN_STRENGTH: f64 = 6.0;

/// Flattening tolerance when converting arcs to cubic segments.
const ARC_TOLERANCE: f64 = 0.1;

/// Build the baseline path for an effect, centered at the origin.
///
/// - `None`: a straight horizontal segment of length `width`.
/// - `Curve`: a semicircular arc of radius `max(6, strength)` from
///   `(-r, 0)` to `(r, 0)` through `(0, -r)`.
/// - `Wave`: quadratic segments across `width` with step 60; the control
///   point at each segment sits at `sin((x + width/2) / 80) * strength / 3`.
/// - `Flag`: as wave, but step 120 and amplitude
///   `sin((x + width/2) / 120) * strength / 2.2`.
pub fn baseline_path(effect: Effect, strength: f64, width: f64) -> BezPath {
    let s = strength.max(MIN_STRENGTH);
    match effect {
        Effect::None => straight(width),
        Effect::Curve => curve(s),
        Effect::Wave => sine(width, 60.0, |x| (x / 80.0).sin() * (s / 3.0)),
        Effect::Flag => sine(width, 120.0, |x| (x / 120.0).sin() * (s / 2.2)),
    }
}

fn straight(width: f64) -> BezPath {
    let half = width / 2.0;
    let mut path = BezPath::new();
    path.move_to(Point::new(-half, 0.0));
    path.line_to(Point::new(half, 0.0));
    path
}

fn curve(radius: f64) -> BezPath {
    // Start at angle pi = (-r, 0), sweep half a turn through (0, -r)
    // (y grows downward) to (r, 0).
    let arc = Arc::new(
        Point::ZERO,
        Vec2::new(radius, radius),
        PI,
        PI,
        0.0,
    );
    let mut path = BezPath::new();
    path.move_to(Point::new(-radius, 0.0));
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path
}

/// Quadratic segments across `width`, endpoints pinned to the baseline and
/// control points displaced by `amplitude` evaluated at the segment start.
fn sine(width: f64, step: f64, amplitude: impl Fn(f64) -> f64) -> BezPath {
    let half = width / 2.0;
    let mut path = BezPath::new();
    path.move_to(Point::new(-half, 0.0));
    let mut x = -half;
    while x < half {
        let cx = x + step / 2.0;
        let amp = amplitude(x + half);
        let nx = (x + step).min(half);
        path.quad_to(Point::new(cx, amp), Point::new(nx, 0.0));
        x += step;
    }
    path
}
