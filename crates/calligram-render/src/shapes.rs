//! The background shape catalog.
//!
//! Each shape is a fixed SVG path in canvas coordinates, sized to sit
//! roughly centered in the 1200x800 canvas.

use calligram_core::ShapeKind;

/// SVG path data for a background shape.
pub fn shape_path(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Dragees => {
            "M430 400 C430 340 510 280 600 280 C690 280 770 340 770 400 \
             C770 460 690 520 600 520 C510 520 430 460 430 400 Z"
        }
        ShapeKind::Cup => {
            "M480 280 C550 260 650 260 720 280 L730 470 \
             C720 520 670 560 600 560 C530 560 480 520 470 470 Z"
        }
        ShapeKind::Coin => "M600 270 A140 140 0 1 1 599.9 270 Z",
        ShapeKind::Lotus => {
            "M470 380 C470 320 520 280 600 280 C680 280 730 320 730 380 \
             C730 440 680 480 600 480 C520 480 470 440 470 380 Z"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_a_closed_path() {
        for kind in ShapeKind::all() {
            let path = shape_path(kind);
            assert!(path.starts_with('M'), "{kind:?}");
            assert!(path.ends_with('Z'), "{kind:?}");
        }
    }

    #[test]
    fn test_paths_are_distinct() {
        let all = ShapeKind::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(shape_path(*a), shape_path(*b));
            }
        }
    }
}
