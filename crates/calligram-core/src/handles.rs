//! Selection handles: the four interactive control points around the
//! selected item.
//!
//! A [`HandleSet`] is a pure projection of the selected item's local
//! bounding box through its transform and the viewport transform. It is
//! recomputed after every geometry-affecting change and never persisted.

use crate::item::TextItem;
use crate::viewport::Viewport;
use kurbo::Point;

/// Edge length of a handle's screen-space hit square, in pixels.
pub const HANDLE_SIZE: f64 = 32.0;

/// The kind of handle, by the action it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Deletes the selected item. Top-left corner.
    Delete,
    /// Starts a rotate drag. Top-right corner.
    Rotate,
    /// Starts a resize drag. Bottom-right corner.
    Resize,
    /// Clones the selected item. Bottom-left corner.
    Duplicate,
}

/// Screen-space positions of the four handles for the selected item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    pub delete: Point,
    pub rotate: Point,
    pub resize: Point,
    pub duplicate: Point,
}

impl HandleSet {
    /// Project an item's local bounding-box corners into screen space.
    pub fn for_item(item: &TextItem, viewport: &Viewport) -> Self {
        let bounds = item.local_bounds();
        let to_screen = viewport.transform() * item.transform();
        Self {
            delete: to_screen * Point::new(bounds.x0, bounds.y0),
            rotate: to_screen * Point::new(bounds.x1, bounds.y0),
            duplicate: to_screen * Point::new(bounds.x0, bounds.y1),
            resize: to_screen * Point::new(bounds.x1, bounds.y1),
        }
    }

    /// The screen position of a handle.
    pub fn position(&self, kind: HandleKind) -> Point {
        match kind {
            HandleKind::Delete => self.delete,
            HandleKind::Rotate => self.rotate,
            HandleKind::Resize => self.resize,
            HandleKind::Duplicate => self.duplicate,
        }
    }

    /// Hit-test a screen point against the fixed-size handle squares.
    pub fn hit_test(&self, screen_point: Point) -> Option<HandleKind> {
        const KINDS: [HandleKind; 4] = [
            HandleKind::Delete,
            HandleKind::Rotate,
            HandleKind::Resize,
            HandleKind::Duplicate,
        ];
        let half = HANDLE_SIZE / 2.0;
        KINDS.into_iter().find(|&kind| {
            let pos = self.position(kind);
            (screen_point.x - pos.x).abs() <= half && (screen_point.y - pos.y).abs() <= half
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, TextStyle};
    use kurbo::Size;

    fn item_at(x: f64, y: f64) -> TextItem {
        let mut item = TextItem::new(
            ItemId(0),
            TextStyle {
                text: "Hello".to_string(),
                ..TextStyle::default()
            },
            Point::new(x, y),
        );
        item.scale = 1.0;
        item
    }

    #[test]
    fn test_corner_assignment() {
        let item = item_at(600.0, 400.0);
        let handles = HandleSet::for_item(&item, &Viewport::identity());

        // delete=TL, rotate=TR, duplicate=BL, resize=BR
        assert!(handles.delete.x < handles.rotate.x);
        assert!((handles.delete.y - handles.rotate.y).abs() < 1e-9);
        assert!(handles.duplicate.y > handles.delete.y);
        assert!(handles.resize.x > handles.duplicate.x);

        // Centered around the item's screen position.
        let mid_x = (handles.delete.x + handles.resize.x) / 2.0;
        let mid_y = (handles.delete.y + handles.resize.y) / 2.0;
        assert!((mid_x - 600.0).abs() < 1e-9);
        assert!((mid_y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_follows_viewport() {
        let item = item_at(600.0, 400.0);
        let viewport = Viewport::fit(Size::new(600.0, 400.0));
        let handles = HandleSet::for_item(&item, &viewport);
        let identity = HandleSet::for_item(&item, &Viewport::identity());
        // Half-size viewport halves every screen position.
        assert!((handles.delete.x - identity.delete.x / 2.0).abs() < 1e-9);
        assert!((handles.resize.y - identity.resize.y / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_moves_handles() {
        let mut item = item_at(600.0, 400.0);
        let before = HandleSet::for_item(&item, &Viewport::identity());
        item.rotate = 45.0;
        let after = HandleSet::for_item(&item, &Viewport::identity());
        assert_ne!(before, after);
    }

    #[test]
    fn test_hit_test_square() {
        let item = item_at(600.0, 400.0);
        let handles = HandleSet::for_item(&item, &Viewport::identity());

        assert_eq!(handles.hit_test(handles.delete), Some(HandleKind::Delete));
        let near = Point::new(
            handles.rotate.x + HANDLE_SIZE / 2.0 - 1.0,
            handles.rotate.y,
        );
        assert_eq!(handles.hit_test(near), Some(HandleKind::Rotate));
        let far = Point::new(handles.rotate.x + HANDLE_SIZE, handles.rotate.y);
        assert_eq!(handles.hit_test(far), None);
    }
}
