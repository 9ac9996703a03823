//! Scene: the ordered collection of text items plus selection state.

use crate::item::{ItemId, StylePatch, TextItem, TextStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Fixed logical canvas width in scene units.
pub const CANVAS_WIDTH: f64 = 1200.0;
/// Fixed logical canvas height in scene units.
pub const CANVAS_HEIGHT: f64 = 800.0;

/// Position offset applied to a duplicated item so the copy is visibly
/// distinct from its source.
pub const DUPLICATE_OFFSET: f64 = 30.0;

/// The in-memory scene for one editing session.
///
/// Items are kept in creation order, which is also paint order (later items
/// paint on top). The scene is the single source of truth for item state;
/// the renderer never stores any of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    items: Vec<TextItem>,
    selected: Option<ItemId>,
    /// Monotonic id source. Never reset, so deleted ids are never reused.
    next_id: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    fn issue_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a text item at the canvas center, append it and select it.
    ///
    /// Never fails; missing style fields are already defaulted by
    /// [`TextStyle`]'s deserialization.
    pub fn add_item(&mut self, style: TextStyle) -> ItemId {
        let id = self.issue_id();
        let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        self.items.push(TextItem::new(id, style, center));
        self.selected = Some(id);
        log::debug!("added {id}");
        id
    }

    /// Apply a partial style update to the selected item.
    ///
    /// A no-op when nothing is selected. Position, rotation and scale are
    /// never altered here; those are interaction-only.
    pub fn update_selected(&mut self, patch: &StylePatch) {
        if let Some(item) = self.selected_item_mut() {
            item.apply_patch(patch);
        }
    }

    /// Remove an item. Returns `true` if it existed.
    ///
    /// If the removed item was selected, the selection becomes none.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            if self.selected == Some(id) {
                self.selected = None;
            }
            log::debug!("deleted {id}");
        }
        removed
    }

    /// Clone an item with a fresh id, offset by `(+30, +30)`, and select
    /// the clone. Returns `None` if the source id no longer exists.
    pub fn duplicate_item(&mut self, id: ItemId) -> Option<ItemId> {
        let source = self.item(id)?.clone();
        let new_id = self.issue_id();
        let mut clone = source;
        clone.id = new_id;
        clone.x += DUPLICATE_OFFSET;
        clone.y += DUPLICATE_OFFSET;
        self.items.push(clone);
        self.selected = Some(new_id);
        log::debug!("duplicated {id} as {new_id}");
        Some(new_id)
    }

    /// Clear all items and the selection. The id counter keeps running.
    pub fn reset(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// Select an item. Returns `false` (and leaves the selection alone)
    /// if the id does not exist.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.item(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear the selection. Returns `true` if something was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// The currently selected id, if any.
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// The currently selected item. Tolerates a stale selection id by
    /// returning `None`.
    pub fn selected_item(&self) -> Option<&TextItem> {
        self.selected.and_then(|id| self.item(id))
    }

    /// Mutable access to the selected item.
    pub fn selected_item_mut(&mut self) -> Option<&mut TextItem> {
        let id = self.selected?;
        self.item_mut(id)
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&TextItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable lookup by id.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut TextItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Items in paint order (back to front).
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// Find the topmost item whose body contains a scene-space point.
    pub fn item_at(&self, scene_point: Point) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.hit_test(scene_point))
            .map(|item| item.id)
    }

    /// Number of items in the scene.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the scene has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
