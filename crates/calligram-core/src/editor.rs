//! The editor facade: one object owning the scene, the background, the
//! viewport and the interaction state, exposing the command surface a
//! host UI drives.

use crate::background::{Background, ShapeKind};
use crate::handles::HandleSet;
use crate::interaction::{InteractionController, PointerOutcome, PointerState};
use crate::item::{ItemId, StylePatch, TextItem, TextStyle};
use crate::scene::Scene;
use crate::viewport::Viewport;
use kurbo::{Point, Size};

/// Observer invoked whenever the selection changes. Receives the newly
/// selected item, or `None` when the selection was cleared.
pub type SelectionObserver = Box<dyn FnMut(Option<&TextItem>)>;

/// Owns all editor state and routes commands and pointer events to it.
///
/// Handle geometry is cached and recomputed after every mutation, so a
/// host can hit-test and draw handles without recomputing bounds itself.
pub struct Editor {
    scene: Scene,
    background: Background,
    viewport: Viewport,
    controller: InteractionController,
    handles: Option<HandleSet>,
    on_selection_change: Option<SelectionObserver>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            background: Background::default(),
            viewport: Viewport::identity(),
            controller: InteractionController::new(),
            handles: None,
            on_selection_change: None,
        }
    }

    /// Start from an existing background choice, e.g. restored from a
    /// saved document.
    pub fn with_background(background: Background) -> Self {
        let mut editor = Self::new();
        editor.background = background;
        editor
    }

    /// Register the selection observer. Replaces any previous observer.
    pub fn set_selection_observer(&mut self, observer: SelectionObserver) {
        self.on_selection_change = Some(observer);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current handle geometry for the selected item, if any.
    pub fn handles(&self) -> Option<&HandleSet> {
        self.handles.as_ref()
    }

    pub fn pointer_state(&self) -> PointerState {
        self.controller.state()
    }

    // Commands

    /// Add a new item at the canvas center and select it.
    pub fn add_text_item(&mut self, style: TextStyle) -> ItemId {
        let id = self.scene.add_item(style);
        self.after_mutation(true);
        id
    }

    /// Apply a partial style update to the selected item. Does nothing
    /// when nothing is selected.
    pub fn update_selected(&mut self, patch: &StylePatch) {
        self.scene.update_selected(patch);
        self.after_mutation(false);
    }

    /// Remove an item. Clears the selection (and notifies) when the
    /// removed item was selected.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let was_selected = self.scene.selected() == Some(id);
        let removed = self.scene.delete_item(id);
        self.after_mutation(removed && was_selected);
        removed
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.scene.selected() {
            Some(id) => self.delete_item(id),
            None => false,
        }
    }

    /// Clone an item with a small offset and select the clone.
    pub fn duplicate_item(&mut self, id: ItemId) -> Option<ItemId> {
        let clone = self.scene.duplicate_item(id);
        self.after_mutation(clone.is_some());
        clone
    }

    pub fn duplicate_selected(&mut self) -> Option<ItemId> {
        match self.scene.selected() {
            Some(id) => self.duplicate_item(id),
            None => None,
        }
    }

    /// Remove every item. Notifies with `None` when something was
    /// selected beforehand.
    pub fn reset(&mut self) {
        let had_selection = self.scene.selected().is_some();
        self.scene.reset();
        self.after_mutation(had_selection);
    }

    pub fn select(&mut self, id: ItemId) {
        if self.scene.select(id) {
            self.after_mutation(true);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.scene.clear_selection() {
            self.after_mutation(true);
        }
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.background.shape = shape;
    }

    pub fn set_shape_color(&mut self, color: impl Into<String>) {
        self.background.color = color.into();
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Fit the fixed-size canvas into a host surface of the given size.
    pub fn resize_surface(&mut self, size: Size) {
        self.viewport = Viewport::fit(size);
        self.refresh_handles();
    }

    // Pointer events

    pub fn pointer_down(&mut self, screen_point: Point) {
        let outcome = self.controller.pointer_down(
            &mut self.scene,
            &self.viewport,
            self.handles.as_ref(),
            screen_point,
        );
        self.apply_outcome(outcome);
    }

    pub fn pointer_move(&mut self, screen_point: Point) {
        let outcome = self
            .controller
            .pointer_move(&mut self.scene, &self.viewport, screen_point);
        self.apply_outcome(outcome);
    }

    pub fn pointer_up(&mut self) {
        let outcome = self.controller.pointer_up();
        self.apply_outcome(outcome);
    }

    pub fn pointer_leave(&mut self) {
        let outcome = self.controller.pointer_leave();
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: PointerOutcome) {
        // Handles are derived state: recompute from the post-event scene
        // before the observer runs, so it sees consistent geometry.
        if outcome.scene_changed || outcome.selection_changed {
            self.refresh_handles();
        }
        if outcome.selection_changed {
            self.notify_selection();
        }
    }

    fn after_mutation(&mut self, selection_changed: bool) {
        self.refresh_handles();
        if selection_changed {
            self.notify_selection();
        }
    }

    fn refresh_handles(&mut self) {
        self.handles = self
            .scene
            .selected_item()
            .map(|item| HandleSet::for_item(item, &self.viewport));
    }

    fn notify_selection(&mut self) {
        if let Some(observer) = self.on_selection_change.as_mut() {
            observer(self.scene.selected_item());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Effect;
    use crate::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every observer call as the selected item's text, or None.
    fn recording_editor() -> (Editor, Rc<RefCell<Vec<Option<String>>>>) {
        let mut editor = Editor::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        editor.set_selection_observer(Box::new(move |item| {
            sink.borrow_mut().push(item.map(|i| i.text.clone()));
        }));
        (editor, log)
    }

    fn style(text: &str) -> TextStyle {
        TextStyle {
            text: text.to_string(),
            ..TextStyle::default()
        }
    }

    #[test]
    fn test_add_notifies_and_caches_handles() {
        let (mut editor, log) = recording_editor();
        let id = editor.add_text_item(style("Joy"));
        assert_eq!(editor.scene().selected(), Some(id));
        assert_eq!(log.borrow().as_slice(), &[Some("Joy".to_string())]);
        assert!(editor.handles().is_some());
    }

    #[test]
    fn test_update_selected_keeps_handles_fresh() {
        let (mut editor, _log) = recording_editor();
        editor.add_text_item(style("Joy"));
        let before = editor.handles().unwrap().resize;
        editor.update_selected(&StylePatch {
            text: Some("A much longer line".to_string()),
            ..StylePatch::default()
        });
        let after = editor.handles().unwrap().resize;
        assert!(after.x > before.x);
    }

    #[test]
    fn test_delete_selected_notifies_none() {
        let (mut editor, log) = recording_editor();
        editor.add_text_item(style("Joy"));
        assert!(editor.delete_selected());
        assert_eq!(
            log.borrow().as_slice(),
            &[Some("Joy".to_string()), None]
        );
        assert!(editor.handles().is_none());
    }

    #[test]
    fn test_delete_unselected_item_is_silent() {
        let (mut editor, log) = recording_editor();
        let first = editor.add_text_item(style("first"));
        editor.add_text_item(style("second"));
        log.borrow_mut().clear();

        assert!(editor.delete_item(first));
        assert!(log.borrow().is_empty());
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_duplicate_notifies_with_clone() {
        let (mut editor, log) = recording_editor();
        editor.add_text_item(style("Joy"));
        let clone = editor.duplicate_selected().unwrap();
        assert_eq!(editor.scene().selected(), Some(clone));
        assert_eq!(log.borrow().last().unwrap(), &Some("Joy".to_string()));
    }

    #[test]
    fn test_reset_notifies_only_with_selection() {
        let (mut editor, log) = recording_editor();
        editor.reset();
        assert!(log.borrow().is_empty());

        editor.add_text_item(style("Joy"));
        log.borrow_mut().clear();
        editor.reset();
        assert_eq!(log.borrow().as_slice(), &[None]);
        assert!(editor.scene().is_empty());
    }

    #[test]
    fn test_pointer_reselect_fires_observer() {
        let (mut editor, log) = recording_editor();
        editor.add_text_item(style("Joy"));
        log.borrow_mut().clear();

        let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        editor.pointer_down(center);
        editor.pointer_up();
        // Re-selecting the already-selected item still notifies.
        assert_eq!(log.borrow().as_slice(), &[Some("Joy".to_string())]);

        editor.pointer_down(Point::new(2.0, 2.0));
        assert_eq!(log.borrow().last().unwrap(), &None);
    }

    #[test]
    fn test_delete_handle_via_pointer() {
        let (mut editor, log) = recording_editor();
        editor.add_text_item(style("Joy"));
        log.borrow_mut().clear();

        let delete = editor.handles().unwrap().delete;
        editor.pointer_down(delete);
        assert!(editor.scene().is_empty());
        assert_eq!(log.borrow().as_slice(), &[None]);
        assert!(editor.handles().is_none());
    }

    #[test]
    fn test_drag_moves_handles_with_item() {
        let (mut editor, _log) = recording_editor();
        editor.add_text_item(style("Joy"));
        let before = editor.handles().unwrap().rotate;

        let center = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
        editor.pointer_down(center);
        editor.pointer_move(center + kurbo::Vec2::new(50.0, 0.0));
        let after = editor.handles().unwrap().rotate;
        assert!((after.x - before.x - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_background_commands() {
        let mut editor = Editor::new();
        editor.set_shape(ShapeKind::Coin);
        editor.set_shape_color("#112233");
        assert_eq!(editor.background().shape, ShapeKind::Coin);
        assert_eq!(editor.background().color, "#112233");
    }

    #[test]
    fn test_surface_fit_scales_pointer_input() {
        let mut editor = Editor::new();
        editor.add_text_item(TextStyle {
            text: "Joy".to_string(),
            effect: Effect::Curve,
            ..TextStyle::default()
        });
        editor.resize_surface(Size::new(600.0, 400.0));
        assert!((editor.viewport().scale - 0.5).abs() < 1e-9);

        // The item sits at the scene center; its screen position halves.
        let screen_center = editor
            .viewport()
            .scene_to_screen(Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0));
        editor.pointer_down(screen_center);
        assert!(matches!(
            editor.pointer_state(),
            PointerState::Dragging { .. }
        ));
    }
}
