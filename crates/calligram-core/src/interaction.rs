//! Pointer-driven interaction: drag to move, handle-based rotate/resize,
//! delete and duplicate.
//!
//! The active interaction is a single tagged state so that "at most one
//! manipulation at a time" holds structurally. Selection is orthogonal: an
//! item stays selected while the controller is idle.

use crate::handles::{HandleKind, HandleSet};
use crate::item::ItemId;
use crate::scene::Scene;
use crate::viewport::Viewport;
use kurbo::{Point, Vec2};

/// Smallest scale reachable through an interactive resize drag.
/// Programmatic updates are not clamped.
pub const MIN_INTERACTIVE_SCALE: f64 = 0.5;

/// Scale change per horizontal screen pixel during a resize drag.
const RESIZE_SENSITIVITY: f64 = 0.01;

/// The active pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    /// No interaction in progress.
    #[default]
    Idle,
    /// Moving an item body; `last_screen` is the previous pointer position.
    Dragging { item: ItemId, last_screen: Point },
    /// Rotating the item around its center. Rotation is relative: the
    /// pointer angle at press time maps onto the rotation at press time.
    Rotating {
        item: ItemId,
        pointer_start_deg: f64,
        rotation_start: f64,
    },
    /// Scaling the item from the horizontal pointer travel since press.
    Resizing {
        item: ItemId,
        start_x: f64,
        start_scale: f64,
    },
}

/// What a pointer event changed, so the editor can refresh handles and
/// notify the selection observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    /// The selection changed (or was re-asserted) and the observer must be
    /// notified with the current selected item.
    pub selection_changed: bool,
    /// Item geometry or the item set changed; handles must be recomputed.
    pub scene_changed: bool,
}

impl PointerOutcome {
    const NONE: Self = Self {
        selection_changed: false,
        scene_changed: false,
    };

    const SCENE: Self = Self {
        selection_changed: false,
        scene_changed: true,
    };

    const SELECTION: Self = Self {
        selection_changed: true,
        scene_changed: false,
    };

    const BOTH: Self = Self {
        selection_changed: true,
        scene_changed: true,
    };
}

/// Pointer-event state machine driving all direct manipulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionController {
    state: PointerState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current interaction state.
    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Handle a pointer press at a screen-space position.
    ///
    /// Resolution order: handles of the selected item first, then item
    /// bodies front to back, then the empty background (which clears the
    /// selection).
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        viewport: &Viewport,
        handles: Option<&HandleSet>,
        screen_point: Point,
    ) -> PointerOutcome {
        if let (Some(handle_set), Some(selected)) = (handles, scene.selected()) {
            if let Some(kind) = handle_set.hit_test(screen_point) {
                return self.press_handle(scene, viewport, selected, kind, screen_point);
            }
        }

        let scene_point = viewport.screen_to_scene(screen_point);
        if let Some(id) = scene.item_at(scene_point) {
            scene.select(id);
            self.state = PointerState::Dragging {
                item: id,
                last_screen: screen_point,
            };
            // Notify even when re-selecting the same item, so the style
            // panel re-syncs on every grab.
            PointerOutcome::SELECTION
        } else {
            scene.clear_selection();
            self.state = PointerState::Idle;
            PointerOutcome::SELECTION
        }
    }

    fn press_handle(
        &mut self,
        scene: &mut Scene,
        viewport: &Viewport,
        selected: ItemId,
        kind: HandleKind,
        screen_point: Point,
    ) -> PointerOutcome {
        match kind {
            HandleKind::Delete => {
                // Unconditional: no confirmation step.
                scene.delete_item(selected);
                self.state = PointerState::Idle;
                PointerOutcome::BOTH
            }
            HandleKind::Duplicate => {
                scene.duplicate_item(selected);
                self.state = PointerState::Idle;
                PointerOutcome::BOTH
            }
            HandleKind::Rotate => {
                if let Some(item) = scene.item(selected) {
                    let center = viewport.scene_to_screen(item.center());
                    let pointer_start_deg = angle_deg(center, screen_point);
                    self.state = PointerState::Rotating {
                        item: selected,
                        pointer_start_deg,
                        rotation_start: item.rotate,
                    };
                }
                PointerOutcome::NONE
            }
            HandleKind::Resize => {
                if let Some(item) = scene.item(selected) {
                    self.state = PointerState::Resizing {
                        item: selected,
                        start_x: screen_point.x,
                        start_scale: item.scale,
                    };
                }
                PointerOutcome::NONE
            }
        }
    }

    /// Handle pointer movement while a drag, rotate or resize is active.
    ///
    /// Every item lookup tolerates the item having been removed since the
    /// press; a stale id simply does nothing.
    pub fn pointer_move(
        &mut self,
        scene: &mut Scene,
        viewport: &Viewport,
        screen_point: Point,
    ) -> PointerOutcome {
        match self.state {
            PointerState::Idle => PointerOutcome::NONE,
            PointerState::Dragging { item, last_screen } => {
                let Some(target) = scene.item_mut(item) else {
                    return PointerOutcome::NONE;
                };
                let screen_delta = screen_point - last_screen;
                let delta = viewport.screen_delta_to_scene(screen_delta);
                target.x += delta.x;
                target.y += delta.y;
                self.state = PointerState::Dragging {
                    item,
                    last_screen: screen_point,
                };
                PointerOutcome::SCENE
            }
            PointerState::Rotating {
                item,
                pointer_start_deg,
                rotation_start,
            } => {
                let Some(center) = scene.item(item).map(|i| i.center()) else {
                    return PointerOutcome::NONE;
                };
                let screen_center = viewport.scene_to_screen(center);
                let current_deg = angle_deg(screen_center, screen_point);
                if let Some(target) = scene.item_mut(item) {
                    target.rotate = current_deg - pointer_start_deg + rotation_start;
                }
                PointerOutcome::SCENE
            }
            PointerState::Resizing {
                item,
                start_x,
                start_scale,
            } => {
                let Some(target) = scene.item_mut(item) else {
                    return PointerOutcome::NONE;
                };
                let delta_x = screen_point.x - start_x;
                target.scale =
                    (start_scale + delta_x * RESIZE_SENSITIVITY).max(MIN_INTERACTIVE_SCALE);
                PointerOutcome::SCENE
            }
        }
    }

    /// Release the pointer: any active interaction ends, values stay as
    /// the last move left them.
    pub fn pointer_up(&mut self) -> PointerOutcome {
        self.state = PointerState::Idle;
        PointerOutcome::NONE
    }

    /// The pointer left the surface. Same cancellation as a release.
    pub fn pointer_leave(&mut self) -> PointerOutcome {
        self.pointer_up()
    }
}

/// Angle in degrees from `center` to `point`, screen-space atan2.
fn angle_deg(center: Point, point: Point) -> f64 {
    let v: Vec2 = point - center;
    v.y.atan2(v.x).to_degrees()
}
