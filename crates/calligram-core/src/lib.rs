//! Calligram Core Library
//!
//! Platform-agnostic scene model and interaction logic for the Calligram
//! text-over-shape editor.

pub mod background;
pub mod editor;
pub mod effect;
pub mod handles;
pub mod interaction;
pub mod item;
pub mod scene;
pub mod viewport;

pub use background::{Background, ShapeKind};
pub use editor::{Editor, SelectionObserver};
pub use effect::{baseline_path, MIN_STRENGTH, PATH_WIDTH};
pub use handles::{HandleKind, HandleSet, HANDLE_SIZE};
pub use interaction::{InteractionController, PointerOutcome, PointerState, MIN_INTERACTIVE_SCALE};
pub use item::{Effect, ItemId, StylePatch, TextItem, TextStyle};
pub use scene::{Scene, CANVAS_HEIGHT, CANVAS_WIDTH, DUPLICATE_OFFSET};
pub use viewport::Viewport;
