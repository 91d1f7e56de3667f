//! VaultInk Core Library
//!
//! Platform-agnostic ink data structures and logic for the question writing
//! surface: coordinate spaces, the stroke store with undo/redo and the
//! splitting eraser, tool state, and pointer-event routing.

pub mod eraser;
pub mod geometry;
pub mod input;
pub mod store;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use geometry::{DocumentPoint, NormalizedPoint, ViewPoint, Viewport};
pub use input::{InputDisposition, PointerEvent, PointerKind};
pub use store::{InkStore, StoreChange};
pub use stroke::{InkColor, Stroke, StrokeId};
pub use surface::{InkSurface, QUESTION_PADDING};
pub use tools::{ToolState, DEFAULT_STROKE_WIDTH, PALETTE};
