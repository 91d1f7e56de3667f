//! The interactive writing surface.
//!
//! Bridges raw pointer input and the scroll position to the ink store, and
//! keeps the smoothed preview path for the stroke currently being drawn.
//! All state here lives on the UI thread: redraw fan-out uses `Rc`, so the
//! surface is deliberately not `Send`. A multi-threaded host must marshal
//! commands onto the thread that owns it.

use crate::geometry::{DocumentPoint, Viewport};
use crate::input::{InputDisposition, PointerEvent, PointerKind};
use crate::store::InkStore;
use crate::stroke::{InkColor, Stroke};
use crate::tools::ToolState;
use kurbo::BezPath;
use std::rc::Rc;

/// Vertical padding above the question image, in pixels.
pub const QUESTION_PADDING: f64 = 44.0;

/// Minimum pointer travel, in pixels, before a move sample extends the
/// stroke. High-frequency stylus input floods the store with near-duplicate
/// points without this; the store itself has no distance guard.
const MIN_SAMPLE_DISTANCE: f64 = 2.0;

type RedrawListener = Rc<dyn Fn()>;

/// Interactive surface over one question document.
///
/// The host feeds it pointer events, scroll offsets, and viewport sizes;
/// it feeds the store and tells subscribers when the frame is stale. The
/// preview path is kept in document space and shifted by the live scroll
/// offset at draw time.
pub struct InkSurface {
    store: InkStore,
    viewport: Viewport,
    question_height: f64,
    preview: BezPath,
    last: Option<DocumentPoint>,
    redraw_listeners: Vec<RedrawListener>,
}

impl InkSurface {
    /// Create a surface for a question image of the given pixel height. The
    /// image region (plus [`QUESTION_PADDING`]) never accepts ink.
    pub fn new(question_height: f64) -> Self {
        Self {
            store: InkStore::new(),
            viewport: Viewport::default(),
            question_height,
            preview: BezPath::new(),
            last: None,
            redraw_listeners: Vec::new(),
        }
    }

    /// Subscribe to redraw requests. The listener fires for pointer-driven
    /// repaints, scroll and resize changes, and every store mutation
    /// (undo/redo/erase included), so the host repaints without polling.
    pub fn subscribe_redraw(&mut self, listener: impl Fn() + 'static) {
        let listener: RedrawListener = Rc::new(listener);
        let for_store = Rc::clone(&listener);
        self.store.subscribe(move |_| for_store());
        self.redraw_listeners.push(listener);
    }

    fn request_redraw(&self) {
        for listener in &self.redraw_listeners {
            listener();
        }
    }

    /* ---------- Host geometry ---------- */

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the canvas size. Stored ink is normalized, so it re-renders
    /// correctly at the new size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.size = kurbo::Size::new(width, height);
        self.request_redraw();
    }

    /// Update the scroll position. Must be called on every host scroll
    /// change so ink stays fixed to the document while scrolling.
    pub fn set_scroll_offset(&mut self, scroll_offset: f64) {
        self.viewport.scroll_offset = scroll_offset;
        self.request_redraw();
    }

    /* ---------- Pointer handling ---------- */

    /// Route one pointer event.
    ///
    /// Non-stylus input and input landing on the question image region pass
    /// through untouched so the host's scroll gestures keep working.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InputDisposition {
        if !event.kind().draws() {
            return InputDisposition::PassThrough;
        }

        let doc = self.viewport.to_document(event.position());

        // The question image region is display-only.
        if doc.y < self.question_height + QUESTION_PADDING {
            return InputDisposition::PassThrough;
        }

        match event {
            PointerEvent::Down { .. } => self.pointer_down(doc),
            PointerEvent::Move { .. } => self.pointer_move(doc),
            PointerEvent::Up { .. } | PointerEvent::Cancel { .. } => self.pointer_up(),
        }
    }

    fn pointer_down(&mut self, doc: DocumentPoint) -> InputDisposition {
        self.preview = BezPath::new();
        self.preview.move_to((doc.x, doc.y));
        self.last = Some(doc);
        self.store.start_stroke(doc);
        InputDisposition::Consumed
    }

    fn pointer_move(&mut self, doc: DocumentPoint) -> InputDisposition {
        if self.store.tool().is_eraser() {
            // Every sample erases; boundary quality depends on it.
            self.store.erase_at(doc, self.viewport.size);
            self.request_redraw();
            return InputDisposition::Consumed;
        }

        let Some(last) = self.last else {
            // Move without a preceding down on the writing area.
            return InputDisposition::Consumed;
        };

        let dx = (doc.x - last.x).abs();
        let dy = (doc.y - last.y).abs();
        if dx >= MIN_SAMPLE_DISTANCE || dy >= MIN_SAMPLE_DISTANCE {
            // Quadratic curve through the previous sample to the midpoint
            // keeps the live path from looking like a jagged polyline.
            let mid = ((doc.x + last.x) / 2.0, (doc.y + last.y) / 2.0);
            self.preview.quad_to((last.x, last.y), mid);
            self.last = Some(doc);
            self.store.add_point(doc);
            self.request_redraw();
        }
        InputDisposition::Consumed
    }

    fn pointer_up(&mut self) -> InputDisposition {
        self.store.end_stroke(self.viewport.size);
        self.preview = BezPath::new();
        self.last = None;
        self.request_redraw();
        InputDisposition::Consumed
    }

    /* ---------- Toolbar commands ---------- */

    pub fn undo(&mut self) {
        self.store.undo();
    }

    pub fn redo(&mut self) {
        self.store.redo();
    }

    pub fn set_color(&mut self, color: InkColor) {
        self.store.set_color(color);
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        self.store.set_eraser(enabled);
    }

    /* ---------- Access for rendering ---------- */

    pub fn tool(&self) -> ToolState {
        self.store.tool()
    }

    /// Committed strokes in z-order.
    pub fn strokes(&self) -> &[Stroke] {
        self.store.strokes()
    }

    /// The smoothed in-progress path, in document space. Empty when no
    /// stroke is being drawn.
    pub fn preview_path(&self) -> &BezPath {
        &self.preview
    }

    /// Height of the no-draw zone: question image plus padding.
    pub fn question_bottom(&self) -> f64 {
        self.question_height + QUESTION_PADDING
    }

    pub fn store(&self) -> &InkStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InkStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ViewPoint;
    use std::cell::Cell;

    const QUESTION_HEIGHT: f64 = 300.0;

    fn surface() -> InkSurface {
        let mut surface = InkSurface::new(QUESTION_HEIGHT);
        surface.set_viewport_size(400.0, 800.0);
        surface
    }

    fn pen(x: f64, y: f64) -> ViewPoint {
        ViewPoint::new(x, y)
    }

    fn draw_stroke(surface: &mut InkSurface, x: f64, y: f64) {
        surface.handle_pointer(PointerEvent::Down {
            position: pen(x, y),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: pen(x, y + 40.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Up {
            position: pen(x, y + 40.0),
            kind: PointerKind::Pen,
        });
    }

    #[test]
    fn test_non_pen_input_passes_through() {
        let mut surface = surface();
        for kind in [PointerKind::Finger, PointerKind::Mouse, PointerKind::Unknown] {
            let disposition = surface.handle_pointer(PointerEvent::Down {
                position: pen(50.0, 500.0),
                kind,
            });
            assert_eq!(disposition, InputDisposition::PassThrough);
        }
        assert!(surface.store().draft_points().is_empty());
    }

    #[test]
    fn test_question_region_passes_through() {
        let mut surface = surface();
        let disposition = surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, QUESTION_HEIGHT + QUESTION_PADDING - 1.0),
            kind: PointerKind::Pen,
        });
        assert_eq!(disposition, InputDisposition::PassThrough);
        assert!(surface.store().draft_points().is_empty());
    }

    #[test]
    fn test_question_region_guard_is_scroll_aware() {
        let mut surface = surface();
        surface.set_scroll_offset(400.0);
        // View y = 10 is document y = 410, already past the image.
        let disposition = surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, 10.0),
            kind: PointerKind::Pen,
        });
        assert_eq!(disposition, InputDisposition::Consumed);
    }

    #[test]
    fn test_down_move_up_commits_stroke() {
        let mut surface = surface();
        draw_stroke(&mut surface, 50.0, 500.0);

        assert_eq!(surface.strokes().len(), 1);
        assert_eq!(surface.strokes()[0].len(), 2);
        assert!(surface.preview_path().is_empty());
    }

    #[test]
    fn test_committed_points_are_document_space() {
        let mut surface = surface();
        surface.set_scroll_offset(100.0);
        draw_stroke(&mut surface, 40.0, 500.0);

        // View y 500 at scroll 100 is document y 600; canvas is 400x800.
        let points = surface.strokes()[0].points();
        assert!((points[0].x - 0.1).abs() < f64::EPSILON);
        assert!((points[0].y - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sub_threshold_moves_are_dropped() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: pen(51.0, 501.0),
            kind: PointerKind::Pen,
        });
        assert_eq!(surface.store().draft_points().len(), 1);

        surface.handle_pointer(PointerEvent::Move {
            position: pen(53.0, 501.0),
            kind: PointerKind::Pen,
        });
        assert_eq!(surface.store().draft_points().len(), 2);
    }

    #[test]
    fn test_cancel_commits_like_up() {
        let mut surface = surface();
        surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Cancel {
            position: pen(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        assert_eq!(surface.strokes().len(), 1);
    }

    #[test]
    fn test_scroll_change_requests_redraw() {
        let mut surface = surface();
        let redraws = Rc::new(Cell::new(0));
        let sink = Rc::clone(&redraws);
        surface.subscribe_redraw(move || sink.set(sink.get() + 1));

        surface.set_scroll_offset(250.0);
        assert_eq!(redraws.get(), 1);
    }

    #[test]
    fn test_store_mutations_reach_redraw_subscribers() {
        let mut surface = surface();
        let redraws = Rc::new(Cell::new(0));
        let sink = Rc::clone(&redraws);
        surface.subscribe_redraw(move || sink.set(sink.get() + 1));

        draw_stroke(&mut surface, 50.0, 500.0);
        let after_draw = redraws.get();
        assert!(after_draw > 0);

        // Toolbar undo repaints without any pointer activity.
        surface.undo();
        assert_eq!(redraws.get(), after_draw + 1);
    }

    #[test]
    fn test_eraser_drag_erases() {
        let mut surface = surface();
        draw_stroke(&mut surface, 50.0, 500.0);
        assert_eq!(surface.strokes().len(), 1);

        surface.set_eraser(true);
        surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: pen(50.0, 502.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Up {
            position: pen(50.0, 502.0),
            kind: PointerKind::Pen,
        });

        // The drawn stroke is gone; the eraser gesture itself committed an
        // invisible draft, so only strokes with ink remain meaningful.
        assert!(surface.strokes().iter().all(|s| s.len() < 2));
    }

    #[test]
    fn test_preview_follows_document_space() {
        let mut surface = surface();
        surface.set_scroll_offset(100.0);
        surface.handle_pointer(PointerEvent::Down {
            position: pen(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: pen(50.0, 540.0),
            kind: PointerKind::Pen,
        });

        // Preview starts at the document-space position.
        let elements: Vec<_> = surface.preview_path().elements().to_vec();
        match elements[0] {
            kurbo::PathEl::MoveTo(p) => assert!((p.y - 600.0).abs() < f64::EPSILON),
            _ => panic!("preview must start with a move"),
        }
        assert_eq!(elements.len(), 2);
    }
}
