//! Vello-based renderer implementation.

use crate::renderer::{QuestionLayout, RenderContext, Renderer, DIVIDER_WIDTH};
use kurbo::{Affine, BezPath, Cap, Join, Line, Rect, Stroke};
use peniko::{Color, Fill};
use vello::Scene;

/// Vello renderer for the writing surface.
///
/// Rebuilds the full scene on every redraw request: no incremental diffing,
/// so a scroll delta or an undo repaints exactly like a pen sample does.
pub struct VelloRenderer {
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Question image (only when its vertical extent intersects the
    /// viewport) and the divider line below it.
    fn render_question(&mut self, ctx: &RenderContext, base: Affine) {
        let Some(image) = ctx.question_image else {
            return;
        };
        let viewport = ctx.surface.viewport();
        let layout =
            QuestionLayout::compute(viewport, image.width() as f64, image.height() as f64);

        if layout.is_visible(viewport.size.height) {
            let img: peniko::ImageBrush = image.data().clone().into();
            let transform = base * Affine::translate((layout.left, layout.top));
            self.scene.draw_image(&img, transform);
        }

        // The divider tracks the image position even when the image itself
        // is scrolled out of view.
        let divider = Line::new(
            (layout.left, layout.divider_y()),
            (layout.left + layout.width, layout.divider_y()),
        );
        self.scene.stroke(
            &Stroke::new(DIVIDER_WIDTH),
            base,
            ctx.divider_color,
            None,
            &divider,
        );
    }

    /// Committed strokes in store order, denormalized against the live
    /// canvas size and shifted by the scroll offset.
    fn render_strokes(&mut self, ctx: &RenderContext, base: Affine) {
        let viewport = ctx.surface.viewport();
        for stroke in ctx.surface.strokes() {
            let mut path = BezPath::new();
            for (i, point) in stroke.points().iter().enumerate() {
                let view = viewport.to_view(point.denormalize(viewport.size));
                if i == 0 {
                    path.move_to((view.x, view.y));
                } else {
                    path.line_to((view.x, view.y));
                }
            }

            let width = stroke.width_ratio() * viewport.size.width;
            self.scene.stroke(
                &pen_stroke(width),
                base,
                Color::from(stroke.color()),
                None,
                &path,
            );
        }
    }

    /// The in-progress path, drawn with the live tool color and width (the
    /// stroke has neither of its own yet).
    fn render_preview(&mut self, ctx: &RenderContext, base: Affine) {
        let preview = ctx.surface.preview_path();
        if preview.is_empty() {
            return;
        }

        let viewport = ctx.surface.viewport();
        let tool = ctx.surface.tool();
        // The preview lives in document space; shift by the live scroll.
        let transform = base * Affine::translate((0.0, -viewport.scroll_offset));
        self.scene.stroke(
            &pen_stroke(tool.stroke_width()),
            transform,
            Color::from(tool.color()),
            None,
            preview,
        );
    }
}

/// Round caps and joins, matching the host app's pen paint.
fn pen_stroke(width: f64) -> Stroke {
    Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round)
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let viewport = ctx.surface.viewport();
        let base = Affine::scale(ctx.scale_factor);

        // Clear frame.
        let frame = Rect::new(0.0, 0.0, viewport.size.width, viewport.size.height);
        self.scene
            .fill(Fill::NonZero, base, ctx.background_color, None, &frame);

        self.render_question(ctx, base);
        self.render_strokes(ctx, base);
        self.render_preview(ctx, base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ReferenceImage;
    use vaultink_core::{InkSurface, PointerEvent, PointerKind, ViewPoint};

    fn surface_with_stroke() -> InkSurface {
        let mut surface = InkSurface::new(300.0);
        surface.set_viewport_size(400.0, 800.0);
        surface.handle_pointer(PointerEvent::Down {
            position: ViewPoint::new(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: ViewPoint::new(90.0, 540.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Up {
            position: ViewPoint::new(90.0, 540.0),
            kind: PointerKind::Pen,
        });
        surface
    }

    #[test]
    fn test_build_scene_smoke() {
        let surface = surface_with_stroke();
        let image = ReferenceImage::from_rgba8(4, 4, vec![128; 4 * 4 * 4]).unwrap();
        let ctx = RenderContext::new(&surface).with_question_image(&image);

        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx);
        // Full repaint: building again from the same state must be fine.
        renderer.build_scene(&ctx);
    }

    #[test]
    fn test_build_scene_mid_stroke() {
        let mut surface = InkSurface::new(300.0);
        surface.set_viewport_size(400.0, 800.0);
        surface.handle_pointer(PointerEvent::Down {
            position: ViewPoint::new(50.0, 500.0),
            kind: PointerKind::Pen,
        });
        surface.handle_pointer(PointerEvent::Move {
            position: ViewPoint::new(80.0, 520.0),
            kind: PointerKind::Pen,
        });

        let ctx = RenderContext::new(&surface);
        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx);
        assert!(!surface.preview_path().is_empty());
    }
}
