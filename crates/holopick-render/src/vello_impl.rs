//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer, WidgetRenderer};
use holopick_core::bar::ColorBar;
use holopick_core::gradient::{Gradient, GradientKind};
use holopick_core::wheel::ColorWheel;
use kurbo::{Affine, Circle, CircleSegment, Shape, Stroke};
use peniko::{BrushRef, Color, Fill};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Draw calls issued since the last `build_scene`.
    draw_count: usize,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a widget gradient into a peniko brush.
fn to_brush(gradient: &Gradient) -> peniko::Gradient {
    let stops: Vec<(f32, Color)> = gradient
        .offsets()
        .zip(gradient.stops.iter().map(|c| Color::from(*c)))
        .collect();
    let base = match gradient.kind {
        GradientKind::Linear { start, end } => peniko::Gradient::new_linear(start, end),
        GradientKind::Sweep { center } => peniko::Gradient::new_sweep(center, 0.0, TAU as f32),
    };
    base.with_stops(stops.as_slice())
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            draw_count: 0,
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

    /// Number of fills and strokes in the current scene.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    fn fill<'b>(&mut self, transform: Affine, brush: impl Into<BrushRef<'b>>, shape: &impl Shape) {
        self.scene.fill(Fill::NonZero, transform, brush, None, shape);
        self.draw_count += 1;
    }

    fn stroke<'b>(
        &mut self,
        stroke: &Stroke,
        transform: Affine,
        brush: impl Into<BrushRef<'b>>,
        shape: &impl Shape,
    ) {
        self.scene.stroke(stroke, transform, brush, None, shape);
        self.draw_count += 1;
    }
}

impl WidgetRenderer for VelloRenderer {
    fn render_wheel(&mut self, wheel: &ColorWheel, transform: Affine, halo: Color) {
        let geometry = wheel.geometry();
        let center = geometry.center();

        let ring = to_brush(&wheel.gradient());
        self.stroke(
            &Stroke::new(geometry.thickness),
            transform,
            &ring,
            &Circle::new(center, geometry.radius),
        );

        let pointer = wheel.pointer_center();
        self.fill(transform, halo, &Circle::new(pointer, geometry.pointer_halo_radius));
        self.fill(
            transform,
            Color::from(wheel.pointer_color()),
            &Circle::new(pointer, geometry.pointer_radius),
        );

        // Center halo marks an active drag.
        if wheel.is_dragging() {
            self.fill(transform, halo, &Circle::new(center, geometry.center_halo_radius));
        }

        let radius = geometry.center_radius;
        let new_color = Color::from(wheel.color());
        match wheel.old_center_color() {
            Some(old) if wheel.show_old_center_color() => {
                // Old on the left half, new on the right.
                let left = CircleSegment::new(center, radius, 0.0, FRAC_PI_2, PI);
                let right = CircleSegment::new(center, radius, 0.0, -FRAC_PI_2, PI);
                self.fill(transform, Color::from(old), &left);
                self.fill(transform, new_color, &right);
            }
            _ => self.fill(transform, new_color, &Circle::new(center, radius)),
        }
    }

    fn render_bar(&mut self, bar: &ColorBar, transform: Affine, halo: Color) {
        let track = to_brush(bar.gradient());
        self.fill(transform, &track, &bar.bar_rect());

        let pointer = bar.pointer_center();
        self.fill(transform, halo, &Circle::new(pointer, bar.pointer_halo_radius()));
        self.fill(
            transform,
            Color::from(bar.pointer_color()),
            &Circle::new(pointer, bar.pointer_radius()),
        );
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        self.draw_count = 0;

        let base = Affine::scale(ctx.scale_factor);
        let wheel_transform = base * Affine::translate(ctx.layout.wheel.origin().to_vec2());
        self.render_wheel(ctx.picker.wheel(), wheel_transform, ctx.halo_color);

        for (kind, rect) in &ctx.layout.bars {
            let Some(bar) = ctx.picker.bar(*kind) else {
                log::warn!("Layout names a {} bar the picker does not have", kind.label());
                continue;
            };
            let transform = base * Affine::translate(rect.origin().to_vec2());
            self.render_bar(bar, transform, ctx.halo_color);
        }
    }
}
