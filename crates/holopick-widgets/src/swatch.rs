//! Color swatches: a single color and the old/new split.

use egui::{
    Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Ui, Vec2,
    epaint::CircleShape, vec2,
};
use holopick_core::Argb;

use crate::{sizing, theme};

/// Convert a picker color into an egui color.
pub fn to_color32(color: Argb) -> Color32 {
    Color32::from_rgba_unmultiplied(color.red(), color.green(), color.blue(), color.alpha())
}

/// Paint a grey checkerboard behind translucent colors.
fn paint_checkerboard(ui: &Ui, rect: Rect) {
    let cell = 4.0;
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::ZERO, Color32::WHITE);
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    for row in 0..rows {
        for col in (row % 2..cols).step_by(2) {
            let min = rect.min + vec2(col as f32 * cell, row as f32 * cell);
            painter.rect_filled(
                Rect::from_min_size(min, Vec2::splat(cell)),
                CornerRadius::ZERO,
                Color32::from_gray(210),
            );
        }
    }
}

/// A clickable swatch showing one color.
pub struct ColorSwatch<'a> {
    color: Argb,
    tooltip: &'a str,
    size: Vec2,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: Argb, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            size: vec2(sizing::MEDIUM, sizing::MEDIUM),
        }
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Show the swatch and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            if self.color.alpha() < 0xFF {
                paint_checkerboard(ui, rect);
            }
            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, to_color32(self.color));
            ui.painter()
                .rect_stroke(rect, radius, Stroke::new(1.0, theme::BORDER), StrokeKind::Inside);
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}

/// A circular swatch split vertically: committed color on the left, the
/// current color on the right.
pub struct SplitSwatch {
    old: Option<Argb>,
    new: Argb,
    diameter: f32,
}

impl SplitSwatch {
    pub fn new(old: Option<Argb>, new: Argb) -> Self {
        Self {
            old,
            new,
            diameter: sizing::LARGE,
        }
    }

    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Show the swatch; returns true when the old half was clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.diameter), Sense::click());
        let center = rect.center();
        let radius = self.diameter / 2.0;

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            match self.old {
                Some(old) => {
                    painter.add(half_disc(center, radius, std::f32::consts::FRAC_PI_2, to_color32(old)));
                    painter.add(half_disc(center, radius, -std::f32::consts::FRAC_PI_2, to_color32(self.new)));
                }
                None => {
                    painter.add(CircleShape::filled(center, radius, to_color32(self.new)));
                }
            }
            painter.circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));
        }

        let old_clicked = self.old.is_some()
            && response.clicked()
            && response
                .interact_pointer_pos()
                .is_some_and(|pos| pos.x < center.x);
        response.on_hover_text("Old | New");
        old_clicked
    }
}

/// Filled half disc sweeping clockwise by pi from `start` (radians, y down).
fn half_disc(center: Pos2, radius: f32, start: f32, color: Color32) -> Shape {
    const SEGMENTS: usize = 24;
    let mut points = Vec::with_capacity(SEGMENTS + 2);
    points.push(center);
    for i in 0..=SEGMENTS {
        let angle = start + std::f32::consts::PI * i as f32 / SEGMENTS as f32;
        points.push(center + radius * vec2(angle.cos(), angle.sin()));
    }
    Shape::convex_polygon(points, color, Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_ui;

    #[test]
    fn test_to_color32() {
        let color = to_color32(Argb(0x80FF_0000));
        assert_eq!(color.a(), 0x80);
        assert_eq!(to_color32(Argb(0xFF33_6699)), Color32::from_rgb(0x33, 0x66, 0x99));
    }

    #[test]
    fn test_half_disc_covers_left_side() {
        let Shape::Path(path) = half_disc(Pos2::new(10.0, 10.0), 5.0, std::f32::consts::FRAC_PI_2, Color32::RED)
        else {
            panic!("expected a path");
        };
        assert_eq!(path.points.len(), 26);
        assert!(path.points.iter().all(|p| p.x <= 10.0 + 1e-4));
    }

    #[test]
    fn test_swatches_allocate_size() {
        run_ui(|ui| {
            let (clicked, rect) = ColorSwatch::new(Argb(0x80FF_0000), "Current")
                .size(vec2(40.0, 20.0))
                .show(ui);
            assert!(!clicked);
            assert_eq!(rect.size(), vec2(40.0, 20.0));

            assert!(!SplitSwatch::new(Some(Argb::BLACK), Argb::WHITE).diameter(48.0).show(ui));
            assert!(!SplitSwatch::new(None, Argb::WHITE).show(ui));
        });
    }
}
