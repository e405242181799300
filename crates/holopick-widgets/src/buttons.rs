//! Button components: toggle buttons and text buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Pos2, Sense, Ui, vec2};

use crate::{sizing, theme};

/// A toggle button with text label.
/// Uses solid blue background while on.
pub struct ToggleButton<'a> {
    label: &'a str,
    on: bool,
    tooltip: Option<&'a str>,
    min_width: Option<f32>,
    height: f32,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, on: bool) -> Self {
        Self {
            label,
            on,
            tooltip: None,
            min_width: None,
            height: 24.0,
            font_size: 11.0,
        }
    }

    /// Set the hover tooltip.
    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the button height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Show the button and return the state after this frame.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font_id = egui::FontId::proportional(self.font_size);
        let galley = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font_id.clone(), Color32::PLACEHOLDER);
        let text_width = galley.size().x;
        let width = self.min_width.unwrap_or(0.0).max(text_width + 16.0);

        let (rect, response) = ui.allocate_exact_size(vec2(width, self.height), Sense::click());
        let on = if response.clicked() { !self.on } else { self.on };

        if ui.is_rect_visible(rect) {
            let bg_color = if on {
                theme::ACCENT
            } else if response.hovered() {
                Color32::from_gray(235)
            } else {
                Color32::from_gray(245)
            };
            let text_color = if on { Color32::WHITE } else { Color32::from_gray(80) };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter()
                .text(rect.center(), Align2::CENTER_CENTER, self.label, font_id, text_color);
        }

        let response = match self.tooltip {
            Some(tooltip) => response.on_hover_text(tooltip),
            None => response,
        };
        response.on_hover_cursor(CursorIcon::PointingHand);
        on
    }
}

/// A text button with optional shortcut hint.
pub struct TextButton<'a> {
    label: &'a str,
    shortcut: Option<&'a str>,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self { label, shortcut: None }
    }

    /// Add a shortcut hint.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_at_least(vec2(0.0, 24.0), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() { theme::HOVER_BG } else { Color32::TRANSPARENT };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            ui.painter().text(
                Pos2::new(rect.left() + 8.0, rect.center().y),
                Align2::LEFT_CENTER,
                self.label,
                egui::FontId::proportional(12.0),
                theme::TEXT,
            );

            if let Some(shortcut) = self.shortcut {
                ui.painter().text(
                    Pos2::new(rect.right() - 8.0, rect.center().y),
                    Align2::RIGHT_CENTER,
                    shortcut,
                    egui::FontId::proportional(11.0),
                    theme::TEXT_MUTED,
                );
            }
        }

        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_ui;

    #[test]
    fn test_toggle_keeps_state_without_click() {
        run_ui(|ui| {
            assert!(ToggleButton::new("Show old", true).show(ui));
            assert!(!ToggleButton::new("Touch ring", false).tooltip("Press anywhere on the ring").show(ui));
        });
    }

    #[test]
    fn test_toggle_honours_min_width() {
        run_ui(|ui| {
            let before = ui.cursor().left();
            ui.horizontal(|ui| {
                ToggleButton::new("A", false).min_width(80.0).show(ui);
                assert!(ui.cursor().left() - before >= 80.0);
            });
        });
    }

    #[test]
    fn test_text_button_not_clicked() {
        run_ui(|ui| {
            assert!(!TextButton::new("Commit").shortcut("Enter").show(ui));
        });
    }
}
