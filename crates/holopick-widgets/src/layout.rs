//! Layout helpers: separators, section labels.

use egui::{Color32, Pos2, RichText, Stroke, Ui};

use crate::theme;

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, Color32::from_gray(230)),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(10.0).color(theme::TEXT_MUTED));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_ui;

    #[test]
    fn test_separator_advances_cursor() {
        run_ui(|ui| {
            let top = ui.cursor().top();
            section_label(ui, "Channels");
            let after_label = ui.cursor().top();
            assert!(after_label > top);
            separator(ui);
            assert!(ui.cursor().top() >= after_label + 8.0);
        });
    }
}
