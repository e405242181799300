//! Text readout of the selected color.

use egui::{RichText, Ui};
use holopick_core::{Argb, Hsva};

use crate::buttons::TextButton;
use crate::swatch::ColorSwatch;
use crate::theme;

/// What the user did with a readout this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadoutResponse {
    /// The copy button was pressed.
    pub copy_clicked: bool,
}

/// Swatch, hex code and HSV breakdown of one color.
pub struct ColorReadout {
    color: Hsva,
    argb: Argb,
}

impl ColorReadout {
    pub fn new(color: Hsva, argb: Argb) -> Self {
        Self { color, argb }
    }

    pub fn show(self, ui: &mut Ui) -> ReadoutResponse {
        let hex = self.argb.to_hex();
        let mut response = ReadoutResponse::default();
        ui.horizontal(|ui| {
            ColorSwatch::new(self.argb, &hex).show(ui);
            ui.vertical(|ui| {
                ui.label(RichText::new(&hex).monospace().size(13.0).color(theme::TEXT));
                ui.label(RichText::new(format_hsva(&self.color)).size(10.0).color(theme::TEXT_MUTED));
            });
            response.copy_clicked = TextButton::new("Copy").show(ui);
        });
        response
    }
}

/// `H 270° S 100% V 50%`, with an alpha term when translucent.
pub fn format_hsva(color: &Hsva) -> String {
    let mut text = format!(
        "H {:.0}° S {:.0}% V {:.0}%",
        color.hue,
        color.saturation * 100.0,
        color.value * 100.0
    );
    if color.alpha < 1.0 {
        text.push_str(&format!(" A {:.0}%", color.alpha * 100.0));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::run_ui;

    #[test]
    fn test_format_hsva() {
        assert_eq!(format_hsva(&Hsva::new(270.0, 1.0, 0.5, 1.0)), "H 270° S 100% V 50%");
        assert_eq!(format_hsva(&Hsva::new(0.0, 0.25, 1.0, 0.5)), "H 0° S 25% V 100% A 50%");
    }

    #[test]
    fn test_readout_renders_headless() {
        let argb = Argb(0xFF80_00FF);
        run_ui(|ui| {
            let response = ColorReadout::new(argb.to_hsva(), argb).show(ui);
            assert_eq!(response, ReadoutResponse::default());
        });
    }
}
