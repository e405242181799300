//! egui overlay: color readout, old/new swatch and picker toggles.

use egui::{Align2, Context, Key, RichText, TextEdit, TextStyle, Vec2};
use holopick_core::{Argb, ColorPicker, Hsva};
use holopick_widgets::{
    ColorReadout, SplitSwatch, TextButton, ToggleButton, panel_frame, section_label, separator, theme,
};

/// Actions triggered from the overlay or keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// Show or hide the old color in the wheel center.
    SetShowOldColor(bool),
    /// Allow a drag to start anywhere on the ring.
    SetTouchAnywhere(bool),
    /// Make the current color the old color.
    Commit,
    /// Go back to the old color.
    RevertToOld,
    /// Select a color typed or pasted by the user.
    SetColor(Argb),
    /// Copy the current color as hex.
    CopyHex,
    /// Read a hex color from the clipboard.
    PasteHex,
}

impl UiAction {
    /// Apply the picker side of the action and report whether anything
    /// changed. Clipboard actions are left to the caller.
    pub fn apply(&self, picker: &mut ColorPicker) -> bool {
        match *self {
            UiAction::SetShowOldColor(show) => {
                picker.set_show_old_center_color(show);
                true
            }
            UiAction::SetTouchAnywhere(enabled) => {
                picker.set_touch_anywhere_on_wheel(enabled);
                true
            }
            UiAction::Commit => {
                picker.commit();
                true
            }
            UiAction::RevertToOld => match picker.wheel().old_center_color() {
                Some(old) => {
                    picker.set_color(old);
                    true
                }
                None => false,
            },
            UiAction::SetColor(color) => {
                picker.set_color(color);
                true
            }
            UiAction::CopyHex | UiAction::PasteHex => false,
        }
    }
}

/// UI state mirrored from the picker once per frame.
#[derive(Debug, Clone)]
pub struct UiState {
    pub color: Hsva,
    pub argb: Argb,
    pub old_color: Option<Argb>,
    pub show_old_color: bool,
    pub touch_anywhere: bool,
    /// Contents of the hex field.
    pub hex_input: String,
    /// While the hex field has focus, syncing leaves its text alone.
    hex_editing: bool,
    /// Result of the last clipboard action.
    pub status: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        let color = Hsva::default();
        Self {
            color,
            argb: color.to_argb(),
            old_color: None,
            show_old_color: true,
            touch_anywhere: true,
            hex_input: color.to_argb().to_hex(),
            hex_editing: false,
            status: None,
        }
    }
}

impl UiState {
    /// Copy the picker's current state into the overlay.
    pub fn sync_from(&mut self, picker: &ColorPicker) {
        let wheel = picker.wheel();
        self.color = picker.hsva();
        self.argb = picker.color();
        self.old_color = wheel.old_center_color();
        self.show_old_color = wheel.show_old_center_color();
        self.touch_anywhere = wheel.touch_anywhere_enabled();
        if !self.hex_editing {
            self.hex_input = self.argb.to_hex();
        }
    }
}

/// Render the overlay panel and return any triggered action.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("picker_panel"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(220.0);

                section_label(ui, "Color");
                if ColorReadout::new(ui_state.color, ui_state.argb).show(ui).copy_clicked {
                    action = Some(UiAction::CopyHex);
                }

                let response = ui.add(
                    TextEdit::singleline(&mut ui_state.hex_input)
                        .desired_width(120.0)
                        .font(TextStyle::Monospace),
                );
                ui_state.hex_editing = response.has_focus();
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    match Argb::from_hex(&ui_state.hex_input) {
                        Some(color) => action = Some(UiAction::SetColor(color)),
                        None => {
                            ui_state.status = Some(format!("Not a color: {}", ui_state.hex_input));
                        }
                    }
                }

                separator(ui);
                section_label(ui, "Old | New");
                let old = ui_state.old_color.filter(|_| ui_state.show_old_color);
                if SplitSwatch::new(old, ui_state.argb).show(ui) {
                    action = Some(UiAction::RevertToOld);
                }
                ui.horizontal(|ui| {
                    if TextButton::new("Commit").shortcut("Enter").show(ui) {
                        action = Some(UiAction::Commit);
                    }
                    if TextButton::new("Revert").shortcut("Esc").show(ui) {
                        action = Some(UiAction::RevertToOld);
                    }
                });

                separator(ui);
                section_label(ui, "Wheel");
                ui.horizontal(|ui| {
                    let show_old = ToggleButton::new("Show old", ui_state.show_old_color)
                        .tooltip("Split the center swatch (O)")
                        .show(ui);
                    if show_old != ui_state.show_old_color {
                        action = Some(UiAction::SetShowOldColor(show_old));
                    }
                    let anywhere = ToggleButton::new("Touch ring", ui_state.touch_anywhere)
                        .tooltip("Start a drag anywhere on the ring (T)")
                        .show(ui);
                    if anywhere != ui_state.touch_anywhere {
                        action = Some(UiAction::SetTouchAnywhere(anywhere));
                    }
                });

                if let Some(status) = &ui_state.status {
                    ui.label(RichText::new(status).size(10.0).color(theme::TEXT_MUTED));
                }
            });
        });

    action
}
