//! egui chrome for the HoloPick color picker.
//!
//! The wheel and bars are drawn by the vello renderer; this crate provides
//! the surrounding controls:
//!
//! - **Buttons**: toggle buttons, text buttons
//! - **Swatch**: old/new color swatches
//! - **Readout**: hex and HSV display with a copy action
//! - **Layout**: section labels, separators
//! - **Panel**: the floating panel frame

pub mod buttons;
pub mod layout;
pub mod panel;
pub mod readout;
pub mod swatch;

pub use buttons::{TextButton, ToggleButton};
pub use layout::{section_label, separator};
pub use panel::panel_frame;
pub use readout::{ColorReadout, ReadoutResponse, format_hsva};
pub use swatch::{ColorSwatch, SplitSwatch, to_color32};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Medium swatch size
    pub const MEDIUM: f32 = 28.0;
    /// Large swatch size
    pub const LARGE: f32 = 36.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
