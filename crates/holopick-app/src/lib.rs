//! HoloPick Application
//!
//! The native shell around the picker: windowing, input routing, the vello
//! scene and the egui overlay.

mod app;
mod event_handler;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError, AppResult};
pub use event_handler::EventHandler;
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
