//! HoloPick Core Library
//!
//! Platform-agnostic color model, widget state machines and the mediator
//! that keeps a hue wheel and its bars on one selected color.

pub mod bar;
pub mod channel;
pub mod color;
pub mod config;
pub mod geometry;
pub mod gradient;
pub mod input;
pub mod layout;
pub mod listener;
pub mod picker;
pub mod snapshot;
pub mod storage;
pub mod wheel;

pub use bar::{ChannelChange, ColorBar};
pub use channel::{BarKind, Channel};
pub use color::{Argb, Hsv, Hsva};
pub use config::{BarConfig, ConfigError, PickerConfig, WheelConfig};
pub use geometry::{BarTrack, Orientation, SizeConstraint, WheelGeometry, angle_to_hue, hue_to_angle};
pub use gradient::{Gradient, GradientKind, GradientProvider};
pub use input::{DragState, PointerEvent};
pub use layout::{PickerLayout, PointerRouter, Target};
pub use picker::{ColorPicker, EventOutcome, FanOut, Push, Source};
pub use snapshot::{PickerSnapshot, SnapshotError};
pub use storage::{FileStore, MemoryStore, SnapshotStore, StorageError};
pub use wheel::{ColorWheel, WheelChange};
