//! The mediator that keeps a wheel and its bars on one color.
//!
//! Widgets never talk to each other. A widget handles a pointer event and
//! reports what changed; the picker merges that into its canonical color and
//! pushes the result to every other widget. Push methods return nothing, so
//! an update can never travel back to the picker.

use crate::bar::{ChannelChange, ColorBar};
use crate::channel::BarKind;
use crate::color::{Argb, Hsva};
use crate::config::{BarConfig, PickerConfig};
use crate::input::PointerEvent;
use crate::snapshot::{PickerSnapshot, SnapshotResult};
use crate::wheel::{ColorWheel, WheelChange};

/// Where a color update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Wheel,
    Bar(BarKind),
    /// `ColorPicker::set_color` or a restore.
    Api,
}

/// The update pushed into a bar during fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Hue,
    Saturation,
    Value,
    Color,
}

/// Record of one fan-out pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FanOut {
    pub source: Source,
    /// Every bar that received an update, in push order.
    pub pushes: Vec<(BarKind, Push)>,
    /// Canonical color after the pass.
    pub color: Argb,
}

impl FanOut {
    /// How many times `kind` was pushed to.
    pub fn pushes_to(&self, kind: BarKind) -> usize {
        self.pushes.iter().filter(|(k, _)| *k == kind).count()
    }
}

/// Result of routing a pointer event through the picker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventOutcome {
    /// Whether the widget consumed the event.
    pub handled: bool,
    pub fan_out: Option<FanOut>,
}

/// A hue wheel plus at most one bar of each kind.
#[derive(Debug)]
pub struct ColorPicker {
    wheel: ColorWheel,
    bars: [Option<ColorBar>; 4],
    color: Hsva,
}

impl ColorPicker {
    /// Build a picker with the bars listed in `config`.
    pub fn new(config: &PickerConfig) -> Self {
        let mut wheel = ColorWheel::new(&config.wheel);
        wheel.set_touch_anywhere_enabled(config.touch_anywhere_on_wheel);
        wheel.set_show_old_center_color(config.show_old_center_color);

        let mut picker = Self {
            color: wheel.hsva(),
            wheel,
            bars: [None, None, None, None],
        };
        for kind in &config.bars {
            picker.add_bar(ColorBar::new(*kind, &config.bar));
        }
        log::info!("Color picker created with {} bars", picker.bars().count());
        picker
    }

    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    pub fn wheel_mut(&mut self) -> &mut ColorWheel {
        &mut self.wheel
    }

    pub fn bar(&self, kind: BarKind) -> Option<&ColorBar> {
        self.bars[kind.index()].as_ref()
    }

    pub fn bar_mut(&mut self, kind: BarKind) -> Option<&mut ColorBar> {
        self.bars[kind.index()].as_mut()
    }

    /// Attached bars in slot order.
    pub fn bars(&self) -> impl Iterator<Item = &ColorBar> {
        self.bars.iter().flatten()
    }

    pub fn bars_mut(&mut self) -> impl Iterator<Item = &mut ColorBar> {
        self.bars.iter_mut().flatten()
    }

    /// Canonical packed color.
    pub fn color(&self) -> Argb {
        self.color.to_argb()
    }

    pub fn hsva(&self) -> Hsva {
        self.color
    }

    /// Attach a bar, replacing any bar of the same kind. The bar is brought
    /// up to date with the current color before it is stored.
    pub fn add_bar(&mut self, mut bar: ColorBar) -> &mut ColorBar {
        let kind = bar.kind();
        bar.set_color(self.color);
        log::debug!("Attached {} bar", kind.label());
        self.bars[kind.index()].insert(bar)
    }

    pub fn add_saturation_bar(&mut self, config: &BarConfig) -> &mut ColorBar {
        self.add_bar(ColorBar::new(BarKind::Saturation, config))
    }

    pub fn add_value_bar(&mut self, config: &BarConfig) -> &mut ColorBar {
        self.add_bar(ColorBar::new(BarKind::Value, config))
    }

    pub fn add_opacity_bar(&mut self, config: &BarConfig) -> &mut ColorBar {
        self.add_bar(ColorBar::new(BarKind::Opacity, config))
    }

    pub fn add_sv_bar(&mut self, config: &BarConfig) -> &mut ColorBar {
        self.add_bar(ColorBar::new(BarKind::SaturationValue, config))
    }

    /// Detach a bar. Later events for that kind are ignored.
    pub fn remove_bar(&mut self, kind: BarKind) -> Option<ColorBar> {
        let removed = self.bars[kind.index()].take();
        if removed.is_some() {
            log::debug!("Removed {} bar", kind.label());
        }
        removed
    }

    pub fn set_touch_anywhere_on_wheel(&mut self, enabled: bool) {
        self.wheel.set_touch_anywhere_enabled(enabled);
    }

    pub fn set_show_old_center_color(&mut self, show: bool) {
        self.wheel.set_show_old_center_color(show);
    }

    /// Whether any widget needs a repaint, clearing every widget's flag.
    pub fn take_dirty(&mut self) -> bool {
        let mut dirty = self.wheel.take_dirty();
        for bar in self.bars.iter_mut().flatten() {
            dirty |= bar.take_dirty();
        }
        dirty
    }

    /// Make the current color the old (committed) color.
    pub fn commit(&mut self) {
        let color = self.wheel.color();
        self.wheel.set_old_center_color(color);
        log::debug!("Committed {}", color.to_hex());
    }

    /// Select a color programmatically and update every widget.
    ///
    /// Achromatic colors keep the current hue so the wheel pointer does not
    /// jump to red.
    pub fn set_color(&mut self, color: impl Into<Hsva>) -> FanOut {
        let mut color = color.into();
        if color.saturation <= 0.0 || color.value <= 0.0 {
            color.hue = self.color.hue;
        }
        self.wheel.set_hue(color.hue);
        self.color = Hsva {
            hue: self.wheel.hue(),
            ..color
        };
        self.fan_out(Source::Api)
    }

    /// Route a wheel-local pointer event to the wheel.
    pub fn handle_wheel_event(&mut self, event: PointerEvent) -> EventOutcome {
        let change = self.wheel.handle_pointer_event(event);
        let fan_out = match change {
            WheelChange::Hue(hue) => {
                self.color.hue = hue;
                Some(self.fan_out(Source::Wheel))
            }
            _ => None,
        };
        EventOutcome {
            handled: change.is_handled(),
            fan_out,
        }
    }

    /// Route a bar-local pointer event to the bar of `kind`.
    pub fn handle_bar_event(&mut self, kind: BarKind, event: PointerEvent) -> EventOutcome {
        let Some(bar) = self.bars[kind.index()].as_mut() else {
            return EventOutcome::default();
        };
        let was_dragging = bar.is_dragging();
        let change = bar.handle_pointer_event(event);
        let handled = change.is_some() || was_dragging;
        let fan_out = change.map(|change| {
            self.merge(change);
            self.fan_out(Source::Bar(kind))
        });
        EventOutcome { handled, fan_out }
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            color: self.color,
            wheel: self.wheel.snapshot(),
            bars: self.bars().map(ColorBar::snapshot).collect(),
        }
    }

    /// Restore a snapshot. The whole snapshot is validated first; on error
    /// nothing changes.
    ///
    /// Bars without a saved entry take the restored canonical color.
    pub fn restore(&mut self, snapshot: &PickerSnapshot) -> SnapshotResult<()> {
        snapshot.validate()?;
        self.wheel.restore(&snapshot.wheel)?;
        self.color = Hsva {
            hue: self.wheel.hue(),
            ..snapshot.color
        };
        for bar in self.bars.iter_mut().flatten() {
            match snapshot.bars.iter().find(|saved| saved.kind == bar.kind()) {
                Some(saved) => bar.restore(saved)?,
                None => bar.set_color(self.color),
            }
        }
        self.wheel.set_new_center_color(self.color);
        log::info!("Restored picker at {}", self.color().to_hex());
        Ok(())
    }

    fn merge(&mut self, change: ChannelChange) {
        match change.kind {
            BarKind::Saturation => self.color.saturation = change.color.saturation,
            BarKind::Value => self.color.value = change.color.value,
            BarKind::Opacity => self.color.alpha = change.color.alpha,
            BarKind::SaturationValue => {
                self.color.saturation = change.color.saturation;
                self.color.value = change.color.value;
            }
        }
    }

    fn fan_out(&mut self, source: Source) -> FanOut {
        let color = self.color;
        let mut pushes = Vec::new();
        for kind in BarKind::ALL {
            let Some(push) = push_for(source, kind) else {
                continue;
            };
            let Some(bar) = self.bars[kind.index()].as_mut() else {
                continue;
            };
            match push {
                Push::Hue => bar.set_hue(color.hue),
                Push::Saturation => bar.set_saturation(color.saturation),
                Push::Value => bar.set_value(color.value),
                Push::Color => bar.set_color(color),
            }
            pushes.push((kind, push));
        }
        self.wheel.set_new_center_color(color);
        log::debug!("Fan-out from {:?} to {} bars", source, pushes.len());
        FanOut {
            source,
            pushes,
            color: color.to_argb(),
        }
    }
}

/// Which update `target` receives when `source` changes.
fn push_for(source: Source, target: BarKind) -> Option<Push> {
    use BarKind::*;
    match (source, target) {
        (Source::Api, _) => Some(Push::Color),
        (Source::Wheel, Saturation | Value) => Some(Push::Hue),
        (Source::Wheel, Opacity | SaturationValue) => Some(Push::Color),
        (Source::Bar(Saturation), Value) => Some(Push::Saturation),
        (Source::Bar(Value), Saturation) => Some(Push::Value),
        (Source::Bar(Saturation | Value), Opacity | SaturationValue) => Some(Push::Color),
        (Source::Bar(SaturationValue), Saturation | Value | Opacity) => Some(Push::Color),
        _ => None,
    }
}
