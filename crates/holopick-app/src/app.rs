//! Core application state and lifecycle.

use holopick_core::storage::LAST_SNAPSHOT_KEY;
use holopick_core::{
    Argb, ColorPicker, ConfigError, FileStore, PickerConfig, PickerLayout, PointerEvent,
    SnapshotStore, StorageError,
};
use holopick_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use kurbo::{Point, Size};
use peniko::Color;
use std::sync::Arc;
use thiserror::Error;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use crate::event_handler::EventHandler;
use crate::shortcuts::{ShortcutRegistry, key_name};
use crate::ui::{UiAction, UiState, render_ui};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(String),
    #[error("Window creation failed: {0}")]
    Window(String),
    #[error("Surface error: {0}")]
    Surface(String),
    #[error(transparent)]
    Renderer(#[from] RendererError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

mod clipboard {
    use super::{AppError, AppResult};

    fn open() -> AppResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))
    }

    pub fn copy_text(text: &str) -> AppResult<()> {
        open()?
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }

    pub fn read_text() -> AppResult<String> {
        open()?.get_text().map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub picker: PickerConfig,
    /// Gap around and between widgets, in logical pixels.
    pub spacing: f64,
    /// Keep the picker state between runs.
    pub persist: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "HoloPick".to_string(),
            width: 720,
            height: 560,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            picker: PickerConfig::default(),
            spacing: 16.0,
            persist: true,
        }
    }
}

impl AppConfig {
    pub fn with_picker(mut self, picker: PickerConfig) -> Self {
        self.picker = picker;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        self.picker.validate()?;
        if self.spacing < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "spacing",
                value: self.spacing,
            }
            .into());
        }
        Ok(())
    }
}

/// Apply the last saved session to `picker`. A missing or unusable snapshot
/// leaves the picker at its defaults.
fn restore_session(store: &dyn SnapshotStore, picker: &mut ColorPicker) {
    match store.load(LAST_SNAPSHOT_KEY) {
        Ok(snapshot) => {
            if let Err(e) = picker.restore(&snapshot) {
                log::warn!("Ignoring saved session: {}", e);
            }
        }
        Err(StorageError::NotFound(_)) => log::info!("No saved session"),
        Err(e) => log::warn!("Failed to load session: {}", e),
    }
}

fn save_session(store: &dyn SnapshotStore, picker: &ColorPicker) {
    match store.save(LAST_SNAPSHOT_KEY, &picker.snapshot()) {
        Ok(()) => log::info!("Saved session at {}", picker.color().to_hex()),
        Err(e) => log::error!("Failed to save session: {}", e),
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    picker_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // Picker
    picker: ColorPicker,
    layout: PickerLayout,
    events: EventHandler,
    modifiers: ModifiersState,
}

impl AppState {
    /// Lay the widgets out in the window, `spacing` in from the edges.
    fn relayout(&mut self, spacing: f64) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        let available = Size::new(
            (size.width - 2.0 * spacing).max(0.0),
            (size.height - 2.0 * spacing).max(0.0),
        );
        self.layout = PickerLayout::compute(&mut self.picker, Point::new(spacing, spacing), available, spacing);
        log::debug!("Layout bounds {:?}", self.layout.bounds());
    }

    fn dispatch(&mut self, event: PointerEvent) {
        let outcome = self.events.dispatch(&mut self.picker, &self.layout, event);
        if outcome.handled || self.picker.take_dirty() {
            self.window.request_redraw();
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::CopyHex => {
                let hex = self.picker.color().to_hex();
                self.ui_state.status = Some(match clipboard::copy_text(&hex) {
                    Ok(()) => {
                        log::info!("Copied {}", hex);
                        format!("Copied {}", hex)
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        e.to_string()
                    }
                });
            }
            UiAction::PasteHex => match clipboard::read_text() {
                Ok(text) => match Argb::from_hex(&text) {
                    Some(color) => self.handle_action(UiAction::SetColor(color)),
                    None => self.ui_state.status = Some("Clipboard holds no color".to_string()),
                },
                Err(e) => {
                    log::error!("{}", e);
                    self.ui_state.status = Some(e.to_string());
                }
            },
            other => {
                if other.apply(&mut self.picker) {
                    log::debug!("Applied {:?}", other);
                }
            }
        }
        self.window.request_redraw();
    }

    fn redraw(&mut self, render_cx: &vello::util::RenderContext, config: &AppConfig) {
        // Run egui and collect actions
        self.ui_state.sync_from(&self.picker);
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut actions = Vec::new();
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            if let Some(action) = render_ui(ctx, &mut self.ui_state) {
                actions.push(action);
            }
        });
        for action in actions {
            self.handle_action(action);
        }

        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);
        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let ctx = RenderContext::new(&self.picker, &self.layout, Size::new(width as f64, height as f64))
            .with_scale_factor(self.window.scale_factor())
            .with_background(config.background_color);
        self.picker_renderer.build_scene(&ctx);
        let base_color = self.picker_renderer.background_color(&ctx);
        let scene = self.picker_renderer.take_scene();
        self.picker.take_dirty();

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = match self.surface.surface.get_current_texture() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Failed to get surface texture: {:?}", e);
                return;
            }
        };

        let params = RenderParams {
            base_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-bindable Rgba8Unorm target; it is blitted to
        // the surface format afterwards.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        if let Err(e) =
            self.vello_renderer
                .render_to_texture(device, queue, &scene, &render_texture_view, &params)
        {
            log::error!("{}", RendererError::RenderFailed(e.to_string()));
            return;
        }

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static render pass
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        let repaint_now = egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|viewport| viewport.repaint_delay.is_zero());
        if repaint_now {
            self.window.request_redraw();
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: vello::util::RenderContext,
    store: Option<Box<dyn SnapshotStore>>,
    /// Fatal error raised inside the event loop.
    error: Option<AppError>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let store: Option<Box<dyn SnapshotStore>> = if config.persist {
            match FileStore::default_location() {
                Ok(store) => {
                    log::info!("Session stored in {}", store.base_path().display());
                    Some(Box::new(store))
                }
                Err(e) => {
                    log::warn!("Session will not be saved: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            config,
            state: None,
            render_cx: vello::util::RenderContext::new(),
            store,
            error: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(config: AppConfig) -> AppResult<()> {
        config.validate()?;
        let event_loop = EventLoop::new().map_err(|e| AppError::EventLoop(e.to_string()))?;
        let mut app = App::with_config(config);
        event_loop
            .run_app(&mut app)
            .map_err(|e| AppError::EventLoop(e.to_string()))?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> AppResult<()> {
        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| AppError::Window(e.to_string()))?,
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        let surface = pollster::block_on(self.render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| AppError::Surface(e.to_string()))?;

        let device = &self.render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))?;
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let mut picker = ColorPicker::new(&self.config.picker);
        if let Some(store) = self.store.as_deref() {
            restore_session(store, &mut picker);
        }

        log::info!("HoloPick initialized - {}x{}", surface.config.width, surface.config.height);
        ShortcutRegistry::log_all();

        let mut state = AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            picker_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state: UiState::default(),
            picker,
            layout: PickerLayout::default(),
            events: EventHandler::new(),
            modifiers: ModifiersState::empty(),
        };
        state.relayout(self.config.spacing);
        self.state = Some(state);

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        // Let egui see the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        // A captured drag keeps the pointer even when it crosses the panel
        let egui_wants_pointer = !state.events.is_capturing()
            && (egui_response.consumed
                || state.egui_ctx.is_pointer_over_area()
                || state.egui_ctx.wants_pointer_input());
        let scale = state.window.scale_factor();

        match event {
            WindowEvent::CloseRequested => {
                if let Some(store) = self.store.as_deref() {
                    save_session(store, &state.picker);
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                self.render_cx
                    .resize_surface(&mut state.surface, size.width, size.height);
                state.relayout(self.config.spacing);
                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                state.relayout(self.config.spacing);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                state.redraw(&self.render_cx, &self.config);
            }

            WindowEvent::CursorMoved { position, .. } => {
                let position = position.to_logical::<f64>(scale);
                let event = state.events.cursor_moved(Point::new(position.x, position.y));
                if !egui_wants_pointer {
                    state.dispatch(event);
                }
            }

            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => {
                if egui_wants_pointer {
                    return;
                }
                if let Some(event) = state.events.mouse_input(button, button_state) {
                    state.dispatch(event);
                }
            }

            WindowEvent::Touch(touch) => {
                let position = touch.location.to_logical::<f64>(scale);
                let event = state
                    .events
                    .touch(touch.id, touch.phase, Point::new(position.x, position.y));
                if let Some(event) = event.filter(|_| !egui_wants_pointer) {
                    state.dispatch(event);
                }
            }

            WindowEvent::Focused(false) => {
                if let Some(event) = state.events.focus_lost() {
                    state.dispatch(event);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                state.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if state.egui_ctx.wants_keyboard_input()
                    || key_event.state != ElementState::Pressed
                    || key_event.repeat
                {
                    return;
                }
                let Some(name) = key_name(&key_event.logical_key) else {
                    return;
                };
                let ctrl = state.modifiers.control_key() || state.modifiers.super_key();
                if let Some(shortcut) = ShortcutRegistry::find(&name, ctrl, state.modifiers.shift_key()) {
                    let action = (shortcut.action)(&state.ui_state);
                    state.handle_action(action);
                }
            }

            _ => {}
        }
    }
}
