use std::{sync::Arc, time::Instant};

use anyhow::Context;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::{
    config::ShowroomConfig,
    gfx::{camera::PerspectiveCamera, picking::ObjectPicker, scene::SceneGraph},
    loader::ModelLoader,
    navigation::NavKey,
    showroom::Showroom,
};

/// Called once per redraw with the current scene, the camera and the node
/// to outline, if any. This is where a renderer plugs in.
pub type FrameCallback = Box<dyn FnMut(&SceneGraph, &PerspectiveCamera, Option<&str>)>;

const TITLE: &str = "Showroom";

pub struct ShowroomApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    showroom: Showroom,
    size: PhysicalSize<u32>,
    cursor: (f32, f32),
    clock: FrameClock,
    frame_callback: Option<FrameCallback>,
}

impl ShowroomApp {
    pub fn new(config: ShowroomConfig, loader: Box<dyn ModelLoader>) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let showroom = Showroom::new(config, loader).context("Invalid showroom configuration")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                showroom,
                size: PhysicalSize::new(1200, 800),
                cursor: (0.0, 0.0),
                clock: FrameClock::new(),
                frame_callback: None,
            },
        })
    }

    pub fn set_frame_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&SceneGraph, &PerspectiveCamera, Option<&str>) + 'static,
    {
        self.app_state.frame_callback = Some(Box::new(callback));
    }

    pub fn showroom(&self) -> &Showroom {
        &self.app_state.showroom
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self.app_state)
            .context("Event loop terminated with an error")?;
        Ok(())
    }
}

impl AppState {
    fn cursor_ndc(&self) -> (f32, f32) {
        ObjectPicker::screen_to_ndc(
            self.cursor,
            (self.size.width as f32, self.size.height as f32),
        )
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(
            WindowAttributes::default()
                .with_title(TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            Ok(window) => {
                self.size = window.inner_size();
                self.showroom.resize(self.size.width, self.size.height);
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.size = size;
                self.showroom.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                let ndc = self.cursor_ndc();
                self.showroom.pointer_moved(ndc);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let ndc = self.cursor_ndc();
                self.showroom.pointer_clicked(ndc);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Some(key) = NavKey::from_physical_key(event.physical_key) {
                    self.showroom.key_pressed(key);
                }
            }
            WindowEvent::RedrawRequested => {
                let dt = self.clock.update(self.window.as_deref(), Instant::now());
                self.showroom.tick(dt);
                for cue in self.showroom.drain_cues() {
                    log::debug!("Screen cue: {:?}", cue);
                }

                if let Some(callback) = self.frame_callback.as_mut() {
                    callback(
                        self.showroom.current_scene(),
                        self.showroom.camera(),
                        self.showroom.highlighted(),
                    );
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

/// Frame delta plus a twice-a-second fps readout in the window title.
struct FrameClock {
    last_frame: Option<Instant>,
    last_report: Instant,
    frames: u32,
}

impl FrameClock {
    /// Longest step fed to a tick; a stalled window must not skip a
    /// whole transition in one tick.
    const MAX_DT: f32 = 0.1;

    fn new() -> Self {
        Self {
            last_frame: None,
            last_report: Instant::now(),
            frames: 0,
        }
    }

    fn update(&mut self, window: Option<&Window>, now: Instant) -> f32 {
        let dt = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 1.0 / 60.0,
        };
        self.last_frame = Some(now);

        self.frames = self.frames.saturating_add(1);
        let elapsed = now.saturating_duration_since(self.last_report).as_secs_f32();
        if elapsed >= 0.5 {
            if let Some(window) = window {
                window.set_title(&format!(
                    "{} - {:.1} fps",
                    TITLE,
                    self.frames as f32 / elapsed
                ));
            }
            self.frames = 0;
            self.last_report = now;
        }

        dt.min(Self::MAX_DT)
    }
}
