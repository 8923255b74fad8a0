//! Scroll Preview
//!
//! A native stand-in for the landing page. The mouse wheel scrolls a
//! virtual document one viewport tall per section; the sampled outputs are
//! shown in the title bar and logged at debug level (`RUST_LOG=debug`).

use std::sync::Arc;

use scrollscape::ScrollMetrics;
use scrollscape::app::{AnimatorSettings, Instant, ScrollSession, Section, init_logging};
use winit::application::ApplicationHandler;
use winit::event::{MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

/// Pixels scrolled per wheel line.
const LINE_HEIGHT: f32 = 40.0;
const INITIAL_SIZE: (f32, f32) = (1280.0, 720.0);

struct Preview {
    window: Option<Arc<Window>>,
    session: ScrollSession,
    scroll_top: f32,
    title: String,
}

impl Preview {
    fn new() -> Self {
        let viewport = INITIAL_SIZE.1;
        let metrics = ScrollMetrics::new(0.0, document_height(viewport), viewport);
        Self {
            window: None,
            session: ScrollSession::new(AnimatorSettings::default(), metrics),
            scroll_top: 0.0,
            title: String::new(),
        }
    }

    fn scroll_by(&mut self, delta: f32) {
        let max = self.session.metrics().scrollable_range().max(0.0);
        self.scroll_top = (self.scroll_top - delta).clamp(0.0, max);
        self.session.on_scroll(Instant::now(), self.scroll_top);
    }

    fn resize(&mut self, height: f32) {
        self.session.on_resize(document_height(height), height);
        let max = self.session.metrics().scrollable_range().max(0.0);
        self.scroll_top = self.scroll_top.min(max);
    }

    fn redraw(&mut self) {
        self.session.tick(Instant::now());

        let rig = self.session.rig();
        let position = rig.camera.position;
        let title = format!(
            "Scroll Preview | {:>3.0}% | camera ({:.2}, {:.2}, {:.2}) | color {}",
            self.session.progress() * 100.0,
            position.x,
            position.y,
            position.z,
            rig.material.color,
        );

        if title != self.title {
            log::debug!(
                "{title} | morph {:?}",
                self.session.outputs().morph_influences.as_slice()
            );
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }
}

fn document_height(viewport_height: f32) -> f32 {
    viewport_height * Section::ALL.len() as f32
}

impl ApplicationHandler for Preview {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Scroll Preview")
            .with_inner_size(winit::dpi::LogicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.resize(size.height as f32);
                self.window = Some(Arc::new(window));
                log::info!("Scroll with the mouse wheel to drive the scene");
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.resize(size.height as f32);
                self.session
                    .rig_mut()
                    .camera
                    .set_viewport(size.width as f32, size.height as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_HEIGHT,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.scroll_by(dy);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut preview = Preview::new();
    event_loop.run_app(&mut preview)?;
    Ok(())
}
