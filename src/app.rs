//! Event loop handler that drives a script's `frame` function.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;
use log::{debug, error};

use crate::engine::window::WindowManager;
use crate::scripting::ScriptHost;

pub struct ScriptApp {
    host: ScriptHost,
    windows: WindowManager,
    title: String,
}

impl ScriptApp {
    pub fn new(host: ScriptHost, title: impl Into<String>) -> Self {
        Self {
            host,
            windows: WindowManager::new(),
            title: title.into(),
        }
    }
}

impl ApplicationHandler for ScriptApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.windows.has_window() {
            return;
        }
        if let Err(e) = self.windows.create_window(event_loop, &self.title) {
            error!("Failed to create window, exiting: {}", e);
            event_loop.exit();
            return;
        }
        self.windows.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.host.hub().publish_window_event(&event);
        match event {
            WindowEvent::CloseRequested => {
                self.host.hub().shutdown();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.host.call_frame() {
                    error!("Script frame error: {}", e);
                    event_loop.exit();
                    return;
                }
                self.windows.request_redraw();
            }
            WindowEvent::Resized(physical_size) => {
                debug!("Window resized to {}x{}", physical_size.width, physical_size.height);
            }
            _ => (),
        }
    }
}
