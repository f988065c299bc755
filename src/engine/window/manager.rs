//! Window management implementation.

use winit::event_loop::ActiveEventLoop;
use winit::window::Window;
use log::error;

#[derive(Default)]
pub struct WindowManager {
    window: Option<Window>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_window(&mut self, event_loop: &ActiveEventLoop, title: &str) -> Result<(), Box<dyn std::error::Error>> {
        let attributes = Window::default_attributes().with_title(title);
        let window = event_loop.create_window(attributes)
            .map_err(|e| {
                error!("Failed to create window: {:?}", e);
                e
            })?;

        self.window = Some(window);
        Ok(())
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    pub fn has_window(&self) -> bool {
        self.window.is_some()
    }
}
