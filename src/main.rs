//! Application entry point.

use std::path::PathBuf;

use winit::event_loop::{ControlFlow, EventLoop};
use log::{info, error};

use scriptbridge::{ScriptApp, ScriptConfig, ScriptHost};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Logger initialized");

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        error!("Usage: scriptbridge <script.lua>");
        return Err("missing script path".into());
    };

    let host = ScriptHost::new(ScriptConfig::from_env()).map_err(|e| {
        error!("Failed to start script host: {}", e);
        e
    })?;
    host.run_file(&path).map_err(|e| {
        error!("Script error: {}", e);
        e
    })?;

    // Scripts without a frame function run once and exit
    if !host.has_frame() {
        return Ok(());
    }

    let event_loop = EventLoop::new().map_err(|e| {
        error!("Failed to create event loop: {:?}", e);
        e
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let title = path.display().to_string();
    let mut app = ScriptApp::new(host, title);
    if let Err(e) = event_loop.run_app(&mut app) {
        error!("Application error: {:?}", e);
        return Err(Box::new(e));
    }

    Ok(())
}
