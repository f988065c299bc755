//! Owner of the Lua state and everything installed into it.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use log::{debug, info};
use mlua::{FromLuaMulti, Lua, Value};

use super::error::ScriptError;
use super::{events, log as script_log, matrix};
use crate::config::ScriptConfig;
use crate::engine::console::Console;
use crate::engine::events::EventHub;

pub struct ScriptHost {
    lua: Lua,
    hub: Rc<EventHub>,
}

impl ScriptHost {
    /// Host logging script output to standard output.
    pub fn new(config: ScriptConfig) -> Result<Self, ScriptError> {
        Self::with_console(config, Console::stdout())
    }

    pub fn with_console(config: ScriptConfig, console: Console) -> Result<Self, ScriptError> {
        let lua = Lua::new();
        lua.set_app_data(config.policy);
        let hub = Rc::new(EventHub::new());

        {
            let namespace = lua.create_table()?;
            matrix::install(&lua, &namespace)?;
            script_log::install(&lua, &namespace, Rc::new(console))?;
            events::install(&lua, &namespace, Rc::clone(&hub))?;
            lua.globals().set(config.namespace.as_str(), namespace)?;
        }

        info!(
            "Script host ready (namespace `{}`, {:?} failures)",
            config.namespace, config.policy
        );
        Ok(Self { lua, hub })
    }

    /// Run a script file. The file is loaded as raw bytes, so string literals
    /// in any encoding reach the runtime unchanged.
    pub fn run_file(&self, path: &Path) -> Result<(), ScriptError> {
        let bytes = fs::read(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Running script {}", path.display());
        self.lua
            .load(&bytes[..])
            .set_name(path.display().to_string())
            .exec()?;
        Ok(())
    }

    pub fn run_chunk(&self, name: &str, source: &str) -> Result<(), ScriptError> {
        self.lua.load(source).set_name(name).exec()?;
        Ok(())
    }

    /// Evaluate an expression or chunk and convert its results.
    pub fn eval<'lua, R: FromLuaMulti<'lua>>(&'lua self, source: &str) -> Result<R, ScriptError> {
        Ok(self.lua.load(source).eval()?)
    }

    /// Whether the scripts defined a global `frame` function.
    pub fn has_frame(&self) -> bool {
        matches!(self.lua.globals().get::<_, Value>("frame"), Ok(Value::Function(_)))
    }

    /// Call the global `frame` function, if there is one.
    pub fn call_frame(&self) -> Result<(), ScriptError> {
        if let Value::Function(frame) = self.lua.globals().get::<_, Value>("frame")? {
            frame.call::<_, ()>(())?;
        }
        Ok(())
    }

    pub fn hub(&self) -> &EventHub {
        &self.hub
    }
}
