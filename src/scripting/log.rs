//! Script-side `log.debug/error/info/warn`.
//!
//! Arguments are rendered with the runtime's own `tostring`, so scripts see the
//! same text they would get from `print`.

use std::rc::Rc;

use mlua::{Function, Lua, Result as LuaResult, String as LuaString, Table, Value, Variadic};

use crate::engine::console::{Console, LogLevel};

/// Render each argument to the bytes `tostring` produces. Lua strings are
/// byte strings, so no UTF-8 conversion happens here.
fn render_all(lua: &Lua, args: Variadic<Value>) -> LuaResult<Vec<Vec<u8>>> {
    let tostring: Function = lua.globals().get("tostring")?;
    args.iter()
        .map(|value| -> LuaResult<Vec<u8>> {
            let text = tostring.call::<_, LuaString>(value.clone())?;
            Ok(text.as_bytes().to_vec())
        })
        .collect()
}

pub fn install(lua: &Lua, namespace: &Table, console: Rc<Console>) -> LuaResult<()> {
    let log = lua.create_table()?;
    for level in LogLevel::ALL {
        let console = Rc::clone(&console);
        let func = lua.create_function(move |lua, args: Variadic<Value>| {
            let rendered = render_all(lua, args)?;
            console
                .log_values(level, &rendered)
                .map_err(mlua::Error::external)
        })?;
        log.set(level.name(), func)?;
    }
    namespace.set("log", log)?;
    Ok(())
}
