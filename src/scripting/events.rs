//! Script-side event subscriptions.
//!
//! ```lua
//! local sub = engine.events.subscribe()
//! local event = sub:poll()
//! while event do
//!     if event.type == "key" and event.pressed then engine.log.info(event.code) end
//!     event = sub:poll()
//! end
//! ```

use std::rc::Rc;

use mlua::{Lua, MultiValue, Result as LuaResult, Table, UserData, UserDataMethods, Value};

use super::error::{BindingError, FailurePolicy};
use crate::engine::events::{key_name, EngineEvent, EventHub, Subscription};

pub struct LuaSubscription(Subscription);

impl UserData for LuaSubscription {
    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_method("poll", |lua, this, ()| match this.0.poll() {
            Some(event) => event_table(lua, &event).map(Value::Table),
            None => Ok(Value::Nil),
        });
        methods.add_method_mut("close", |_, this, ()| {
            this.0.close();
            Ok(())
        });
        methods.add_method("is_open", |_, this, ()| Ok(this.0.is_open()));
    }
}

fn event_table<'lua>(lua: &'lua Lua, event: &EngineEvent) -> LuaResult<Table<'lua>> {
    let table = lua.create_table()?;
    table.set("type", event.kind())?;
    match event {
        EngineEvent::CloseRequested => {}
        EngineEvent::Resized { width, height } => {
            table.set("width", *width)?;
            table.set("height", *height)?;
        }
        EngineEvent::Key { code, pressed } => {
            table.set("code", key_name(*code))?;
            table.set("pressed", *pressed)?;
        }
        EngineEvent::Focused(focused) => table.set("focused", *focused)?,
    }
    Ok(table)
}

pub fn install(lua: &Lua, namespace: &Table, hub: Rc<EventHub>) -> LuaResult<()> {
    let events = lua.create_table()?;
    let subscribe = lua.create_function(move |lua, _: MultiValue| {
        let result = hub
            .subscribe()
            .map(LuaSubscription)
            .map_err(BindingError::from);
        FailurePolicy::of(lua).finish(lua, result)
    })?;
    events.set("subscribe", subscribe)?;
    namespace.set("events", events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn setup() -> (Lua, Rc<EventHub>) {
        let lua = Lua::new();
        let hub = Rc::new(EventHub::new());
        let namespace = lua.create_table().unwrap();
        install(&lua, &namespace, Rc::clone(&hub)).unwrap();
        lua.globals().set("engine", namespace).unwrap();
        (lua, hub)
    }

    #[test]
    fn key_events_become_tables() {
        let (lua, hub) = setup();
        lua.load("sub = engine.events.subscribe()").exec().unwrap();
        hub.publish(&EngineEvent::Key {
            code: KeyCode::KeyW,
            pressed: true,
        });
        let (kind, code, pressed): (String, String, bool) = lua
            .load("local e = sub:poll() return e.type, e.code, e.pressed")
            .eval()
            .unwrap();
        assert_eq!((kind.as_str(), code.as_str(), pressed), ("key", "KeyW", true));

        let empty: Value = lua.load("sub:poll()").eval().unwrap();
        assert!(matches!(empty, Value::Nil));
    }

    #[test]
    fn unnamed_keys_are_reported_as_unidentified() {
        let (lua, hub) = setup();
        lua.load("sub = engine.events.subscribe()").exec().unwrap();
        hub.publish(&EngineEvent::Key {
            code: KeyCode::ArrowUp,
            pressed: false,
        });
        hub.publish(&EngineEvent::Key {
            code: KeyCode::Fn,
            pressed: true,
        });
        let (first, second): (String, String) = lua
            .load("return sub:poll().code, sub:poll().code")
            .eval()
            .unwrap();
        assert_eq!((first.as_str(), second.as_str()), ("ArrowUp", "Unidentified"));
    }

    #[test]
    fn close_releases_the_queue() {
        let (lua, hub) = setup();
        lua.load("sub = engine.events.subscribe()").exec().unwrap();
        assert_eq!(hub.subscriber_count(), 1);
        let open: bool = lua.load("sub:close() return sub:is_open()").eval().unwrap();
        assert!(!open);
        hub.publish(&EngineEvent::CloseRequested);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn subscribe_after_shutdown_yields_nil() {
        let (lua, hub) = setup();
        hub.shutdown();
        let sub: Value = lua.load("engine.events.subscribe()").eval().unwrap();
        assert!(matches!(sub, Value::Nil));
    }
}
