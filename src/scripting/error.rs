//! Errors raised by script bindings and the script host.

use std::io;
use std::path::PathBuf;

use log::debug;
use mlua::{IntoLua, Lua, Result as LuaResult, Value};
use thiserror::Error;

use crate::engine::events::SubscribeError;

/// Why a bound operation produced no value.
#[derive(Debug, Error)]
pub enum BindingError {
    #[error("{op}: expected {expected} argument(s), got {got}")]
    Arity {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{op}: expected a table, got {got}")]
    NotATable { op: &'static str, got: &'static str },

    #[error("{op}: expected 16 values, got {got}")]
    Length { op: &'static str, got: usize },

    #[error("{op}: element {index} is not a number (got {got})")]
    NonNumeric {
        op: &'static str,
        index: usize,
        got: &'static str,
    },

    #[error("{op}: argument {position} is not a matrix (got {got})")]
    NotAMatrix {
        op: &'static str,
        position: usize,
        got: &'static str,
    },

    #[error(transparent)]
    Subscribe(#[from] SubscribeError),

    #[error("lua: {0}")]
    Lua(#[from] mlua::Error),
}

/// How a [`BindingError`] surfaces to the calling script.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// The call returns nil. Scripts written against the nil convention keep working.
    #[default]
    Silent,
    /// The call raises a Lua error carrying the binding error message.
    Strict,
}

impl FailurePolicy {
    /// Policy installed on `lua` by the script host.
    pub fn of(lua: &Lua) -> Self {
        lua.app_data_ref::<FailurePolicy>()
            .map(|policy| *policy)
            .unwrap_or_default()
    }

    /// Turn a binding result into the single value handed back to Lua.
    ///
    /// Runtime failures (`BindingError::Lua`) always propagate.
    pub fn finish<'lua, T>(self, lua: &'lua Lua, result: Result<T, BindingError>) -> LuaResult<Value<'lua>>
    where
        T: IntoLua<'lua>,
    {
        match result {
            Ok(value) => value.into_lua(lua),
            Err(BindingError::Lua(err)) => Err(err),
            Err(err) => match self {
                FailurePolicy::Silent => {
                    debug!("Binding call rejected: {}", err);
                    Ok(Value::Nil)
                }
                FailurePolicy::Strict => Err(mlua::Error::external(err)),
            },
        }
    }
}

/// Errors from loading or running scripts.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lua(#[from] mlua::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let err = BindingError::NotAMatrix {
            op: "inverse",
            position: 1,
            got: "number",
        };
        assert_eq!(err.to_string(), "inverse: argument 1 is not a matrix (got number)");

        let err = BindingError::Length { op: "from", got: 15 };
        assert_eq!(err.to_string(), "from: expected 16 values, got 15");
    }

    #[test]
    fn silent_policy_yields_nil() {
        let lua = Lua::new();
        let err = BindingError::Arity {
            op: "multiply",
            expected: 2,
            got: 1,
        };
        let value = FailurePolicy::Silent.finish::<i64>(&lua, Err(err)).unwrap();
        assert!(matches!(value, Value::Nil));
    }

    #[test]
    fn strict_policy_raises() {
        let lua = Lua::new();
        let err = BindingError::NotATable {
            op: "from",
            got: "string",
        };
        let raised = FailurePolicy::Strict.finish::<i64>(&lua, Err(err)).unwrap_err();
        assert!(raised.to_string().contains("from: expected a table, got string"));
    }

    #[test]
    fn policy_defaults_to_silent_without_app_data() {
        let lua = Lua::new();
        assert_eq!(FailurePolicy::of(&lua), FailurePolicy::Silent);
        lua.set_app_data(FailurePolicy::Strict);
        assert_eq!(FailurePolicy::of(&lua), FailurePolicy::Strict);
    }
}
