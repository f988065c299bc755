//! Argument frames for bound functions.
//!
//! A frame takes ownership of everything the runtime passed in and checks the
//! count once on entry. Each bound function hands exactly one value back, so
//! every exit path leaves the runtime stack at the same depth.

use mlua::{MultiValue, Value};

use super::error::BindingError;

pub struct Args<'lua> {
    op: &'static str,
    values: Vec<Value<'lua>>,
}

impl<'lua> Args<'lua> {
    /// Enter a frame for `op`, requiring exactly `expected` arguments.
    pub fn exact(op: &'static str, args: MultiValue<'lua>, expected: usize) -> Result<Self, BindingError> {
        let values: Vec<Value<'lua>> = args.into_iter().collect();
        if values.len() != expected {
            return Err(BindingError::Arity {
                op,
                expected,
                got: values.len(),
            });
        }
        Ok(Self { op, values })
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at 1-based `position`. The arity check on entry makes every
    /// position up to `len()` valid.
    pub fn get(&self, position: usize) -> &Value<'lua> {
        &self.values[position - 1]
    }
}
