//! Matrix bindings.
//!
//! Scripts see matrices as opaque userdata. Identity is the Rust type stored in
//! the userdata, so a value either decodes to a complete [`Matrix`] or is
//! rejected; there is no partially built handle.
//!
//! ```lua
//! local m = engine.mat.from({ 1,0,0,0, 0,1,0,0, 0,0,1,0, 5,6,7,1 })
//! local back = m:inverse() * m
//! print(back.__type) --> matrix
//! ```

use log::debug;
use mlua::{Function, Lua, MetaMethod, MultiValue, Result as LuaResult, Table, UserData, UserDataMethods, Value};

use super::args::Args;
use super::error::{BindingError, FailurePolicy};
use crate::engine::math::{Matrix, MATRIX_LEN};

/// Value of the `__type` marker field on every handle.
pub const MATRIX_TYPE: &str = "matrix";

/// Value scripts read back for the `__metatable` field.
pub const METATABLE_SENTINEL: &str = "matrix metatable is locked";

// Registry slots for the functions handed out by `m.inverse` and `m.transpose`.
const INVERSE_KEY: &str = "scriptbridge.mat.inverse";
const TRANSPOSE_KEY: &str = "scriptbridge.mat.transpose";

/// Script-side handle: userdata wrapping one matrix.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LuaMatrix(pub Matrix);

impl UserData for LuaMatrix {
    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_meta_method(MetaMethod::Index, |lua, _this, key: Value| index(lua, key));
        methods.add_meta_function(MetaMethod::Mul, matrix_multiply);
        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((decode(&a), decode(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| Ok(this.0.to_string()));
    }
}

/// Whether `value` is a matrix handle. Pure: nothing is consumed or copied.
pub fn is_matrix(value: &Value) -> bool {
    matches!(value, Value::UserData(ud) if ud.is::<LuaMatrix>())
}

fn decode(value: &Value) -> Option<Matrix> {
    match value {
        Value::UserData(ud) => ud.borrow::<LuaMatrix>().ok().map(|handle| handle.0),
        _ => None,
    }
}

/// Copy the matrix out of argument `position`.
pub fn matrix_arg(args: &Args, position: usize) -> Result<Matrix, BindingError> {
    let value = args.get(position);
    decode(value).ok_or_else(|| BindingError::NotAMatrix {
        op: args.op(),
        position,
        got: value.type_name(),
    })
}

/// Read sixteen column-major components from a script table.
fn read_components(lua: &Lua, op: &'static str, value: &Value) -> Result<Matrix, BindingError> {
    let Value::Table(table) = value else {
        return Err(BindingError::NotATable {
            op,
            got: value.type_name(),
        });
    };

    let len = table.raw_len() as usize;
    if len != MATRIX_LEN {
        return Err(BindingError::Length { op, got: len });
    }

    let mut components = [0.0f32; MATRIX_LEN];
    for (i, slot) in components.iter_mut().enumerate() {
        let element: Value = table.raw_get(i + 1)?;
        let got = element.type_name();
        let number = lua
            .coerce_number(element)?
            .ok_or(BindingError::NonNumeric { op, index: i + 1, got })?;
        *slot = number as f32;
    }
    Ok(Matrix::from_cols_array(&components))
}

fn finish<'lua>(lua: &'lua Lua, result: Result<Matrix, BindingError>) -> LuaResult<Value<'lua>> {
    FailurePolicy::of(lua).finish(lua, result.map(LuaMatrix))
}

fn index<'lua>(lua: &'lua Lua, key: Value<'lua>) -> LuaResult<Value<'lua>> {
    let Value::String(key) = key else {
        return Ok(Value::Nil);
    };
    match key.as_bytes() {
        b"__type" => lua.create_string(MATRIX_TYPE).map(Value::String),
        b"__metatable" => lua.create_string(METATABLE_SENTINEL).map(Value::String),
        b"inverse" => lua.named_registry_value::<Function>(INVERSE_KEY).map(Value::Function),
        b"transpose" => lua.named_registry_value::<Function>(TRANSPOSE_KEY).map(Value::Function),
        _ => Ok(Value::Nil),
    }
}

pub fn matrix_identity<'lua>(lua: &'lua Lua, _: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    finish(lua, Ok(Matrix::identity()))
}

pub fn matrix_zero<'lua>(lua: &'lua Lua, _: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    finish(lua, Ok(Matrix::zero()))
}

pub fn matrix_from<'lua>(lua: &'lua Lua, args: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    let result = Args::exact("from", args, 1).and_then(|args| read_components(lua, args.op(), args.get(1)));
    finish(lua, result)
}

pub fn matrix_multiply<'lua>(lua: &'lua Lua, args: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    let result = Args::exact("multiply", args, 2).and_then(|args| {
        let a = matrix_arg(&args, 1)?;
        let b = matrix_arg(&args, 2)?;
        Ok(a.multiply(&b))
    });
    finish(lua, result)
}

pub fn matrix_inverse<'lua>(lua: &'lua Lua, args: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    let result = Args::exact("inverse", args, 1).and_then(|args| matrix_arg(&args, 1));
    let result = result.map(|m| m.inverse());
    finish(lua, result)
}

pub fn matrix_transpose<'lua>(lua: &'lua Lua, args: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    let result = Args::exact("transpose", args, 1).and_then(|args| matrix_arg(&args, 1));
    finish(lua, result.map(|m| m.transpose()))
}

/// Sixteen numbers, column-major. Inverse of `from`.
pub fn matrix_totable<'lua>(lua: &'lua Lua, args: MultiValue<'lua>) -> LuaResult<Value<'lua>> {
    let result = Args::exact("totable", args, 1)
        .and_then(|args| matrix_arg(&args, 1))
        .and_then(|m| Ok(lua.create_sequence_from(m.to_cols_array())?));
    FailurePolicy::of(lua).finish(lua, result)
}

/// Install the `mat` table into `namespace`.
///
/// `inverse` and `transpose` are created once; handles return these same
/// functions from field access, so `m.inverse == engine.mat.inverse`.
pub fn install(lua: &Lua, namespace: &Table) -> LuaResult<()> {
    let inverse = lua.create_function(matrix_inverse)?;
    let transpose = lua.create_function(matrix_transpose)?;
    lua.set_named_registry_value(INVERSE_KEY, inverse.clone())?;
    lua.set_named_registry_value(TRANSPOSE_KEY, transpose.clone())?;

    let mat = lua.create_table()?;
    mat.set("identity", lua.create_function(matrix_identity)?)?;
    mat.set("zero", lua.create_function(matrix_zero)?)?;
    mat.set("from", lua.create_function(matrix_from)?)?;
    mat.set("multiply", lua.create_function(matrix_multiply)?)?;
    mat.set("inverse", inverse)?;
    mat.set("transpose", transpose)?;
    mat.set("totable", lua.create_function(matrix_totable)?)?;
    namespace.set("mat", mat)?;
    debug!("Installed matrix bindings");
    Ok(())
}
