//! Classifying caller-identity values

use std::any::type_name;
use std::marker::PhantomData;

use serde_json::Value;

use super::types::{Identity, InvalidIdentityError};

/// A value that can stand in for "who is logging"
///
/// Every accepted value classifies as exactly one [`Identity`] variant.
/// Values that are neither function-like nor object-like (`None`, JSON
/// `null`, numbers, strings, booleans) are rejected.
pub trait IdentityValue {
    fn identify(&self) -> Result<Identity, InvalidIdentityError>;
}

/// A function or closure used as caller identity
///
/// Named by the function's declared name. Closures, function pointers and
/// `dyn Fn*` objects have no name and identify as an empty string. Scalars
/// and strings are rejected.
pub struct FnRef<'a, F: ?Sized>(PhantomData<&'a F>);

/// Reference a function as caller identity
///
/// ```
/// use taglog_core::identity::{fn_ref, Identity, IdentityValue};
///
/// fn sync_peers() {}
///
/// let id = fn_ref(&sync_peers).identify().unwrap();
/// assert_eq!(id, Identity::function("sync_peers"));
/// ```
pub fn fn_ref<F: ?Sized>(_function: &F) -> FnRef<'_, F> {
    FnRef(PhantomData)
}

impl<F: ?Sized> IdentityValue for FnRef<'_, F> {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        let full = type_name::<F>();
        if let Some(kind) = primitive_kind(full) {
            return Err(InvalidIdentityError::new(kind));
        }
        if is_anonymous(full) {
            return Ok(Identity::function(""));
        }
        Ok(Identity::function(last_segment(full)))
    }
}

/// An object used as caller identity, named by its runtime type
///
/// Scalars and strings are rejected.
pub struct ObjRef<'a, T: ?Sized>(PhantomData<&'a T>);

/// Reference an object as caller identity
///
/// ```
/// use taglog_core::identity::{obj_ref, Identity, IdentityValue};
///
/// struct PeerTable;
///
/// let id = obj_ref(&PeerTable).identify().unwrap();
/// assert_eq!(id, Identity::instance("PeerTable"));
/// ```
pub fn obj_ref<T: ?Sized>(_object: &T) -> ObjRef<'_, T> {
    ObjRef(PhantomData)
}

impl<T: ?Sized> IdentityValue for ObjRef<'_, T> {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        let full = type_name::<T>();
        if let Some(kind) = primitive_kind(full) {
            return Err(InvalidIdentityError::new(kind));
        }
        Ok(Identity::instance(last_segment(full)))
    }
}

impl IdentityValue for Identity {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        Ok(self.clone())
    }
}

/// `None` is the null identity
impl<V: IdentityValue> IdentityValue for Option<V> {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        match self {
            Some(value) => value.identify(),
            None => Err(InvalidIdentityError::new("null")),
        }
    }
}

/// Dynamic values, for identities that arrive untyped (bindings, config)
impl IdentityValue for Value {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        match self {
            Value::Object(_) => Ok(Identity::instance("Object")),
            Value::Array(_) => Ok(Identity::instance("Array")),
            Value::Null => Err(InvalidIdentityError::new("null")),
            Value::Bool(_) => Err(InvalidIdentityError::new("boolean")),
            Value::Number(_) => Err(InvalidIdentityError::new("number")),
            Value::String(_) => Err(InvalidIdentityError::new("string")),
        }
    }
}

impl<V: IdentityValue + ?Sized> IdentityValue for &V {
    fn identify(&self) -> Result<Identity, InvalidIdentityError> {
        (**self).identify()
    }
}

/// Pointer and smart-pointer prefixes that do not change what a type names
const WRAPPERS: &[&str] = &[
    "&",
    "mut ",
    "*const ",
    "*mut ",
    "dyn ",
    "alloc::boxed::Box<",
    "alloc::sync::Arc<",
    "alloc::rc::Rc<",
    "core::pin::Pin<",
];

/// The pointee of a type path, with references and smart pointers peeled off
fn peel(mut name: &str) -> &str {
    while let Some(inner) = WRAPPERS.iter().find_map(|w| name.strip_prefix(w)) {
        name = inner;
    }
    name
}

/// Short name of a type path: generic arguments dropped, last `::` segment kept
fn last_segment(full: &str) -> String {
    // `->` would otherwise close a generic argument list
    let full = full.replace("->", "");
    let mut base = String::with_capacity(full.len());
    let mut depth = 0usize;
    for c in full.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => base.push(c),
            _ => {}
        }
    }
    let base = peel(&base);
    let base = base.split(" + ").next().unwrap_or(base).trim();
    base.rsplit("::").next().unwrap_or(base).to_string()
}

/// Closures, function pointers and `dyn Fn*` objects carry no usable name
fn is_anonymous(full: &str) -> bool {
    let inner = peel(full);
    if inner.contains("{{closure}}") {
        return true;
    }
    if inner.starts_with("fn(") || inner.starts_with("unsafe ") || inner.starts_with("extern ") {
        return true;
    }
    let inner = inner.strip_prefix("core::ops::function::").unwrap_or(inner);
    ["Fn(", "FnMut(", "FnOnce("]
        .iter()
        .any(|prefix| inner.starts_with(prefix))
}

/// Scalars and strings are values, not callers
fn primitive_kind(full: &str) -> Option<&'static str> {
    match peel(full).trim_end_matches('>') {
        "bool" => Some("boolean"),
        "char" | "str" | "alloc::string::String" => Some("string"),
        "()" => Some("unit"),
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" | "f32" | "f64" => Some("number"),
        _ => None,
    }
}
