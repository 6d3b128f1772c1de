//! Caller identity: who is logging
//!
//! A caller identity value is classified once into an [`Identity`], which
//! then contributes `className` / `funcName` entries to a logger's context.

mod classify;
mod types;

pub use classify::{fn_ref, obj_ref, FnRef, IdentityValue, ObjRef};
pub use types::{Identity, InvalidIdentityError, CLASS_NAME_KEY, FUNC_NAME_KEY};
