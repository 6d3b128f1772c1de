//! Caller identity and the context entries derived from it

use thiserror::Error;

use crate::engine::Context;

/// Context key holding the caller's type name
pub const CLASS_NAME_KEY: &str = "className";

/// Context key holding the caller's function or method name
pub const FUNC_NAME_KEY: &str = "funcName";

/// Who is logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// A free function or closure. Anonymous functions have an empty name.
    Function { name: String },
    /// A value of some type, optionally narrowed to one of its methods
    Instance {
        class_name: String,
        method_name: Option<String>,
    },
}

impl Identity {
    pub fn function(name: impl Into<String>) -> Self {
        Identity::Function { name: name.into() }
    }

    pub fn instance(class_name: impl Into<String>) -> Self {
        Identity::Instance {
            class_name: class_name.into(),
            method_name: None,
        }
    }

    /// Attach an explicit method name
    ///
    /// Only instances take a method, and only a non-empty one. Function
    /// identities already name themselves, so the method is ignored.
    pub fn with_method(self, method: Option<&str>) -> Self {
        match self {
            Identity::Instance { class_name, .. } => Identity::Instance {
                class_name,
                method_name: method.filter(|m| !m.is_empty()).map(str::to_string),
            },
            function => function,
        }
    }

    /// The context entries this identity contributes to a logger
    pub fn context_entries(&self) -> Vec<(&'static str, String)> {
        match self {
            Identity::Function { name } => vec![(FUNC_NAME_KEY, name.clone())],
            Identity::Instance {
                class_name,
                method_name,
            } => {
                let mut entries = vec![(CLASS_NAME_KEY, class_name.clone())];
                if let Some(method) = method_name {
                    entries.push((FUNC_NAME_KEY, method.clone()));
                }
                entries
            }
        }
    }

    /// Write this identity's entries into a context map
    pub fn apply_to(&self, context: &mut Context) {
        for (key, value) in self.context_entries() {
            context.insert(key.to_string(), value);
        }
    }
}

/// The value passed as caller identity was neither a function nor a non-null object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("caller identity must be a function or a non-null object, got {kind}")]
pub struct InvalidIdentityError {
    kind: &'static str,
}

impl InvalidIdentityError {
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }

    /// What was passed instead (`null`, `number`, ...)
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}
