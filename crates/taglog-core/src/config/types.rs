//! Configuration structures handed to a logging engine

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::layout::Layout;

/// Engine configuration: named appenders and the categories routed to them
///
/// The factory passes this through untouched; the engine validates it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub appenders: BTreeMap<String, AppenderConfig>,
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appender(mut self, name: impl Into<String>, appender: AppenderConfig) -> Self {
        self.appenders.insert(name.into(), appender);
        self
    }

    pub fn with_category(mut self, name: impl Into<String>, category: CategoryConfig) -> Self {
        self.categories.insert(name.into(), category);
        self
    }
}

/// One appender: its type, optional layout, and type-specific options
#[derive(Debug, Clone, Deserialize)]
pub struct AppenderConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl AppenderConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            layout: None,
            options: BTreeMap::new(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// A category: the appenders it writes to and its severity threshold
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryConfig {
    pub appenders: Vec<String>,
    /// Level name, interpreted by the engine
    pub level: String,
}

impl CategoryConfig {
    pub fn new<I, S>(appenders: I, level: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            appenders: appenders.into_iter().map(Into::into).collect(),
            level: level.into(),
        }
    }
}
