//! Layouts: how a log event becomes a line of text
//!
//! - `Layout` describes a layout in configuration (pattern + tokens)
//! - `build_layout` assembles the default call-site aware pattern layout
//! - `CompiledLayout` is the engine-side form, parsed once and rendered per event

mod builder;
mod call_site;
mod pattern;
mod tokens;

use serde::Deserialize;

use crate::engine::{EngineResult, LogEvent};

pub use builder::{build_layout, DEFAULT_PATTERN};
pub use call_site::{call_site_token, render_call_site, CALL_TOKEN};
pub use pattern::CompiledPattern;
pub use tokens::{Token, TokenFn, TokenTable};

const BASIC_PATTERN: &str = "[%d] [%p] %c - %m";
const PASS_THROUGH_PATTERN: &str = "%m";

/// Layout description as it appears in a configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Layout {
    /// `[date] [LEVEL] category - message`
    #[default]
    Basic,
    /// The message only
    MessagePassThrough,
    /// A pattern with its token table
    Pattern {
        pattern: String,
        #[serde(default)]
        tokens: TokenTable,
    },
}

impl Layout {
    /// The pattern string of a pattern layout
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Layout::Pattern { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    pub fn tokens(&self) -> Option<&TokenTable> {
        match self {
            Layout::Pattern { tokens, .. } => Some(tokens),
            _ => None,
        }
    }

    /// Parse the layout for rendering
    pub fn compile(&self) -> EngineResult<CompiledLayout> {
        let compiled = match self {
            Layout::Basic => CompiledPattern::compile(BASIC_PATTERN, TokenTable::new())?,
            Layout::MessagePassThrough => {
                CompiledPattern::compile(PASS_THROUGH_PATTERN, TokenTable::new())?
            }
            Layout::Pattern { pattern, tokens } => CompiledPattern::compile(pattern, tokens.clone())?,
        };
        Ok(CompiledLayout { pattern: compiled })
    }
}

/// A layout ready to render events
#[derive(Debug, Clone)]
pub struct CompiledLayout {
    pattern: CompiledPattern,
}

impl CompiledLayout {
    pub fn render(&self, event: &LogEvent) -> String {
        self.pattern.render(event)
    }

    pub fn source(&self) -> &str {
        self.pattern.source()
    }
}
