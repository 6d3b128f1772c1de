//! Named token functions referenced from patterns as `%x{name}`

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::engine::LogEvent;

/// Render function behind a token
pub type TokenFn = dyn Fn(&LogEvent) -> String + Send + Sync;

/// A cheaply cloneable token render function
#[derive(Clone)]
pub struct Token(Arc<TokenFn>);

impl Token {
    /// Wrap a render function
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&LogEvent) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(render))
    }

    /// A token that always renders the same text
    pub fn constant(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(move |_| value.clone())
    }

    pub fn render(&self, event: &LogEvent) -> String {
        (self.0)(event)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

/// Token name to render function mapping
///
/// Keys are kept sorted so two tables built from the same inputs compare
/// equal by key set and iterate identically.
#[derive(Clone, Default, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TokenTable {
    tokens: BTreeMap<String, Token>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, replacing any previous entry with the same name
    pub fn insert(&mut self, name: impl Into<String>, token: Token) -> Option<Token> {
        self.tokens.insert(name.into(), token)
    }

    /// Builder form of [`TokenTable::insert`]
    pub fn with_token<F>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&LogEvent) -> String + Send + Sync + 'static,
    {
        self.insert(name, Token::new(render));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.tokens.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tokens.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Merge `other` into this table. Entries from `other` win on collision.
    pub fn merge(&mut self, other: TokenTable) {
        self.tokens.extend(other.tokens);
    }

    /// Render a token by name, or an empty string if it is not defined
    pub fn render(&self, name: &str, event: &LogEvent) -> String {
        self.get(name).map(|t| t.render(event)).unwrap_or_default()
    }
}

impl fmt::Debug for TokenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.tokens.keys()).finish()
    }
}

/// Configuration files can only carry constant tokens
impl From<BTreeMap<String, String>> for TokenTable {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            tokens: map
                .into_iter()
                .map(|(name, value)| (name, Token::constant(value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Level;

    fn event() -> LogEvent {
        LogEvent::new(Level::Info, "test", "message")
    }

    #[test]
    fn test_constant_token() {
        let token = Token::constant("v1");
        assert_eq!(token.render(&event()), "v1");
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base = TokenTable::new()
            .with_token("call", |_| "base".to_string())
            .with_token("keep", |_| "kept".to_string());
        let extra = TokenTable::new()
            .with_token("call", |_| "override".to_string())
            .with_token("user", |e| e.category.clone());

        base.merge(extra);

        let e = event();
        assert_eq!(base.len(), 3);
        assert_eq!(base.render("call", &e), "override");
        assert_eq!(base.render("keep", &e), "kept");
        assert_eq!(base.render("user", &e), "test");
    }

    #[test]
    fn test_missing_token_renders_empty() {
        let table = TokenTable::new();
        assert!(table.is_empty());
        assert_eq!(table.render("nope", &event()), "");
    }

    #[test]
    fn test_from_string_map() {
        let mut map = BTreeMap::new();
        map.insert("env".to_string(), "prod".to_string());
        let table = TokenTable::from(map);
        assert!(table.contains("env"));
        assert_eq!(table.render("env", &event()), "prod");
        assert_eq!(format!("{:?}", table), "{\"env\"}");
    }
}
