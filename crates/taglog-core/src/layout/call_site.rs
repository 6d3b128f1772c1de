//! The `call` token: renders the caller identity attached to a logger

use crate::engine::{Context, LogEvent};
use crate::identity::{CLASS_NAME_KEY, FUNC_NAME_KEY};

use super::tokens::Token;

/// Reserved token name for the call-site fragment
pub const CALL_TOKEN: &str = "call";

/// Render the call-site fragment for a context map
///
/// Empty values count as absent, so an anonymous function renders nothing.
pub fn render_call_site(context: &Context) -> String {
    let present = |key: &str| context.get(key).map(String::as_str).filter(|v| !v.is_empty());

    match (present(CLASS_NAME_KEY), present(FUNC_NAME_KEY)) {
        (Some(class), Some(func)) => format!(" [{}.{}()]", class, func),
        (Some(class), None) => format!(" [{}]", class),
        (None, Some(func)) => format!(" [{}()]", func),
        (None, None) => String::new(),
    }
}

/// The `call` token as a table entry
pub fn call_site_token() -> Token {
    Token::new(|event: &LogEvent| render_call_site(&event.context))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(pairs: &[(&str, &str)]) -> Context {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_class_and_function() {
        let c = ctx(&[("className", "Foo"), ("funcName", "bar")]);
        assert_eq!(render_call_site(&c), " [Foo.bar()]");
    }

    #[test]
    fn test_class_only() {
        assert_eq!(render_call_site(&ctx(&[("className", "Foo")])), " [Foo]");
    }

    #[test]
    fn test_function_only() {
        assert_eq!(render_call_site(&ctx(&[("funcName", "bar")])), " [bar()]");
    }

    #[test]
    fn test_neither() {
        assert_eq!(render_call_site(&Context::new()), "");
    }

    #[test]
    fn test_empty_values_are_absent() {
        assert_eq!(render_call_site(&ctx(&[("funcName", "")])), "");
        assert_eq!(
            render_call_site(&ctx(&[("className", "Foo"), ("funcName", "")])),
            " [Foo]"
        );
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let c = ctx(&[("requestId", "r-1"), ("funcName", "bar")]);
        assert_eq!(render_call_site(&c), " [bar()]");
    }

    #[test]
    fn test_token_reads_event_context() {
        use crate::engine::Level;

        let event = LogEvent::new(Level::Info, "app", "hi")
            .with_context(ctx(&[("className", "Service")]));
        assert_eq!(call_site_token().render(&event), " [Service]");
    }
}
