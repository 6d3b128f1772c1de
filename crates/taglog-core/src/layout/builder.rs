//! Default layout assembly

use super::call_site::{call_site_token, CALL_TOKEN};
use super::tokens::TokenTable;
use super::Layout;

/// Date, severity and category prefix shared by every default layout
pub const DEFAULT_PATTERN: &str = "[%d] [%p] [%c]";

const CALL_REFERENCE: &str = "%x{call}";
const MESSAGE_SUFFIX: &str = ": %m %n";

/// Build the default pattern layout
///
/// The pattern is the date/severity/category prefix, then the call-site
/// token (when `include_call` is set), then a space and `user_pattern`
/// (when given), then the message and line terminator.
///
/// The token table always has a `call` entry. `extra_tokens` are merged
/// after it, so a caller can replace `call` by supplying the same name.
///
/// # Example
///
/// ```
/// use taglog_core::layout::build_layout;
///
/// let layout = build_layout(Some("%X{requestId}"), true, None);
/// assert_eq!(
///     layout.pattern(),
///     Some("[%d] [%p] [%c]%x{call} %X{requestId}: %m %n")
/// );
/// ```
pub fn build_layout(
    user_pattern: Option<&str>,
    include_call: bool,
    extra_tokens: Option<TokenTable>,
) -> Layout {
    let mut pattern = String::from(DEFAULT_PATTERN);
    if include_call {
        pattern.push_str(CALL_REFERENCE);
    }
    if let Some(user) = user_pattern {
        pattern.push(' ');
        pattern.push_str(user);
    }
    pattern.push_str(MESSAGE_SUFFIX);

    let mut tokens = TokenTable::new();
    tokens.insert(CALL_TOKEN, call_site_token());
    if let Some(extra) = extra_tokens {
        tokens.merge(extra);
    }

    Layout::Pattern { pattern, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Context, Level, LogEvent};

    fn event_with(pairs: &[(&str, &str)]) -> LogEvent {
        let ctx: Context = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LogEvent::new(Level::Info, "test", "msg").with_context(ctx)
    }

    fn presence_cases() -> Vec<LogEvent> {
        vec![
            event_with(&[("className", "Foo"), ("funcName", "bar")]),
            event_with(&[("className", "Foo")]),
            event_with(&[("funcName", "bar")]),
            event_with(&[]),
        ]
    }

    #[test]
    fn test_default_layout() {
        let layout = build_layout(None, true, None);
        assert_eq!(layout.pattern(), Some("[%d] [%p] [%c]%x{call}: %m %n"));
        assert!(layout.pattern().unwrap().contains("%x{call}: %m %n"));

        let tokens = layout.tokens().unwrap();
        assert_eq!(tokens.names().collect::<Vec<_>>(), vec!["call"]);
    }

    #[test]
    fn test_without_call_token() {
        let layout = build_layout(None, false, None);
        let pattern = layout.pattern().unwrap();
        assert_eq!(pattern, "[%d] [%p] [%c]: %m %n");
        assert!(!pattern.contains("%x{call}"));
        // The token stays available for custom patterns
        assert!(layout.tokens().unwrap().contains("call"));
    }

    #[test]
    fn test_user_pattern_inserted_after_call() {
        let layout = build_layout(Some("extra %m"), true, None);
        assert_eq!(
            layout.pattern(),
            Some("[%d] [%p] [%c]%x{call} extra %m: %m %n")
        );
    }

    #[test]
    fn test_empty_user_pattern_still_inserts_space() {
        let layout = build_layout(Some(""), true, None);
        assert_eq!(layout.pattern(), Some("[%d] [%p] [%c]%x{call} : %m %n"));
    }

    #[test]
    fn test_extra_tokens_merged() {
        let extra = TokenTable::new().with_token("pid", |_| "42".to_string());
        let layout = build_layout(None, true, Some(extra));
        let tokens = layout.tokens().unwrap();
        assert_eq!(tokens.names().collect::<Vec<_>>(), vec!["call", "pid"]);
    }

    #[test]
    fn test_extra_tokens_override_call() {
        let extra = TokenTable::new().with_token("call", |_| " <custom>".to_string());
        let layout = build_layout(None, true, Some(extra));
        let tokens = layout.tokens().unwrap();
        assert_eq!(tokens.len(), 1);
        for event in presence_cases() {
            assert_eq!(tokens.render("call", &event), " <custom>");
        }
    }

    #[test]
    fn test_idempotent() {
        let a = build_layout(Some("x"), true, None);
        let b = build_layout(Some("x"), true, None);
        assert_eq!(a.pattern(), b.pattern());

        let (ta, tb) = (a.tokens().unwrap(), b.tokens().unwrap());
        assert_eq!(ta.names().collect::<Vec<_>>(), tb.names().collect::<Vec<_>>());

        let expected = [" [Foo.bar()]", " [Foo]", " [bar()]", ""];
        for (event, want) in presence_cases().iter().zip(expected) {
            assert_eq!(ta.render("call", event), want);
            assert_eq!(tb.render("call", event), want);
        }
    }
}
