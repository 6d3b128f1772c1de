//! Pattern compilation and rendering
//!
//! Supported specifiers:
//! - `%d` / `%d{FORMAT}` timestamp (`ISO8601`, `ISO8601_WITH_TZ_OFFSET`,
//!   `ABSOLUTETIME`/`ABSOLUTE`, `DATETIME`/`DATE`)
//! - `%p` level, `%c` category, `%m` message, `%n` newline, `%z` process id
//! - `%x{name}` token from the layout's token table
//! - `%X{key}` value from the event context
//! - `%%` a literal percent sign
//!
//! Any other specifier is copied through literally.

use crate::engine::{EngineError, EngineResult, LogEvent};

use super::tokens::TokenTable;

const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const ISO8601_WITH_TZ_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";
const ABSOLUTETIME: &str = "%H:%M:%S%.3f";
const DATETIME: &str = "%d %m %Y %H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Date(&'static str),
    Level,
    Category,
    Message,
    Newline,
    Pid,
    Token(String),
    Context(String),
}

/// A pattern parsed once and rendered per event
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    tokens: TokenTable,
}

impl CompiledPattern {
    /// Parse `pattern`, binding `%x{..}` references to `tokens`
    pub fn compile(pattern: &str, tokens: TokenTable) -> EngineResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            let Some(spec) = chars.next() else {
                literal.push('%');
                break;
            };

            let segment = match spec {
                '%' => {
                    literal.push('%');
                    continue;
                }
                'd' => {
                    let format = if chars.peek() == Some(&'{') {
                        let name = read_braced(pattern, &mut chars)?;
                        date_format(pattern, &name)?
                    } else {
                        ISO8601
                    };
                    Segment::Date(format)
                }
                'p' => Segment::Level,
                'c' => Segment::Category,
                'm' => Segment::Message,
                'n' => Segment::Newline,
                'z' => Segment::Pid,
                'x' | 'X' if chars.peek() == Some(&'{') => {
                    let name = read_braced(pattern, &mut chars)?;
                    if spec == 'x' {
                        Segment::Token(name)
                    } else {
                        Segment::Context(name)
                    }
                }
                other => {
                    literal.push('%');
                    literal.push(other);
                    continue;
                }
            };

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// Render an event. Never fails: unknown tokens and context keys render empty.
    pub fn render(&self, event: &LogEvent) -> String {
        let mut out = String::with_capacity(self.source.len() + event.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Date(format) => out.push_str(&event.timestamp.format(format).to_string()),
                Segment::Level => out.push_str(event.level.as_str()),
                Segment::Category => out.push_str(&event.category),
                Segment::Message => out.push_str(&event.message),
                Segment::Newline => out.push('\n'),
                Segment::Pid => out.push_str(&std::process::id().to_string()),
                Segment::Token(name) => out.push_str(&self.tokens.render(name, event)),
                Segment::Context(key) => out.push_str(event.context_value(key).unwrap_or_default()),
            }
        }
        out
    }
}

fn read_braced(
    pattern: &str,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> EngineResult<String> {
    // consume '{'
    chars.next();
    let mut name = String::new();
    for c in chars.by_ref() {
        if c == '}' {
            return Ok(name);
        }
        name.push(c);
    }
    Err(EngineError::invalid_pattern(pattern, "unterminated '{'"))
}

fn date_format(pattern: &str, name: &str) -> EngineResult<&'static str> {
    match name {
        "ISO8601" => Ok(ISO8601),
        "ISO8601_WITH_TZ_OFFSET" => Ok(ISO8601_WITH_TZ_OFFSET),
        "ABSOLUTETIME" | "ABSOLUTE" => Ok(ABSOLUTETIME),
        "DATETIME" | "DATE" => Ok(DATETIME),
        other => Err(EngineError::invalid_pattern(
            pattern,
            format!("unsupported date format {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Context, Level};
    use chrono::{Local, TimeZone};

    fn event() -> LogEvent {
        let mut ctx = Context::new();
        ctx.insert("requestId".to_string(), "r-7".to_string());
        LogEvent::new(Level::Warn, "app.db", "slow query")
            .with_context(ctx)
            .with_timestamp(Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap())
    }

    fn render(pattern: &str) -> String {
        CompiledPattern::compile(pattern, TokenTable::new())
            .unwrap()
            .render(&event())
    }

    #[test]
    fn test_basic_specifiers() {
        assert_eq!(render("[%p] [%c] %m%n"), "[WARN] [app.db] slow query\n");
    }

    #[test]
    fn test_dates() {
        assert_eq!(render("%d"), "2024-03-09T14:05:06.000");
        assert_eq!(render("%d{ISO8601}"), "2024-03-09T14:05:06.000");
        assert_eq!(render("%d{ABSOLUTE}"), "14:05:06.000");
        assert_eq!(render("%d{DATE}"), "09 03 2024 14:05:06.000");
    }

    #[test]
    fn test_unknown_date_format_rejected() {
        let err = CompiledPattern::compile("%d{yyyy}", TokenTable::new()).unwrap_err();
        assert!(matches!(err, EngineError::InvalidPattern { .. }));
    }

    #[test]
    fn test_unterminated_brace_rejected() {
        assert!(CompiledPattern::compile("%x{call", TokenTable::new()).is_err());
        assert!(CompiledPattern::compile("%d{ISO", TokenTable::new()).is_err());
    }

    #[test]
    fn test_tokens_and_context() {
        let tokens = TokenTable::new().with_token("who", |e| e.category.to_uppercase());
        let compiled = CompiledPattern::compile("%x{who} %X{requestId} %x{none}|%X{none}|", tokens).unwrap();
        assert_eq!(compiled.render(&event()), "APP.DB r-7 ||");
    }

    #[test]
    fn test_literals_and_escapes() {
        assert_eq!(render("100%% %q %x done%"), "100% %q %x done%");
    }

    #[test]
    fn test_pid() {
        assert_eq!(render("%z"), std::process::id().to_string());
    }
}
