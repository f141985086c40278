//! Angle-bracket tag tokenizer for overlay caption templates.
//!
//! This crate splits a caption template such as `"Day <Date(dd)> over <Body>"`
//! into an ordered list of [`Token`]s: literal spans that are copied verbatim,
//! and tag references that a renderer resolves to dynamic text.
//!
//! # Example
//!
//! ```rust
//! use caption_tokenizer::{tokenize, Token};
//!
//! let tokens = tokenize("start <token(p1, p2)> end");
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::literal("start "),
//!         Token::tag("token", ["p1", "p2"]),
//!         Token::literal(" end"),
//!     ]
//! );
//! ```
//!
//! # Tag Syntax
//!
//! - `<Name>` - a tag without arguments
//! - `<Name(arg1, arg2)>` - a tag with comma separated arguments; surrounding
//!   whitespace is trimmed from every argument
//!
//! Tags do not nest. A `<` seen while a tag is still open abandons the open
//! tag, which is emitted as literal text exactly as it appeared in the source.
//! The same applies to a tag left open at the end of the input, and to a tag
//! with an empty name such as `<>`.
//!
//! Delimiters outside of the state where they are meaningful are ordinary
//! characters: `>` outside a tag, `(` outside a tag, and `,` or `)` outside an
//! argument list are all kept as text.

use std::fmt;

/// A single unit of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Verbatim template text.
    Literal(String),

    /// A tag reference. `args` is empty when no parenthesized arguments were
    /// supplied.
    Tag { key: String, args: Vec<String> },
}

impl Token {
    /// Creates a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        Token::Literal(text.into())
    }

    /// Creates a tag token with the given arguments.
    pub fn tag<I, S>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Token::Tag {
            key: key.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a tag token without arguments.
    pub fn bare(key: impl Into<String>) -> Self {
        Token::Tag {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Returns true for literal tokens.
    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }

    /// The literal text, or the tag name for tag tokens.
    pub fn key(&self) -> &str {
        match self {
            Token::Literal(text) => text,
            Token::Tag { key, .. } => key,
        }
    }

    /// Tag arguments. `None` for literals and for tags without arguments.
    pub fn args(&self) -> Option<&[String]> {
        match self {
            Token::Tag { args, .. } if !args.is_empty() => Some(args),
            _ => None,
        }
    }
}

/// Literals print verbatim; tags print in bracket notation, e.g. `<Key(a,b)>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => f.write_str(text),
            Token::Tag { key, args } if args.is_empty() => write!(f, "<{}>", key),
            Token::Tag { key, args } => write!(f, "<{}({})>", key, args.join(",")),
        }
    }
}

/// Scanner state while walking the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Outside of any tag; characters accumulate as literal text.
    Undefined,
    /// After `<`; characters accumulate into the tag name.
    InTag,
    /// After `(` inside a tag; characters accumulate into the current argument.
    InParams,
}

/// Splits a template into literal and tag tokens.
///
/// Never fails: malformed markup degrades to literal text. An empty template
/// yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    for ch in text.chars() {
        tokenizer.feed(ch);
    }
    tokenizer.finish()
}

/// Character-at-a-time state machine behind [`tokenize`].
struct Tokenizer {
    state: ParseState,
    /// Literal text in `Undefined`, the tag name otherwise.
    buffer: String,
    /// The argument being collected in `InParams`.
    arg: String,
    args: Vec<String>,
    /// Source text of the open tag, starting at its `<`.
    raw: String,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            state: ParseState::Undefined,
            buffer: String::new(),
            arg: String::new(),
            args: Vec::new(),
            raw: String::new(),
            tokens: Vec::new(),
        }
    }

    fn feed(&mut self, ch: char) {
        match (self.state, ch) {
            (_, '<') => {
                self.flush_pending();
                self.raw.push('<');
                self.state = ParseState::InTag;
            }
            (ParseState::InTag, '>') => {
                self.raw.push('>');
                self.close_tag();
            }
            (ParseState::InTag, '(') => {
                self.raw.push('(');
                self.state = ParseState::InParams;
            }
            (ParseState::InParams, ',') => {
                self.raw.push(',');
                self.close_arg();
            }
            (ParseState::InParams, ')') => {
                self.raw.push(')');
                self.close_arg();
                self.state = ParseState::InTag;
            }
            (ParseState::InParams, other) => {
                self.raw.push(other);
                self.arg.push(other);
            }
            (ParseState::InTag, other) => {
                self.raw.push(other);
                self.buffer.push(other);
            }
            (ParseState::Undefined, other) => self.buffer.push(other),
        }
    }

    /// Emits whatever is pending as a literal and resets to `Undefined`.
    fn flush_pending(&mut self) {
        match self.state {
            ParseState::Undefined => {
                if !self.buffer.is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.tokens.push(Token::Literal(text));
                }
            }
            ParseState::InTag | ParseState::InParams => {
                let raw = std::mem::take(&mut self.raw);
                self.tokens.push(Token::Literal(raw));
            }
        }
        self.reset();
    }

    fn close_arg(&mut self) {
        let arg = std::mem::take(&mut self.arg);
        self.args.push(arg.trim().to_string());
    }

    fn close_tag(&mut self) {
        if self.buffer.is_empty() {
            let raw = std::mem::take(&mut self.raw);
            self.tokens.push(Token::Literal(raw));
        } else {
            let key = std::mem::take(&mut self.buffer);
            let args = std::mem::take(&mut self.args);
            self.tokens.push(Token::Tag { key, args });
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.state = ParseState::Undefined;
        self.buffer.clear();
        self.arg.clear();
        self.args.clear();
        self.raw.clear();
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_pending();
        self.tokens
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tag_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9+]{0,10}"
    }

    fn plain_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,:;!?()>'\"]{1,50}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn text_without_open_marker_is_single_literal(content in plain_text()) {
            prop_assert_eq!(tokenize(&content), vec![Token::Literal(content)]);
        }

        #[test]
        fn adjacent_tags_yield_one_token_each(names in prop::collection::vec(tag_name(), 1..8)) {
            let template: String = names.iter().map(|n| format!("<{}>", n)).collect();
            let expected: Vec<Token> = names.iter().map(|n| Token::bare(n.as_str())).collect();
            prop_assert_eq!(tokenize(&template), expected);
        }

        #[test]
        fn display_reconstructs_well_formed_templates(
            before in "[a-z ]{0,10}",
            key in tag_name(),
            args in prop::collection::vec("[a-z0-9]{1,5}", 0..4),
            after in "[a-z ]{0,10}",
        ) {
            let tag = Token::tag(key.as_str(), args.iter().map(String::as_str));
            let template = format!("{}{}{}", before, tag, after);
            let rebuilt: String = tokenize(&template).iter().map(ToString::to_string).collect();
            prop_assert_eq!(rebuilt, template);
        }
    }
}
