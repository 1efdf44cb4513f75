//! Logos-based lexer for release names.
//!
//! This module provides tokenization using the [logos](https://docs.rs/logos) crate,
//! which generates a fast lexer from regex patterns at compile time, plus the
//! byte-span helpers the extractors use to reason about claimed regions.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

/// Byte span in the input string.
///
/// Represents a range of bytes in the normalized input, used for tracking
/// token positions and extracting substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if this span overlaps with another.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if a byte offset falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The slice of `input` covered by this span.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// A detected bracket group in the input.
///
/// Represents a matched pair of brackets (either `[...]` or `(...)`) with
/// spans for both the entire group and the content inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketGroup {
    /// The span of the entire bracket group including brackets.
    pub outer_span: Span,
    /// The span of the content inside the brackets.
    pub inner_span: Span,
    /// The bracket character used ('[' or '(').
    pub bracket_char: char,
}

/// Find all bracket groups in the input.
///
/// Returns groups with their spans for both `[...]` and `(...)`, in the
/// order their closing bracket appears. Mismatched brackets are ignored.
pub fn find_bracket_groups(input: &str) -> Vec<BracketGroup> {
    let mut groups = Vec::new();
    let mut stack: Vec<(usize, char)> = Vec::new();

    for (i, ch) in input.char_indices() {
        match ch {
            '[' | '(' => {
                stack.push((i, ch));
            }
            ']' | ')' => {
                let open = if ch == ']' { '[' } else { '(' };
                if let Some(&(start, c)) = stack.last() {
                    if c == open {
                        stack.pop();
                        groups.push(BracketGroup {
                            outer_span: Span::new(start, i + 1),
                            inner_span: Span::new(start + 1, i),
                            bracket_char: open,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    groups
}

/// A lexer that tokenizes release names using Logos.
///
/// Characters no pattern recognises (punctuation, non-ASCII letters) are
/// dropped; every kept token carries its byte range in the input.
pub struct Lexer<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    input: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given input.
    ///
    /// Tokenizes the entire input string immediately using Logos.
    ///
    /// A hyphenated keyword glued to following letters (`DTS-HDChina`) is
    /// split at its last hyphen and the tail re-read as one word, so the
    /// keyword match cannot eat the start of a group name.
    pub fn new(input: &'src str) -> Self {
        let mut tokens = Vec::new();
        let mut resume = 0;
        for (token, span) in lex(input, 0) {
            if span.start < resume {
                continue;
            }
            match glued_hyphen(input, &token, &span) {
                Some(hyphen) => {
                    let bytes = input.as_bytes();
                    let end = span.end
                        + bytes[span.end..]
                            .iter()
                            .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'\'')
                            .count();
                    tokens.extend(lex(&input[span.start..hyphen], span.start));
                    tokens.push((Token::Hyphen, hyphen..hyphen + 1));
                    tokens.push((Token::Word(&input[hyphen + 1..end]), hyphen + 1..end));
                    resume = end;
                }
                None => tokens.push((token, span)),
            }
        }
        Self { tokens, input }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token<'src>, Range<usize>)] {
        &self.tokens
    }

    /// Get the original input string.
    pub fn input(&self) -> &'src str {
        self.input
    }
}

fn lex(input: &str, offset: usize) -> Vec<(Token<'_>, Range<usize>)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span.start + offset..span.end + offset)))
        .collect()
}

/// Offset of the last inner hyphen of a keyword token that runs straight
/// into a letter.
fn glued_hyphen(input: &str, token: &Token<'_>, span: &Range<usize>) -> Option<usize> {
    if matches!(token, Token::Word(_)) {
        return None;
    }
    if !input.as_bytes().get(span.end)?.is_ascii_alphabetic() {
        return None;
    }
    input[span.clone()]
        .rfind('-')
        .filter(|&i| i > 0)
        .map(|i| span.start + i)
}
