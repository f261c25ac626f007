//! Parsing of serialized skill lists
//!
//! Corpus files store skills as a list literal inside a single field, e.g.
//! `['Python', 'Data Analysis']` or `["SQL"]`. The text is parsed with a
//! strict grammar and never evaluated:
//!
//! ```text
//! list   := '[' ws ( string ws ( ',' ws string ws )* ( ',' ws )? )? ']'
//! string := '\'' chars '\'' | '"' chars '"'
//! ```
//!
//! JSON arrays of strings are accepted first so `\uXXXX` escapes work.

use std::iter::Peekable;
use std::str::Chars;

use crate::bail_tags;
use crate::candidate::{tag_set, TagSet};
use crate::error::Result;

/// Parse a serialized tag list into a normalized [`TagSet`].
///
/// Blank input means "no tags" and yields an empty set.
pub fn parse_tag_list(input: &str) -> Result<TagSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(TagSet::new());
    }
    if !trimmed.starts_with('[') {
        bail_tags!(input, "expected a list starting with '['");
    }

    if let Ok(items) = serde_json::from_str::<Vec<String>>(trimmed) {
        return Ok(tag_set(items));
    }

    let items = LiteralParser::new(input, trimmed).parse()?;
    Ok(tag_set(items))
}

struct LiteralParser<'a> {
    input: &'a str,
    chars: Peekable<Chars<'a>>,
}

impl<'a> LiteralParser<'a> {
    fn new(input: &'a str, text: &'a str) -> Self {
        LiteralParser {
            input,
            chars: text.chars().peekable(),
        }
    }

    fn parse(mut self) -> Result<Vec<String>> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some(']') => {
                    self.chars.next();
                    break;
                }
                Some('\'') | Some('"') => {
                    items.push(self.string()?);
                    self.skip_ws();
                    match self.chars.next() {
                        Some(',') => continue,
                        Some(']') => break,
                        Some(c) => bail_tags!(self.input, format!("unexpected {:?} after item", c)),
                        None => bail_tags!(self.input, "unterminated list"),
                    }
                }
                Some(c) => bail_tags!(self.input, format!("expected a quoted string, found {:?}", c)),
                None => bail_tags!(self.input, "unterminated list"),
            }
        }

        self.skip_ws();
        if let Some(c) = self.chars.next() {
            bail_tags!(self.input, format!("trailing {:?} after list", c));
        }
        Ok(items)
    }

    fn string(&mut self) -> Result<String> {
        let quote = match self.chars.next() {
            Some(q) => q,
            None => bail_tags!(self.input, "unterminated list"),
        };
        let mut out = String::new();

        loop {
            match self.chars.next() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.chars.next() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(c @ ('\\' | '\'' | '"')) => out.push(c),
                    Some(c) => bail_tags!(self.input, format!("unsupported escape \\{}", c)),
                    None => bail_tags!(self.input, "unterminated string"),
                },
                Some(c) => out.push(c),
                None => bail_tags!(self.input, "unterminated string"),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.chars.next() {
            Some(c) if c == expected => Ok(()),
            _ => bail_tags!(self.input, format!("expected {:?}", expected)),
        }
    }

    fn skip_ws(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.chars.next();
        }
    }
}
