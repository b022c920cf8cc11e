//! Tokenizer for verse text.
//!
//! Splits text into word and punctuation tokens, lifting inline verse
//! markers (`<sup>N</sup>`) out of the text and into token metadata.
//!
//! At each position the lexer tries, in order:
//! 1. a verse marker `<sup>N</sup>`
//! 2. a run of letters, apostrophes and hyphen/dash characters
//! 3. a run of ASCII digits (dropped, these are stray verse numbers)
//! 4. a run of any other non-whitespace characters (punctuation)

use unicode_normalization::char::is_combining_mark;

use crate::sanitize::decode_basic_entities;
use crate::types::Token;

const MARKER_OPEN: &str = "<sup>";
const MARKER_CLOSE: &str = "</sup>";

const APOSTROPHES: &[char] = &['\'', '’', 'ʼ'];
const DASHES: &[char] = &['-', '‐', '‑', '‒', '–', '—'];

/// Tokenize verse text.
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_gaps(text)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize verse text, pairing each token with whether a gap separates it
/// from the token before.
///
/// Whitespace, a verse marker or a dropped number all count as a gap. The
/// first token always has one.
pub fn tokenize_with_gaps(text: &str) -> Vec<(Token, bool)> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let decoded = decode_basic_entities(text);

    let (_, _, tokens) = Lexer::new(&decoded).fold(
        (None, true, Vec::new()),
        |(verse, gap, mut tokens): (Option<u32>, bool, Vec<(Token, bool)>), (spaced, lexeme)| {
            match lexeme {
                Lexeme::Marker(number) => (Some(number), true, tokens),
                Lexeme::Number => (verse, true, tokens),
                Lexeme::Word(text) | Lexeme::Punct(text) => {
                    tokens.push((Token::new(text, verse), gap || spaced));
                    (verse, false, tokens)
                }
            }
        },
    );

    tokens
}

/// Token texts only, for callers that do not need verse metadata.
pub fn token_texts(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme<'a> {
    Marker(u32),
    Word(&'a str),
    Number,
    Punct(&'a str),
}

struct Lexer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Consume a run of chars matching `pred`, returning the run.
    fn take_while(&mut self, pred: impl Fn(&'a str, char) -> bool) -> &'a str {
        let start = self.pos;
        for (offset, c) in self.rest().char_indices() {
            if !pred(&self.text[start + offset..], c) {
                self.pos = start + offset;
                return &self.text[start..self.pos];
            }
        }
        self.pos = self.text.len();
        &self.text[start..]
    }
}

impl<'a> Iterator for Lexer<'a> {
    /// The lexeme, and whether whitespace came right before it.
    type Item = (bool, Lexeme<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let spaced = !self.take_while(|_, c| c.is_whitespace()).is_empty();

        let rest = self.rest();
        let first = rest.chars().next()?;

        if let Some((number, len)) = verse_marker(rest) {
            self.pos += len;
            return Some((spaced, Lexeme::Marker(number)));
        }

        if is_word_char(first) {
            let word = self.take_while(|_, c| is_word_char(c));
            return Some((spaced, Lexeme::Word(word)));
        }

        if first.is_ascii_digit() {
            self.take_while(|_, c| c.is_ascii_digit());
            return Some((spaced, Lexeme::Number));
        }

        let punct = self.take_while(|rest, c| {
            !c.is_whitespace()
                && !is_word_char(c)
                && !c.is_ascii_digit()
                && verse_marker(rest).is_none()
        });
        Some((spaced, Lexeme::Punct(punct)))
    }
}

/// Parse a `<sup>N</sup>` marker at the start of `text`, returning the verse
/// number and the marker's byte length.
fn verse_marker(text: &str) -> Option<(u32, usize)> {
    let inner = text.strip_prefix(MARKER_OPEN)?;
    let digits = inner
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(inner.len(), |(idx, _)| idx);
    if digits == 0 || !inner[digits..].starts_with(MARKER_CLOSE) {
        return None;
    }
    let number = inner[..digits].parse().ok()?;
    Some((number, MARKER_OPEN.len() + digits + MARKER_CLOSE.len()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c) || APOSTROPHES.contains(&c) || DASHES.contains(&c)
}
