//! Cleanup of raw verse markup before tokenizing.
//!
//! Verse text arrives as lightly marked-up HTML: verse numbers wrapped in
//! `<sup>` tags, formatting tags, entities, and a few transcription
//! artifacts (`_`, literal `/n`).

use std::borrow::Cow;

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// How verse-number tags are treated by [`sanitize_verse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupTags {
    /// Keep numeric verse tags as compact `<sup>N</sup>` followed by a space.
    Keep,
    /// Remove verse tags together with their content.
    Strip,
}

static PADDED_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&\s*(nbsp|amp|lt|gt|quot)\s*;").unwrap());

static SUP_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<\s*sup\b[^>]*>([^<]*)<\s*/\s*sup\s*>").unwrap());

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").unwrap());

/// Rewrite `& nbsp ;` style entities into their compact form.
pub fn compact_entities(text: &str) -> Cow<'_, str> {
    PADDED_ENTITY.replace_all(text, |caps: &Captures| {
        format!("&{};", caps[1].to_ascii_lowercase())
    })
}

/// Decode the handful of entities verse text carries (`&nbsp;`, `&amp;`,
/// `&lt;`, `&gt;`, `&quot;`), compact or padded, in a single pass.
pub fn decode_basic_entities(text: &str) -> Cow<'_, str> {
    PADDED_ENTITY.replace_all(text, |caps: &Captures| {
        match caps[1].to_ascii_lowercase().as_str() {
            "nbsp" => " ",
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            _ => "\"",
        }
        .to_string()
    })
}

/// Clean raw verse markup.
///
/// Numeric `<sup>` tags are kept or stripped according to `sup`; every other
/// tag is removed, entities are decoded, `_` and stray `/n` are dropped and
/// whitespace is collapsed.
pub fn sanitize_verse(text: &str, sup: SupTags) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let text = compact_entities(text);

    let text = SUP_ELEMENT.replace_all(&text, |caps: &Captures| {
        let content = caps[1].trim();
        let numeric = !content.is_empty() && content.chars().all(|c| c.is_ascii_digit());
        match sup {
            SupTags::Keep if numeric => format!(" <sup>{}</sup> ", content),
            _ => " ".to_string(),
        }
    });

    let text = ANY_TAG.replace_all(&text, |caps: &Captures| {
        let tag = &caps[0];
        if sup == SupTags::Keep && (tag == "<sup>" || tag == "</sup>") {
            tag.to_string()
        } else {
            " ".to_string()
        }
    });

    let text = decode_html_entities(&text);
    let text = text.replace('_', "").replace("/n", " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain verse text with verse numbers and markup removed.
pub fn plain_text(text: &str) -> String {
    sanitize_verse(text, SupTags::Strip)
}
