//! Splitting of a citation ("Juan 3:16-18") into clickable segments.
//!
//! Ranges are phrased the way they are read aloud: adjacent numbers become
//! "16 y 17", longer spans "del 16 al 18".

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::CitationSegment;

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(\d+(?:\s*-\s*\d+)?)(?:\s*:\s*(\d+(?:\s*-\s*\d+)?))?$").unwrap()
});

/// A chapter or verse component of a citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Single(u32),
    Range(u32, u32),
}

impl Span {
    fn parse(text: &str) -> Option<Self> {
        match text.split_once('-') {
            Some((start, end)) => Some(Self::Range(
                start.trim().parse().ok()?,
                end.trim().parse().ok()?,
            )),
            None => text.trim().parse().ok().map(Self::Single),
        }
    }
}

/// Split a citation into ordered segments.
///
/// References that do not parse come back as a single `book` segment holding
/// the whole trimmed string.
pub fn extract_citation_segments(reference: &str) -> Vec<CitationSegment> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Vec::new();
    }

    let pieces = match parse_reference(reference) {
        Some(pieces) => pieces,
        None => vec![("book".to_string(), reference.to_string())],
    };

    pieces
        .into_iter()
        .enumerate()
        .map(|(order, (id, label))| CitationSegment {
            id,
            label,
            order,
            appended: false,
        })
        .collect()
}

fn parse_reference(reference: &str) -> Option<Vec<(String, String)>> {
    let caps = REFERENCE.captures(reference)?;
    let book = caps.get(1)?.as_str().trim();
    let chapter = Span::parse(caps.get(2)?.as_str())?;
    let verses = match caps.get(3) {
        Some(m) => Some(Span::parse(m.as_str())?),
        None => None,
    };

    let mut pieces = vec![("book".to_string(), book.to_string())];
    push_span(&mut pieces, chapter, "chapter", "chapter");
    if let Some(verses) = verses {
        push_span(&mut pieces, verses, "verses", "verse");
    }
    Some(pieces)
}

fn push_span(
    pieces: &mut Vec<(String, String)>,
    span: Span,
    single_id: &str,
    range_prefix: &str,
) {
    let id = |suffix: &str| format!("{}_{}", range_prefix, suffix);
    match span {
        Span::Single(n) => pieces.push((single_id.to_string(), n.to_string())),
        Span::Range(start, end) if end.checked_sub(start) == Some(1) => {
            pieces.push((id("start"), start.to_string()));
            pieces.push((id("y"), "y".to_string()));
            pieces.push((id("end"), end.to_string()));
        }
        Span::Range(start, end) => {
            pieces.push((id("del"), "del".to_string()));
            pieces.push((id("start"), start.to_string()));
            pieces.push((id("al"), "al".to_string()));
            pieces.push((id("end"), end.to_string()));
        }
    }
}

/// The labels of `segments` joined back into readable text.
pub fn join_labels<'a>(segments: impl IntoIterator<Item = &'a CitationSegment>) -> String {
    segments
        .into_iter()
        .map(|s| s.label.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(segments: &[CitationSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.id.as_str()).collect()
    }

    fn labels(segments: &[CitationSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.label.as_str()).collect()
    }

    #[test]
    fn verse_range_uses_del_al() {
        let segments = extract_citation_segments("Juan 3:16-18");
        assert_eq!(
            ids(&segments),
            vec!["book", "chapter", "verse_del", "verse_start", "verse_al", "verse_end"]
        );
        assert_eq!(labels(&segments), vec!["Juan", "3", "del", "16", "al", "18"]);
        assert!(segments.iter().all(|s| !s.appended));
        assert_eq!(
            segments.iter().map(|s| s.order).collect::<Vec<_>>(),
            vec![0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn adjacent_verses_use_y() {
        let segments = extract_citation_segments("Romanos 8:28-29");
        assert_eq!(
            ids(&segments),
            vec!["book", "chapter", "verse_start", "verse_y", "verse_end"]
        );
        assert_eq!(labels(&segments), vec!["Romanos", "8", "28", "y", "29"]);
    }

    #[test]
    fn single_verse() {
        let segments = extract_citation_segments("Juan 11:35");
        assert_eq!(ids(&segments), vec!["book", "chapter", "verses"]);
        assert_eq!(labels(&segments), vec!["Juan", "11", "35"]);
    }

    #[test]
    fn book_with_spaces_and_number() {
        let segments = extract_citation_segments("1 Corintios 13:4-7");
        assert_eq!(labels(&segments)[0], "1 Corintios");
        assert_eq!(labels(&segments)[1], "13");
    }

    #[test]
    fn chapter_only_and_chapter_ranges() {
        let segments = extract_citation_segments("Salmos 23");
        assert_eq!(ids(&segments), vec!["book", "chapter"]);

        let segments = extract_citation_segments("Génesis 1-2");
        assert_eq!(
            ids(&segments),
            vec!["book", "chapter_start", "chapter_y", "chapter_end"]
        );

        let segments = extract_citation_segments("Génesis 1-3");
        assert_eq!(
            ids(&segments),
            vec!["book", "chapter_del", "chapter_start", "chapter_al", "chapter_end"]
        );
    }

    #[test]
    fn descending_range_uses_del_al() {
        let segments = extract_citation_segments("Juan 3:18-16");
        assert_eq!(labels(&segments), vec!["Juan", "3", "del", "18", "al", "16"]);
    }

    #[test]
    fn unparseable_reference_is_one_book_segment() {
        for reference in [
            "Salmos",
            "  Cantar de los Cantares  ",
            "Juan capítulo tres",
            "Juan3:16",
        ] {
            let segments = extract_citation_segments(reference);
            assert_eq!(segments.len(), 1);
            assert_eq!(segments[0].id, "book");
            assert_eq!(segments[0].label, reference.trim());
        }
    }

    #[test]
    fn empty_reference() {
        assert!(extract_citation_segments("   ").is_empty());
    }

    #[test]
    fn labels_join_back() {
        let segments = extract_citation_segments("Juan 3:16-18");
        assert_eq!(join_labels(&segments), "Juan 3 del 16 al 18");
    }
}
