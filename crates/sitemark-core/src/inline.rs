use crate::ast::{Inline, InlineSeq};
use once_cell::sync::Lazy;
use regex::Regex;

// The regex crate has no lookbehind, so the link pattern optionally consumes
// a leading `!` and the link pass skips those matches; the image pass then
// claims them.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!?\[([^\[\]]*)\]\(([^()]*)\)").unwrap());
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Tokenizes inline text into an ordered span sequence.
///
/// Lines are trimmed and rejoined with single spaces first, so multi-line
/// input collapses to one line. Extraction order is fixed: links, images,
/// then delimiter splits for code, bold, and italic. Odd delimiter counts are
/// not an error; the trailing styled span absorbs the rest of the text.
pub fn tokenize_inline(text: &str) -> InlineSeq {
    let normalized = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut spans = vec![Inline::Text(normalized)];
    spans = extract_links(spans);
    spans = extract_images(spans);
    spans = split_delimiter(spans, "`", Inline::CodeSpan);
    spans = split_delimiter(spans, "**", Inline::Strong);
    split_delimiter(spans, "_", Inline::Emph)
}

fn extract_links(spans: InlineSeq) -> InlineSeq {
    split_matches(spans, &LINK_PATTERN, true, |text, url| Inline::Link {
        text,
        url,
    })
}

fn extract_images(spans: InlineSeq) -> InlineSeq {
    split_matches(spans, &IMAGE_PATTERN, false, |alt, url| Inline::Image {
        alt,
        url,
    })
}

/// Splits every text span around the pattern's matches, left to right and
/// non-overlapping. Empty fragments before and after a match are dropped.
fn split_matches(
    spans: InlineSeq,
    pattern: &Regex,
    skip_bang: bool,
    build: impl Fn(String, String) -> Inline,
) -> InlineSeq {
    let mut out = Vec::new();
    for span in spans {
        let text = match span {
            Inline::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let mut cursor = 0;
        for caps in pattern.captures_iter(&text) {
            let found = caps.get(0).unwrap();
            if skip_bang && found.as_str().starts_with('!') {
                continue;
            }
            if found.start() > cursor {
                out.push(Inline::Text(text[cursor..found.start()].to_string()));
            }
            out.push(build(caps[1].to_string(), caps[2].to_string()));
            cursor = found.end();
        }
        if cursor == 0 {
            out.push(Inline::Text(text));
        } else if cursor < text.len() {
            out.push(Inline::Text(text[cursor..].to_string()));
        }
    }
    out
}

/// Splits every text span on `delimiter`; odd-numbered pieces take the styled
/// kind. Non-text spans pass through untouched. Only leading and trailing
/// empty pieces are dropped.
fn split_delimiter(spans: InlineSeq, delimiter: &str, styled: fn(String) -> Inline) -> InlineSeq {
    let mut out = Vec::new();
    for span in spans {
        let text = match span {
            Inline::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let pieces: Vec<&str> = text.split(delimiter).collect();
        let last = pieces.len() - 1;
        for (idx, piece) in pieces.iter().enumerate() {
            if piece.is_empty() && (idx == 0 || idx == last) {
                continue;
            }
            if idx % 2 == 1 {
                out.push(styled(piece.to_string()));
            } else {
                out.push(Inline::Text(piece.to_string()));
            }
        }
    }
    out
}
