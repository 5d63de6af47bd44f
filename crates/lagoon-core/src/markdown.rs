//! Constrained markdown parsing for assistant replies.
//!
//! Only two markers are recognized: `[label](url)` links and `**bold**`
//! emphasis. Parsing runs in two independent passes, links first and
//! bold second, each re-scanning only fragments still tagged as plain
//! text. A bold marker inside a link label therefore stays literal in
//! the label; this matches the shipped behavior and must not change,
//! since flipping the pass order changes observable output.

use regex::Regex;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// One typed run of assistant text, in original left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Bold(String),
    Link { label: String, url: String },
}

/// Parses `text` into an ordered segment sequence.
///
/// Plain segments that are empty after trimming are dropped; segments
/// containing visible whitespace (e.g. `"Visit "`) are kept verbatim.
pub fn parse(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (fragment, is_plain) in split_links(text) {
        if is_plain {
            split_bold(&fragment, &mut segments);
        } else {
            segments.push(fragment);
        }
    }

    segments
        .into_iter()
        .filter(|segment| match segment {
            Segment::Plain(text) => !text.trim().is_empty(),
            _ => true,
        })
        .collect()
}

type Tagged = (Segment, bool);

/// First pass: extract links, tagging the in-between runs as plain.
fn split_links(text: &str) -> Vec<Tagged> {
    let mut fragments = Vec::new();
    let mut cursor = 0;

    for captures in LINK_RE.captures_iter(text) {
        let whole = captures.get(0).expect("capture group 0 always present");
        if whole.start() > cursor {
            fragments.push((Segment::Plain(text[cursor..whole.start()].to_string()), true));
        }
        fragments.push((
            Segment::Link {
                label: captures[1].to_string(),
                url: captures[2].to_string(),
            },
            false,
        ));
        cursor = whole.end();
    }

    if cursor < text.len() {
        fragments.push((Segment::Plain(text[cursor..].to_string()), true));
    }

    fragments
}

/// Second pass: split a plain fragment around bold markers.
fn split_bold(fragment: &Segment, out: &mut Vec<Segment>) {
    let Segment::Plain(text) = fragment else {
        out.push(fragment.clone());
        return;
    };

    let mut cursor = 0;
    for captures in BOLD_RE.captures_iter(text) {
        let whole = captures.get(0).expect("capture group 0 always present");
        if whole.start() > cursor {
            out.push(Segment::Plain(text[cursor..whole.start()].to_string()));
        }
        out.push(Segment::Bold(captures[1].to_string()));
        cursor = whole.end();
    }

    if cursor < text.len() {
        out.push(Segment::Plain(text[cursor..].to_string()));
    }
}
