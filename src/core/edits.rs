//! Formatting-preserving removal of syntax nodes
//!
//! Removals are computed as byte ranges over the original text and applied in
//! one pass that copies every untouched byte. A node that owns its lines takes
//! those lines with it (plus attached `//` comments above and any trailing
//! line comment); a node sharing a line with siblings takes its list
//! separator instead.

use std::ops::Range;

/// How members of the list a node belongs to are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Elements of composite literals
    Comma,
    /// Statements and struct fields
    Semicolon,
    /// Top-level declarations, always on their own lines
    None,
}

impl Separator {
    fn as_byte(self) -> Option<u8> {
        match self {
            Separator::Comma => Some(b','),
            Separator::Semicolon => Some(b';'),
            Separator::None => None,
        }
    }
}

/// Compute the byte range to drop for a node spanning `node`
pub fn removal_range(text: &str, node: Range<usize>, separator: Separator) -> Range<usize> {
    let bytes = text.as_bytes();
    let line_start = start_of_line(bytes, node.start);
    let owns_start = bytes[line_start..node.start].iter().all(|b| is_blank(*b));

    // Skip `  ,  // trailing comment` after the node
    let mut tail = skip_blanks(bytes, node.end);
    let mut took_separator = false;
    if let Some(sep) = separator.as_byte() {
        if bytes.get(tail) == Some(&sep) {
            tail = skip_blanks(bytes, tail + 1);
            took_separator = true;
        }
    }
    let after_separator = tail;
    if bytes[tail..].starts_with(b"//") {
        tail = end_of_line(bytes, tail);
    }
    let owns_end = tail == bytes.len() || bytes[tail] == b'\n';

    if owns_start && owns_end {
        let start = attached_comments_start(bytes, line_start);
        let end = if tail < bytes.len() { tail + 1 } else { tail };
        return tidy_blank_lines(bytes, start..end);
    }

    if took_separator {
        return node.start..after_separator;
    }

    // Last member of an inline list: drop the separator in front instead
    if let Some(sep) = separator.as_byte() {
        let mut before = node.start;
        while before > 0 && is_blank(bytes[before - 1]) {
            before -= 1;
        }
        if before > 0 && bytes[before - 1] == sep {
            return (before - 1)..node.end;
        }
    }

    node
}

/// Apply removals to `text`, producing the rewritten source
///
/// Ranges may arrive in any order and may overlap (two neighbours claiming the
/// same blank line); overlapping ranges are merged. A run of adjacent
/// whole-line removals is tidied again as one block, so neighbours removed
/// together never leave a double blank line behind.
pub fn apply_removals(text: &str, removals: &[Range<usize>]) -> String {
    let bytes = text.as_bytes();
    let mut ranges: Vec<Range<usize>> = removals.to_vec();
    ranges.sort_by_key(|r| (r.start, r.end));

    let tidied: Vec<Range<usize>> = merge_ranges(ranges)
        .into_iter()
        .map(|range| tidy_line_run(bytes, range))
        .collect();
    let merged = merge_ranges(tidied);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in merged {
        out.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Merge sorted ranges that touch or overlap
fn merge_ranges(ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Re-apply blank line tidying to a merged range made of whole lines
fn tidy_line_run(bytes: &[u8], range: Range<usize>) -> Range<usize> {
    let starts_line = range.start == 0 || bytes[range.start - 1] == b'\n';
    let ends_line = range.end > range.start && bytes[range.end - 1] == b'\n';
    if starts_line && ends_line {
        tidy_blank_lines(bytes, range)
    } else {
        range
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r'
}

fn skip_blanks(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_blank(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn start_of_line(bytes: &[u8], pos: usize) -> usize {
    bytes[..pos]
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |nl| nl + 1)
}

/// Index of the `\n` ending the line containing `pos`, or the text length
fn end_of_line(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..]
        .iter()
        .position(|b| *b == b'\n')
        .map_or(bytes.len(), |nl| pos + nl)
}

/// Line containing `pos`, without its newline
fn line_at(bytes: &[u8], pos: usize) -> &[u8] {
    &bytes[start_of_line(bytes, pos)..end_of_line(bytes, pos)]
}

fn trimmed(line: &[u8]) -> &[u8] {
    let start = line.iter().position(|b| !is_blank(*b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_blank(*b)).map_or(start, |i| i + 1);
    &line[start..end]
}

/// Walk upward over `//` comment lines directly above `line_start`
fn attached_comments_start(bytes: &[u8], line_start: usize) -> usize {
    let mut start = line_start;
    while start > 0 {
        let prev_start = start_of_line(bytes, start - 1);
        if trimmed(&bytes[prev_start..start - 1]).starts_with(b"//") {
            start = prev_start;
        } else {
            break;
        }
    }
    start
}

/// Keep gofmt-style spacing around a whole-line removal
///
/// Never leave two blank lines in a row, a blank line right after an opening
/// brace, a blank line right before a closing brace, or a trailing blank line.
fn tidy_blank_lines(bytes: &[u8], range: Range<usize>) -> Range<usize> {
    let Range { mut start, mut end } = range;

    let prev_line = if start > 0 { Some(line_at(bytes, start - 1)) } else { None };
    let next_line = if end < bytes.len() { Some(line_at(bytes, end)) } else { None };

    let prev_blank = prev_line.is_some_and(|l| trimmed(l).is_empty());
    let next_blank = next_line.is_some_and(|l| trimmed(l).is_empty());
    let prev_opens = prev_line.is_some_and(|l| matches!(trimmed(l).last(), Some(b'{' | b'(')));
    let next_closes = next_line.is_some_and(|l| matches!(trimmed(l).first(), Some(b'}' | b')')));

    if next_blank && (prev_blank || prev_opens || start == 0) {
        end = (end_of_line(bytes, end) + 1).min(bytes.len());
    } else if prev_blank && (next_closes || end == bytes.len()) {
        start = start_of_line(bytes, start - 1);
    }

    start..end
}
