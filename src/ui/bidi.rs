//! Wrapping and visual ordering of translated text.
//!
//! Terminals draw cells left to right in logical order. Urdu output is
//! wrapped first, then each wrapped line is reordered with the Unicode
//! bidirectional algorithm so it reads correctly when right-aligned.

use std::ops::Range;

use unicode_bidi::{BidiInfo, Level};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::translate::LayoutOrientation;

/// Break `text` into display lines no wider than `width` cells.
///
/// With `Rtl` and `reorder` set, each line is returned in visual order.
pub fn layout_lines(
    text: &str,
    width: usize,
    orientation: LayoutOrientation,
    reorder: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        lines.extend(wrap_line(paragraph, width));
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    if orientation == LayoutOrientation::Rtl && reorder {
        lines.iter().map(|line| visual_order(line)).collect()
    } else {
        lines
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    wrap_ranges(line, width)
        .into_iter()
        .map(|range| line[range].trim_end_matches(' ').to_string())
        .collect()
}

/// Byte ranges of the rows `line` wraps into at `width` cells.
///
/// Rows break after a space where possible, otherwise inside the word.
/// Spaces never start a new row; they hang off the end of the previous one.
/// The ranges are contiguous and cover the whole line, so a byte offset in
/// `line` always falls in exactly one row. A `width` of 0 disables wrapping.
pub(crate) fn wrap_ranges(line: &str, width: usize) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    if width == 0 || UnicodeWidthStr::width(line) <= width {
        ranges.push(0..line.len());
        return ranges;
    }

    let mut start = 0;
    let mut used = 0;
    let mut last_break: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if ch != ' ' && idx > start && used + ch_width > width {
            let end = match last_break {
                Some(at) if at > start => at,
                _ => idx,
            };
            ranges.push(start..end);
            start = end;
            used = UnicodeWidthStr::width(&line[start..idx]);
            last_break = None;

            if idx > start && used + ch_width > width {
                ranges.push(start..idx);
                start = idx;
                used = 0;
            }
        }
        used += ch_width;
        if ch == ' ' {
            last_break = Some(idx + 1);
        }
    }

    ranges.push(start..line.len());
    ranges
}

/// Reorder one line for display with a right-to-left base direction.
fn visual_order(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }
    let info = BidiInfo::new(line, Some(Level::rtl()));
    info.paragraphs
        .iter()
        .map(|para| info.reorder_line(para, para.range.clone()).into_owned())
        .collect()
}
