use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{LineRange, Position};

fn is_whitespace(grapheme: &str) -> bool {
    grapheme == " " || grapheme == "\t"
}

/// Read-only view of a line-organized text buffer.
///
/// Hosts implement the three required queries; everything else has a
/// default derived from `line_content`. Line numbers passed in are always
/// within `1..=line_count()`. Columns are one-based and counted in grapheme
/// clusters.
pub trait TextLines {
    // Basic queries
    fn line_count(&self) -> u32;
    fn line_content(&self, line_number: u32) -> Cow<'_, str>; // without line terminator

    fn line_length(&self, line_number: u32) -> u32 {
        self.line_content(line_number).graphemes(true).count() as u32
    }

    fn max_column(&self, line_number: u32) -> u32 {
        self.line_length(line_number) + 1
    }

    /// Zero-based visual column of the gap before `column`, with tabs
    /// advancing to the next multiple of `tab_size`.
    fn visual_column_of(&self, line_number: u32, column: u32, tab_size: u32) -> u32 {
        let tab_size = tab_size.max(1);
        let content = self.line_content(line_number);
        let mut visual = 0;
        for grapheme in content.graphemes(true).take(column.saturating_sub(1) as usize) {
            visual = next_visual_column(visual, grapheme, tab_size);
        }
        visual
    }

    /// Column whose visual position is nearest to `visual_column`.
    ///
    /// A visual column inside a tab expansion snaps to the nearer edge of
    /// the tab, ties going left. Past the end of the line the result is the
    /// end-of-line column.
    fn column_at_visual_column(&self, line_number: u32, visual_column: u32, tab_size: u32) -> u32 {
        let tab_size = tab_size.max(1);
        let content = self.line_content(line_number);
        let mut before = 0;
        let mut column = 1;
        for grapheme in content.graphemes(true) {
            let after = next_visual_column(before, grapheme, tab_size);
            if after > visual_column {
                if after - visual_column < visual_column - before {
                    return column + 1;
                }
                return column;
            }
            before = after;
            column += 1;
        }
        column
    }

    /// First column holding neither a space nor a tab, or the end-of-line
    /// column when there is none.
    fn first_non_whitespace_column(&self, line_number: u32) -> u32 {
        let content = self.line_content(line_number);
        let mut column = 1;
        for grapheme in content.graphemes(true) {
            if !is_whitespace(grapheme) {
                return column;
            }
            column += 1;
        }
        column
    }

    /// Column right after the last character that is neither a space nor a
    /// tab, or column 1 when there is none.
    fn last_non_whitespace_column(&self, line_number: u32) -> u32 {
        let content = self.line_content(line_number);
        let mut last = None;
        for (idx, grapheme) in content.graphemes(true).enumerate() {
            if !is_whitespace(grapheme) {
                last = Some(idx as u32);
            }
        }
        last.map_or(1, |idx| idx + 2)
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let last_line = self.line_count().max(1);
        let line_number = pos.line_number.clamp(1, last_line);
        let column = pos.column.clamp(1, self.max_column(line_number));
        Position {
            line_number,
            column,
        }
    }
}

fn next_visual_column(visual: u32, grapheme: &str, tab_size: u32) -> u32 {
    if grapheme == "\t" {
        (visual / tab_size).saturating_add(1).saturating_mul(tab_size)
    } else {
        visual.saturating_add(1)
    }
}

impl<S: AsRef<str>> TextLines for [S] {
    fn line_count(&self) -> u32 {
        self.len().max(1) as u32
    }

    fn line_content(&self, line_number: u32) -> Cow<'_, str> {
        self.get(line_number.saturating_sub(1) as usize)
            .map_or(Cow::Borrowed(""), |line| Cow::Borrowed(line.as_ref()))
    }
}

impl<S: AsRef<str>> TextLines for Vec<S> {
    fn line_count(&self) -> u32 {
        self.as_slice().line_count()
    }

    fn line_content(&self, line_number: u32) -> Cow<'_, str> {
        self.as_slice().line_content(line_number)
    }
}

/// The hosting view's notion of which lines are on screen.
pub trait Viewport {
    fn current_visible_range(&self) -> LineRange;
    fn current_centered_range(&self) -> LineRange;
}

/// A fixed viewport showing exactly this range; its centered range is the
/// middle line.
impl Viewport for LineRange {
    fn current_visible_range(&self) -> LineRange {
        *self
    }

    fn current_centered_range(&self) -> LineRange {
        let mid = self.start_line + self.end_line.saturating_sub(self.start_line) / 2;
        LineRange::single(mid)
    }
}
