//! Pure cursor movement.
//!
//! Every function here maps a source position (plus whatever the target
//! needs from the buffer and the viewport) to a destination position. None
//! of them hold state; the desired visual column for vertical moves is
//! passed in by the caller.

use crate::traits::{TextLines, Viewport};
use crate::types::{LineRange, MovementTarget, Position};

/// Compute where `target` sends a cursor sitting at `from`.
///
/// `desired_visual_column` only matters for [`MovementTarget::LineUp`] and
/// [`MovementTarget::LineDown`]; when it is `None` the visual column of
/// `from` is used. The result is always inside the buffer.
pub fn resolve<T, V>(
    text: &T,
    viewport: &V,
    from: Position,
    target: MovementTarget,
    desired_visual_column: Option<u32>,
    tab_size: u32,
) -> Position
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let from = text.clamp_position(from);
    let line_number = from.line_number;
    match target {
        MovementTarget::LineStart => from.with_column(1),
        MovementTarget::LineFirstNonWhitespaceCharacter => {
            from.with_column(text.first_non_whitespace_column(line_number))
        }
        MovementTarget::LineColumnCenter => from.with_column(line_center_column(text, line_number)),
        MovementTarget::LineEnd => from.with_column(text.max_column(line_number)),
        MovementTarget::LineLastNonWhitespaceCharacter => {
            from.with_column(text.last_non_whitespace_column(line_number))
        }
        MovementTarget::LineUp(count) => {
            let visual = desired_visual_column
                .unwrap_or_else(|| text.visual_column_of(line_number, from.column, tab_size));
            line_up(text, from, count, visual, tab_size)
        }
        MovementTarget::LineDown(count) => {
            let visual = desired_visual_column
                .unwrap_or_else(|| text.visual_column_of(line_number, from.column, tab_size));
            line_down(text, from, count, visual, tab_size)
        }
        MovementTarget::LineViewTop(count) => view_top(text, viewport, count),
        MovementTarget::LineViewCenter => view_center(text, viewport),
        MovementTarget::LineViewBottom(count) => view_bottom(text, viewport, count),
    }
}

/// Midpoint between column 1 and the end-of-line column, rounded down.
pub fn line_center_column<T: TextLines + ?Sized>(text: &T, line_number: u32) -> u32 {
    (1 + text.max_column(line_number)) / 2
}

/// Move up `count` lines (0 counts as 1), landing on the column nearest to
/// `visual_column`. Overshooting the first line lands on (1, 1).
pub fn line_up<T: TextLines + ?Sized>(
    text: &T,
    from: Position,
    count: u32,
    visual_column: u32,
    tab_size: u32,
) -> Position {
    let count = count.max(1);
    if count >= from.line_number {
        return Position::ORIGIN;
    }
    let line_number = from.line_number - count;
    Position::new(
        line_number,
        text.column_at_visual_column(line_number, visual_column, tab_size),
    )
}

/// Move down `count` lines (0 counts as 1), landing on the column nearest
/// to `visual_column`. Overshooting the last line lands on its end.
pub fn line_down<T: TextLines + ?Sized>(
    text: &T,
    from: Position,
    count: u32,
    visual_column: u32,
    tab_size: u32,
) -> Position {
    let count = count.max(1);
    let last_line = text.line_count().max(1);
    if u64::from(from.line_number) + u64::from(count) > u64::from(last_line) {
        return Position::new(last_line, text.max_column(last_line));
    }
    let line_number = from.line_number + count;
    Position::new(
        line_number,
        text.column_at_visual_column(line_number, visual_column, tab_size),
    )
}

/// The `count`th visible line from the top, at its first non-whitespace
/// column.
pub fn view_top<T, V>(text: &T, viewport: &V, count: u32) -> Position
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let visible = clamp_range(text, viewport.current_visible_range());
    let line_number = visible
        .start_line
        .saturating_add(count.max(1) - 1)
        .min(visible.end_line);
    first_non_whitespace_position(text, line_number)
}

/// The first line of the centered range, at its first non-whitespace
/// column.
pub fn view_center<T, V>(text: &T, viewport: &V) -> Position
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let centered = clamp_range(text, viewport.current_centered_range());
    first_non_whitespace_position(text, centered.start_line)
}

/// The `count`th visible line from the bottom, at its first non-whitespace
/// column.
pub fn view_bottom<T, V>(text: &T, viewport: &V, count: u32) -> Position
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let visible = clamp_range(text, viewport.current_visible_range());
    let line_number = visible
        .end_line
        .saturating_sub(count.max(1) - 1)
        .max(visible.start_line);
    first_non_whitespace_position(text, line_number)
}

/// Bring a viewport-reported range inside the buffer.
///
/// Zero line numbers are raised to 1 and an inverted range collapses to its
/// end line. Both are contract violations by the viewport and get logged.
pub fn clamp_range<T: TextLines + ?Sized>(text: &T, range: LineRange) -> LineRange {
    let last_line = text.line_count().max(1);
    let mut start_line = range.start_line;
    let end_line = range.end_line.max(1);
    if start_line == 0 || start_line > end_line {
        tracing::warn!(
            start_line = range.start_line,
            end_line = range.end_line,
            "viewport reported an invalid line range"
        );
        start_line = if start_line > end_line { end_line } else { 1 };
    }
    LineRange::new(
        start_line.clamp(1, last_line),
        end_line.clamp(1, last_line),
    )
}

fn first_non_whitespace_position<T: TextLines + ?Sized>(text: &T, line_number: u32) -> Position {
    Position::new(line_number, text.first_non_whitespace_column(line_number))
}
