use std::fmt;

/// A position within a text buffer.
///
/// Positions are one-based on both axes. Column 1 sits before the first
/// character of a line and column `line_length + 1` sits after the last one.
/// Columns are counted in `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Position {
    /// One-based line number.
    pub line_number: u32,
    /// One-based column.
    pub column: u32,
}

impl Position {
    /// The first column of the first line.
    pub const ORIGIN: Position = Position {
        line_number: 1,
        column: 1,
    };

    pub const fn new(line_number: u32, column: u32) -> Self {
        Self {
            line_number,
            column,
        }
    }

    pub const fn with_column(self, column: u32) -> Self {
        Self {
            line_number: self.line_number,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line_number, self.column)
    }
}

/// A directional selection.
///
/// The anchor stays put while a selection is extended; the active end is
/// what movement relocates and what is reported as the cursor position.
/// An empty selection has both ends on the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    anchor: Position,
    active: Position,
}

impl Selection {
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection at `position`.
    pub const fn collapsed(position: Position) -> Self {
        Self {
            anchor: position,
            active: position,
        }
    }

    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    pub const fn active(&self) -> Position {
        self.active
    }

    /// The cursor position, i.e. the active end.
    pub const fn position(&self) -> Position {
        self.active
    }

    pub const fn anchor_line(&self) -> u32 {
        self.anchor.line_number
    }

    pub const fn anchor_column(&self) -> u32 {
        self.anchor.column
    }

    pub const fn active_line(&self) -> u32 {
        self.active.line_number
    }

    pub const fn active_column(&self) -> u32 {
        self.active.column
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// True when the active end lies before the anchor.
    pub fn is_reversed(&self) -> bool {
        self.active < self.anchor
    }

    /// The earlier of the two ends.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The later of the two ends.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Same anchor, new active end.
    pub const fn with_active(self, active: Position) -> Self {
        Self {
            anchor: self.anchor,
            active,
        }
    }

    /// Both ends moved to `position`.
    pub const fn collapse_to(self, position: Position) -> Self {
        Self::collapsed(position)
    }
}

/// An inclusive range of one-based line numbers, as reported by a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineRange {
    pub start_line: u32,
    pub end_line: u32,
}

impl LineRange {
    pub const fn new(start_line: u32, end_line: u32) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    pub const fn single(line_number: u32) -> Self {
        Self::new(line_number, line_number)
    }

    pub fn contains(&self, line_number: u32) -> bool {
        (self.start_line..=self.end_line).contains(&line_number)
    }
}

/// Where a movement command sends the cursor.
///
/// Targets carrying a `u32` take a repeat count; a count of 1 is the plain
/// motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MovementTarget {
    /// Column 1.
    LineStart,
    /// First character that is neither a space nor a tab.
    LineFirstNonWhitespaceCharacter,
    /// Midpoint of the line.
    LineColumnCenter,
    /// After the last character.
    LineEnd,
    /// Right after the last character that is neither a space nor a tab.
    LineLastNonWhitespaceCharacter,
    /// Up `n` lines, keeping the desired visual column.
    LineUp(u32),
    /// Down `n` lines, keeping the desired visual column.
    LineDown(u32),
    /// The `n`th visible line from the top of the viewport.
    LineViewTop(u32),
    /// The first line of the viewport's centered range.
    LineViewCenter,
    /// The `n`th visible line from the bottom of the viewport.
    LineViewBottom(u32),
}

impl MovementTarget {
    /// Vertical targets keep the desired visual column alive between moves.
    pub fn is_vertical(&self) -> bool {
        matches!(self, MovementTarget::LineUp(_) | MovementTarget::LineDown(_))
    }

    /// Name used by command payloads.
    pub fn name(&self) -> &'static str {
        match self {
            MovementTarget::LineStart => "lineStart",
            MovementTarget::LineFirstNonWhitespaceCharacter => "lineFirstNonWhitespaceCharacter",
            MovementTarget::LineColumnCenter => "lineColumnCenter",
            MovementTarget::LineEnd => "lineEnd",
            MovementTarget::LineLastNonWhitespaceCharacter => "lineLastNonWhitespaceCharacter",
            MovementTarget::LineUp(_) => "lineUp",
            MovementTarget::LineDown(_) => "lineDown",
            MovementTarget::LineViewTop(_) => "lineViewTop",
            MovementTarget::LineViewCenter => "lineViewCenter",
            MovementTarget::LineViewBottom(_) => "lineViewBottom",
        }
    }
}

impl fmt::Display for MovementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementTarget::LineUp(n)
            | MovementTarget::LineDown(n)
            | MovementTarget::LineViewTop(n)
            | MovementTarget::LineViewBottom(n) => write!(f, "{}({n})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

bitflags::bitflags! {
    /// Parts of the cursor state touched by a command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CursorChange: u8 {
        const POSITION       = 0b001;
        const ANCHOR         = 0b010;
        const DESIRED_COLUMN = 0b100;
    }
}

/// Notification returned to the host after every cursor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorUpdate {
    /// The selection after the command.
    pub selection: Selection,
    /// What changed relative to the state before the command.
    pub changed: CursorChange,
}

impl CursorUpdate {
    pub fn position(&self) -> Position {
        self.selection.position()
    }

    /// True when neither end of the selection moved.
    pub fn is_noop(&self) -> bool {
        !self
            .changed
            .intersects(CursorChange::POSITION | CursorChange::ANCHOR)
    }
}
