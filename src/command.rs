//! Routing of named cursor commands onto a [`Cursor`].
//!
//! Hosts either build a [`CursorCommand`] directly or hand over a command
//! name plus a loosely typed [`CommandArgs`] payload. Payloads are fully
//! validated before the cursor is touched, so a rejected command never
//! leaves a half-applied move behind.

use std::str::FromStr;

use crate::cursor::Cursor;
use crate::error::{DispatchError, DispatchResult};
use crate::traits::{TextLines, Viewport};
use crate::types::{CursorUpdate, MovementTarget, Position};

/// Command names accepted by [`trigger`].
pub mod handler {
    pub const CURSOR_MOVE: &str = "cursorMove";
    pub const MOVE_TO: &str = "moveTo";
    pub const MOVE_TO_SELECT: &str = "moveToSelect";
    pub const CURSOR_END: &str = "cursorEnd";
    pub const CURSOR_END_SELECT: &str = "cursorEndSelect";
    pub const CURSOR_LINE_START: &str = "cursorLineStart";
    pub const CURSOR_LINE_START_SELECT: &str = "cursorLineStartSelect";
}

/// Untyped command payload, as it arrives from keybindings or scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CommandArgs {
    /// Movement target name for `cursorMove`.
    pub to: Option<String>,
    #[cfg_attr(feature = "serde", serde(alias = "noOfLines"))]
    pub repeat_count: Option<u32>,
    pub in_selection_mode: Option<bool>,
    /// Destination for `moveTo` / `moveToSelect`.
    pub position: Option<Position>,
}

impl CommandArgs {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn at(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn repeat(mut self, count: u32) -> Self {
        self.repeat_count = Some(count);
        self
    }

    pub fn select(mut self, in_selection_mode: bool) -> Self {
        self.in_selection_mode = Some(in_selection_mode);
        self
    }
}

/// A validated cursor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    Move { target: MovementTarget, select: bool },
    MoveTo { position: Position, select: bool },
    /// Last non-whitespace character first, true end of line on the next press.
    LineEnd { select: bool },
    LineStart { select: bool },
}

/// Parse a movement target name. Counted targets take `repeat_count`,
/// defaulting to 1; a count of 0 is rejected for every target.
pub fn parse_target(to: &str, repeat_count: Option<u32>) -> DispatchResult<MovementTarget> {
    let count = match repeat_count {
        Some(0) => return Err(DispatchError::InvalidRepeatCount(0)),
        Some(n) => n,
        None => 1,
    };
    let target = match to {
        "lineStart" => MovementTarget::LineStart,
        "lineFirstNonWhitespaceCharacter" => MovementTarget::LineFirstNonWhitespaceCharacter,
        "lineColumnCenter" => MovementTarget::LineColumnCenter,
        "lineEnd" => MovementTarget::LineEnd,
        "lineLastNonWhitespaceCharacter" => MovementTarget::LineLastNonWhitespaceCharacter,
        "lineUp" => MovementTarget::LineUp(count),
        "lineDown" => MovementTarget::LineDown(count),
        "lineViewTop" => MovementTarget::LineViewTop(count),
        "lineViewCenter" => MovementTarget::LineViewCenter,
        "lineViewBottom" => MovementTarget::LineViewBottom(count),
        other => return Err(DispatchError::UnknownTarget(other.to_string())),
    };
    Ok(target)
}

impl FromStr for MovementTarget {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_target(s, None)
    }
}

/// Validate a named command and its payload.
pub fn parse_command(name: &str, args: &CommandArgs) -> DispatchResult<CursorCommand> {
    let command = match name {
        handler::CURSOR_MOVE => {
            let to = args.to.as_deref().ok_or(DispatchError::MissingArgument {
                command: handler::CURSOR_MOVE,
                argument: "to",
            })?;
            CursorCommand::Move {
                target: parse_target(to, args.repeat_count)?,
                select: args.in_selection_mode.unwrap_or(false),
            }
        }
        handler::MOVE_TO | handler::MOVE_TO_SELECT => {
            let command = if name == handler::MOVE_TO {
                handler::MOVE_TO
            } else {
                handler::MOVE_TO_SELECT
            };
            let position = args.position.ok_or(DispatchError::MissingArgument {
                command,
                argument: "position",
            })?;
            CursorCommand::MoveTo {
                position,
                select: command == handler::MOVE_TO_SELECT,
            }
        }
        handler::CURSOR_END => CursorCommand::LineEnd { select: false },
        handler::CURSOR_END_SELECT => CursorCommand::LineEnd { select: true },
        handler::CURSOR_LINE_START => CursorCommand::LineStart { select: false },
        handler::CURSOR_LINE_START_SELECT => CursorCommand::LineStart { select: true },
        other => return Err(DispatchError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

/// Run a validated command against `cursor`.
pub fn dispatch<T, V>(cursor: &mut Cursor<'_, T, V>, command: CursorCommand) -> CursorUpdate
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    match command {
        CursorCommand::Move { target, select } => cursor.apply(target, select),
        CursorCommand::MoveTo { position, select } => cursor.move_to(position, select),
        CursorCommand::LineEnd { select } => {
            let target = line_end_target(cursor);
            cursor.apply(target, select)
        }
        CursorCommand::LineStart { select } => cursor.apply(MovementTarget::LineStart, select),
    }
}

/// Parse `name` with `args` and run it. On error the cursor is untouched.
pub fn trigger<T, V>(
    cursor: &mut Cursor<'_, T, V>,
    name: &str,
    args: &CommandArgs,
) -> DispatchResult<CursorUpdate>
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let command = parse_command(name, args).inspect_err(|err| {
        tracing::debug!(command = name, %err, "rejected cursor command");
    })?;
    Ok(dispatch(cursor, command))
}

fn line_end_target<T, V>(cursor: &Cursor<'_, T, V>) -> MovementTarget
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    let position = cursor.position();
    let text = cursor.text();
    let line_number = position.line_number;
    let max_column = text.max_column(line_number);
    // blank lines have no last non-whitespace character to stop at
    let blank = text.first_non_whitespace_column(line_number) == max_column;
    if blank
        || position.column == text.last_non_whitespace_column(line_number)
        || position.column == max_column
    {
        MovementTarget::LineEnd
    } else {
        MovementTarget::LineLastNonWhitespaceCharacter
    }
}
