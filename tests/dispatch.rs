use cursor_motion::command::{self, CommandArgs, CursorCommand, handler};
use cursor_motion::types::{MovementTarget, Position, Selection};
use cursor_motion::{Cursor, DispatchError};

mod support;
use support::mock_buffer::MockBuffer;
use support::mock_viewport::MockViewport;

fn buffer() -> MockBuffer {
    MockBuffer::new("    let total = a + b;  \n\treturn total;\n")
}

#[test]
fn cursor_move_routes_target_count_and_selection() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(3, 1));

    let update = command::trigger(
        &mut cursor,
        handler::CURSOR_MOVE,
        &CommandArgs::to("lineUp").repeat(2).select(true),
    )
    .unwrap();
    assert_eq!(update.selection, Selection::new(Position::new(3, 1), Position::new(1, 1)));
}

#[test]
fn move_to_and_move_to_select() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::ORIGIN);

    command::trigger(&mut cursor, handler::MOVE_TO, &CommandArgs::at(Position::new(1, 9))).unwrap();
    assert_eq!(cursor.selection(), Selection::collapsed(Position::new(1, 9)));

    command::trigger(&mut cursor, handler::MOVE_TO_SELECT, &CommandArgs::at(Position::new(2, 50)))
        .unwrap();
    assert_eq!(cursor.selection(), Selection::new(Position::new(1, 9), Position::new(2, 15)));
}

#[test]
fn cursor_end_stops_after_last_visible_character_first() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(1, 3));
    let args = CommandArgs::default();

    command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert_eq!(cursor.position(), Position::new(1, 23));

    command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert_eq!(cursor.position(), Position::new(1, 25));

    let update = command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert!(update.is_noop());
}

#[test]
fn cursor_end_on_a_blank_line_goes_straight_to_the_end() {
    let text = MockBuffer::new("      \n\t\nx");
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(1, 4));
    let args = CommandArgs::default();

    command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert_eq!(cursor.position(), Position::new(1, 7));
    let update = command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert!(update.is_noop());

    cursor.move_to(Position::new(2, 1), false);
    command::trigger(&mut cursor, handler::CURSOR_END, &args).unwrap();
    assert_eq!(cursor.position(), Position::new(2, 2));
}

#[test]
fn cursor_end_select_extends_from_the_anchor() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(2, 2));

    command::trigger(&mut cursor, handler::CURSOR_END_SELECT, &CommandArgs::default()).unwrap();
    assert_eq!(cursor.selection(), Selection::new(Position::new(2, 2), Position::new(2, 15)));
}

#[test]
fn line_start_select_and_plain_line_start() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(1, 12));

    command::trigger(&mut cursor, handler::CURSOR_LINE_START_SELECT, &CommandArgs::default())
        .unwrap();
    assert_eq!(cursor.selection(), Selection::new(Position::new(1, 12), Position::new(1, 1)));

    command::trigger(&mut cursor, handler::CURSOR_LINE_START, &CommandArgs::default()).unwrap();
    assert_eq!(cursor.selection(), Selection::collapsed(Position::new(1, 1)));
}

#[test]
fn rejected_payloads_leave_cursor_untouched() {
    support::init_tracing();
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(2, 4));
    cursor.apply(MovementTarget::LineDown(1), true);
    let before = cursor.snapshot();

    let cases = [
        (
            handler::CURSOR_MOVE,
            CommandArgs::to("paragraphDown"),
            DispatchError::UnknownTarget("paragraphDown".into()),
        ),
        (
            handler::CURSOR_MOVE,
            CommandArgs::to("lineUp").repeat(0),
            DispatchError::InvalidRepeatCount(0),
        ),
        (
            handler::CURSOR_MOVE,
            CommandArgs::default().repeat(2),
            DispatchError::MissingArgument {
                command: handler::CURSOR_MOVE,
                argument: "to",
            },
        ),
        (
            handler::MOVE_TO,
            CommandArgs::to("lineEnd"),
            DispatchError::MissingArgument {
                command: handler::MOVE_TO,
                argument: "position",
            },
        ),
        (
            "cursorWordLeft",
            CommandArgs::default(),
            DispatchError::UnknownCommand("cursorWordLeft".into()),
        ),
    ];

    for (name, args, expected) in cases {
        let err = command::trigger(&mut cursor, name, &args).unwrap_err();
        assert_eq!(err, expected);
        assert_eq!(cursor.snapshot(), before);
    }
}

#[test]
fn typed_commands_skip_parsing() {
    let text = buffer();
    let viewport = MockViewport::visible(1, 3);
    let mut cursor = Cursor::new(&text, &viewport, Position::new(2, 6));

    let command = command::parse_command(
        handler::CURSOR_MOVE,
        &CommandArgs::to("lineFirstNonWhitespaceCharacter").select(true),
    )
    .unwrap();
    assert_eq!(
        command,
        CursorCommand::Move {
            target: MovementTarget::LineFirstNonWhitespaceCharacter,
            select: true,
        }
    );

    let update = command::dispatch(&mut cursor, command);
    assert_eq!(update.selection, Selection::new(Position::new(2, 6), Position::new(2, 2)));
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(
        DispatchError::UnknownTarget("lineSideways".into()).to_string(),
        "unknown movement target: lineSideways"
    );
    assert_eq!(
        DispatchError::MissingArgument {
            command: handler::MOVE_TO,
            argument: "position"
        }
        .to_string(),
        "command moveTo requires argument `position`"
    );
}
