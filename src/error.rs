pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// A command payload the dispatcher refused. The cursor is untouched when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown cursor command: {0}")]
    UnknownCommand(String),

    #[error("unknown movement target: {0}")]
    UnknownTarget(String),

    #[error("command {command} requires argument `{argument}`")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(u32),
}
