pub mod command;
pub mod config;
pub mod cursor;
pub mod error;
pub mod movement;
pub mod traits;
pub mod types;

pub use crate::command::{CommandArgs, CursorCommand, dispatch, trigger};
pub use crate::config::CursorConfig;
pub use crate::cursor::{Cursor, CursorBuilder, CursorSnapshot};
pub use crate::error::{DispatchError, DispatchResult};
pub use crate::traits::{TextLines, Viewport};
pub use crate::types::{CursorChange, CursorUpdate, LineRange, MovementTarget, Position, Selection};
