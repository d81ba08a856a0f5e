use crate::config::CursorConfig;
use crate::movement;
use crate::traits::{TextLines, Viewport};
use crate::types::{CursorChange, CursorUpdate, MovementTarget, Position, Selection};

/// A single cursor attached to a buffer and the view showing it.
///
/// The cursor borrows both collaborators for as long as it is attached and
/// owns nothing else: its selection, the desired visual column of the
/// current run of vertical moves, and its config.
#[derive(Debug)]
pub struct Cursor<'a, T: ?Sized, V: ?Sized> {
    text: &'a T,
    viewport: &'a V,
    config: CursorConfig,
    selection: Selection,
    desired_visual_column: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub selection: Selection,
    pub desired_visual_column: Option<u32>,
    pub tab_size: u32,
}

#[derive(Debug, Clone, Default)]
pub struct CursorBuilder {
    config: CursorConfig,
    selection: Option<Selection>,
}

impl CursorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: CursorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tab_size(mut self, tab_size: u32) -> Self {
        self.config = self.config.with_tab_size(tab_size);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.selection = Some(Selection::collapsed(position));
        self
    }

    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Attach to a buffer and viewport. The initial selection is clamped
    /// into the buffer.
    pub fn attach<'a, T, V>(self, text: &'a T, viewport: &'a V) -> Cursor<'a, T, V>
    where
        T: TextLines + ?Sized,
        V: Viewport + ?Sized,
    {
        let selection = self
            .selection
            .unwrap_or(Selection::collapsed(Position::ORIGIN));
        let selection = Selection::new(
            text.clamp_position(selection.anchor()),
            text.clamp_position(selection.active()),
        );
        tracing::debug!(
            position = %selection.active(),
            tab_size = self.config.tab_size,
            "cursor attached"
        );
        Cursor {
            text,
            viewport,
            config: self.config,
            selection,
            desired_visual_column: None,
        }
    }
}

impl<'a, T, V> Cursor<'a, T, V>
where
    T: TextLines + ?Sized,
    V: Viewport + ?Sized,
{
    /// Attach a cursor with the default config at `position`.
    pub fn new(text: &'a T, viewport: &'a V, position: Position) -> Self {
        CursorBuilder::new().position(position).attach(text, viewport)
    }

    pub fn position(&self) -> Position {
        self.selection.position()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn desired_visual_column(&self) -> Option<u32> {
        self.desired_visual_column
    }

    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    pub fn text(&self) -> &'a T {
        self.text
    }

    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            selection: self.selection,
            desired_visual_column: self.desired_visual_column,
            tab_size: self.config.effective_tab_size(),
        }
    }

    /// Move the active end to `target`.
    ///
    /// With `extend_selection` the anchor stays where it is, otherwise the
    /// selection collapses onto the destination. A run of consecutive
    /// vertical moves shares one desired visual column, taken from the
    /// active end when the run starts; any other move ends the run.
    pub fn apply(&mut self, target: MovementTarget, extend_selection: bool) -> CursorUpdate {
        let tab_size = self.config.effective_tab_size();
        let desired = if target.is_vertical() {
            let active = self.selection.active();
            Some(self.desired_visual_column.unwrap_or_else(|| {
                self.text
                    .visual_column_of(active.line_number, active.column, tab_size)
            }))
        } else {
            None
        };

        let destination = movement::resolve(
            self.text,
            self.viewport,
            self.selection.active(),
            target,
            desired,
            tab_size,
        );
        debug_assert_eq!(
            destination,
            self.text.clamp_position(destination),
            "{target} resolved outside the buffer"
        );

        let update = self.commit(destination, extend_selection, desired);
        tracing::trace!(
            %target,
            extend_selection,
            selection = ?update.selection,
            "cursor moved"
        );
        update
    }

    /// Place the active end at an explicit position, clamped into the buffer.
    pub fn move_to(&mut self, position: Position, extend_selection: bool) -> CursorUpdate {
        let destination = self.text.clamp_position(position);
        if destination != position {
            tracing::debug!(%position, %destination, "clamped explicit cursor position");
        }
        let update = self.commit(destination, extend_selection, None);
        tracing::trace!(
            %position,
            extend_selection,
            selection = ?update.selection,
            "cursor placed"
        );
        update
    }

    /// Replace the whole selection, clamping both ends.
    pub fn set_selection(&mut self, selection: Selection) -> CursorUpdate {
        let before = self.snapshot();
        self.selection = Selection::new(
            self.text.clamp_position(selection.anchor()),
            self.text.clamp_position(selection.active()),
        );
        self.desired_visual_column = None;
        self.update_since(before)
    }

    /// Detach from the buffer and viewport.
    pub fn dispose(self) {
        tracing::debug!(position = %self.position(), "cursor disposed");
    }

    fn commit(
        &mut self,
        destination: Position,
        extend_selection: bool,
        desired_visual_column: Option<u32>,
    ) -> CursorUpdate {
        let before = self.snapshot();
        let destination = self.text.clamp_position(destination);
        self.selection = if extend_selection {
            self.selection.with_active(destination)
        } else {
            self.selection.collapse_to(destination)
        };
        self.desired_visual_column = desired_visual_column;
        self.update_since(before)
    }

    fn update_since(&self, before: CursorSnapshot) -> CursorUpdate {
        let mut changed = CursorChange::empty();
        if before.selection.active() != self.selection.active() {
            changed |= CursorChange::POSITION;
        }
        if before.selection.anchor() != self.selection.anchor() {
            changed |= CursorChange::ANCHOR;
        }
        if before.desired_visual_column != self.desired_visual_column {
            changed |= CursorChange::DESIRED_COLUMN;
        }
        CursorUpdate {
            selection: self.selection,
            changed,
        }
    }
}
