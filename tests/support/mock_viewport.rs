use cursor_motion::traits::Viewport;
use cursor_motion::types::LineRange;

/// A viewport frozen on fixed visible and centered ranges.
#[derive(Debug, Clone, Copy)]
pub struct MockViewport {
    pub visible: LineRange,
    pub centered: LineRange,
}

impl MockViewport {
    pub fn new(visible: LineRange, centered: LineRange) -> Self {
        Self { visible, centered }
    }

    pub fn visible(start_line: u32, end_line: u32) -> Self {
        Self::new(
            LineRange::new(start_line, end_line),
            LineRange::single(start_line),
        )
    }

    pub fn centered(start_line: u32, end_line: u32) -> Self {
        Self::new(
            LineRange::new(1, 1),
            LineRange::new(start_line, end_line),
        )
    }
}

impl Viewport for MockViewport {
    fn current_visible_range(&self) -> LineRange {
        self.visible
    }

    fn current_centered_range(&self) -> LineRange {
        self.centered
    }
}
