/// Per-cursor settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CursorConfig {
    /// Width of a tab stop in visual columns. Never zero.
    pub tab_size: u32,
}

impl CursorConfig {
    pub const DEFAULT_TAB_SIZE: u32 = 4;

    pub fn with_tab_size(mut self, tab_size: u32) -> Self {
        self.tab_size = tab_size.max(1);
        self
    }

    /// The tab size actually used for visual columns.
    pub fn effective_tab_size(&self) -> u32 {
        self.tab_size.max(1)
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            tab_size: Self::DEFAULT_TAB_SIZE,
        }
    }
}
