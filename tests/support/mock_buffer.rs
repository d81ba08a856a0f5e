use std::borrow::Cow;

use cursor_motion::traits::TextLines;
use ropey::Rope;

pub struct MockBuffer {
    rope: Rope,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    fn line_str(&self, line_number: u32) -> String {
        let idx = line_number.saturating_sub(1) as usize;
        if idx >= self.rope.len_lines() {
            return String::new();
        }
        let mut s = self.rope.line(idx).to_string();
        // Strip the terminator, "\n" or "\r\n"
        if s.ends_with('\n') {
            s.pop();
        }
        if s.ends_with('\r') {
            s.pop();
        }
        s
    }
}

impl TextLines for MockBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line_content(&self, line_number: u32) -> Cow<'_, str> {
        Cow::Owned(self.line_str(line_number))
    }
}
