// ui/input.rs

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Single-line text input with a grapheme-aware cursor. `cursor` is a byte
/// offset into `value`, always on a grapheme boundary.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    value: String,
    cursor: usize,
}

impl InputState {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Takes the buffer, leaving the input empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.value.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].grapheme_indices(true).last() {
            self.value.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(grapheme) = self.value[self.cursor..].graphemes(true).next() {
            let end = self.cursor + grapheme.len();
            self.value.drain(self.cursor..end);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].grapheme_indices(true).last() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(grapheme) = self.value[self.cursor..].graphemes(true).next() {
            self.cursor += grapheme.len();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Display width of the text before the cursor, for cursor placement.
    pub fn visual_cursor(&self) -> usize {
        self.value[..self.cursor].width()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_take() {
        let mut input = InputState::default();
        for c in "hello".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "hello");
        assert_eq!(input.take(), "hello");
        assert_eq!(input.value(), "");
    }

    #[test]
    fn backspace_removes_whole_graphemes() {
        let mut input = InputState::default();
        input.insert_str("caf");
        input.insert('é');
        input.backspace();
        assert_eq!(input.value(), "caf");
        input.backspace();
        assert_eq!(input.value(), "ca");
    }

    #[test]
    fn cursor_moves_stay_on_boundaries() {
        let mut input = InputState::default();
        input.insert_str("aé🚀");
        input.move_left();
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "axé🚀");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "axé");
    }

    #[test]
    fn mid_string_editing() {
        let mut input = InputState::default();
        input.insert_str("planet");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "lanet");
        input.move_right();
        input.insert('!');
        assert_eq!(input.value(), "l!anet");
    }
}
