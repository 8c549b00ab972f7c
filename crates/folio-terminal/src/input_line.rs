//! Single-line input buffer with a cursor.

/// Text being typed at the prompt.
///
/// The cursor is a character index, not a byte offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    /// Create an empty input line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_pos(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Replace the content and put the cursor at the end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let pos = self.byte_pos(self.cursor);
        self.text.insert(pos, ch);
        self.cursor += 1;
    }

    /// Insert pasted text at the cursor. Line breaks are dropped.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert(ch);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let pos = self.byte_pos(self.cursor);
            self.text.remove(pos);
        }
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let pos = self.byte_pos(self.cursor);
            self.text.remove(pos);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> InputLine {
        let mut line = InputLine::new();
        for ch in s.chars() {
            line.insert(ch);
        }
        line
    }

    #[test]
    fn new_is_empty() {
        let line = InputLine::new();
        assert!(line.text().is_empty());
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn insert_multiple_chars() {
        let line = typed("Hello");
        assert_eq!(line.text(), "Hello");
        assert_eq!(line.cursor(), 5);
    }

    #[test]
    fn backspace_removes_char() {
        let mut line = typed("AB");
        line.backspace();
        assert_eq!(line.text(), "A");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_does_nothing() {
        let mut line = typed("AB");
        line.move_home();
        line.backspace();
        assert_eq!(line.text(), "AB");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn insert_in_middle() {
        let mut line = typed("ct");
        line.move_left();
        line.insert('a');
        assert_eq!(line.text(), "cat");
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn delete_under_cursor() {
        let mut line = typed("cats");
        line.move_end();
        line.delete();
        assert_eq!(line.text(), "cats");
        line.move_left();
        line.delete();
        assert_eq!(line.text(), "cat");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut line = typed("ls");
        line.move_right();
        assert_eq!(line.cursor(), 2);
        line.move_home();
        line.move_left();
        assert_eq!(line.cursor(), 0);
        line.move_end();
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn unicode_editing() {
        let mut line = typed("\u{00E9}\u{1F600}x");
        line.move_left();
        line.backspace();
        assert_eq!(line.text(), "\u{00E9}x");
        assert_eq!(line.cursor(), 1);
    }

    #[test]
    fn set_places_cursor_at_end() {
        let mut line = typed("abc");
        line.move_home();
        line.set("about");
        assert_eq!(line.text(), "about");
        assert_eq!(line.cursor(), 5);
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut line = InputLine::new();
        line.insert_str("cat\r\nresume.txt");
        assert_eq!(line.text(), "catresume.txt");
    }

    #[test]
    fn clear_resets() {
        let mut line = typed("help");
        line.clear();
        assert!(line.text().is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
