//! Line-oriented ASCII canvas
//!
//! Trees are drawn strictly top to bottom and left to right, so instead of a
//! random-access grid the canvas keeps a cursor on the line being written.

/// Canvas that builds output one line at a time
#[derive(Debug, Clone, Default)]
pub struct LineCanvas {
    lines: Vec<String>,
    current: String,
}

impl LineCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column the next character will be written to
    pub fn column(&self) -> usize {
        self.current.len()
    }

    /// Pad the current line with blanks up to `column`
    ///
    /// Columns at or left of the cursor (including negative ones) leave the
    /// line untouched; the next write then lands at the cursor.
    pub fn pad_to(&mut self, column: i64) {
        let target = usize::try_from(column).unwrap_or(0);
        if target > self.column() {
            let blanks = target - self.column();
            self.write_blanks(blanks);
        }
    }

    pub fn write(&mut self, text: &str) {
        self.current.push_str(text);
    }

    pub fn write_char(&mut self, c: char) {
        self.current.push(c);
    }

    pub fn write_blanks(&mut self, count: usize) {
        self.current.extend(std::iter::repeat(' ').take(count));
    }

    /// Finish the current line, dropping trailing blanks
    pub fn end_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line.trim_end().to_string());
    }

    /// Consume the canvas, returning finished lines plus any pending text
    pub fn into_lines(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.end_line();
        }
        self.lines
    }
}
