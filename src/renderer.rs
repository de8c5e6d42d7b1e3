//! Fixed-width row rendering for the character display.
//!
//! Every row written through [`Canvas`] is exactly [`ROW_WIDTH`] characters:
//! longer text is truncated and shorter text is padded with spaces.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::CharDisplay;

/// Characters per display row
pub const ROW_WIDTH: usize = 16;

/// Number of display rows
pub const ROW_COUNT: u8 = 3;

/// Glyph marking the selected entry or the edited channel (character 252)
pub const SELECTION_GLYPH: char = '\u{fc}';

/// Column where entry labels start, after the icon
pub const ENTRY_MARGIN: usize = 1;

/// Row buffer capacity in bytes, enough for any `ROW_WIDTH` characters
const ROW_CAPACITY: usize = ROW_WIDTH * 4;

/// One rendered display row
pub type Row = String<ROW_CAPACITY>;

/// Fit text to the row width
pub fn fit_row(text: &str) -> Row {
    pad_chars(text.chars())
}

/// Build an entry row: icon, padding up to [`ENTRY_MARGIN`], then the label
pub fn entry_row(icon: char, label: &str) -> Row {
    let margin = ENTRY_MARGIN.saturating_sub(1);
    let prefix = core::iter::once(icon).chain(core::iter::repeat_n(' ', margin));
    pad_chars(prefix.chain(label.chars()))
}

fn pad_chars(chars: impl Iterator<Item = char>) -> Row {
    let mut row = Row::new();
    let mut width = 0;
    for ch in chars.take(ROW_WIDTH) {
        let _ = row.push(ch);
        width += 1;
    }
    for _ in width..ROW_WIDTH {
        let _ = row.push(' ');
    }
    row
}

/// Drawing surface handed to the menu and to options on redraw
pub struct Canvas<'a> {
    display: &'a mut dyn CharDisplay,
}

impl<'a> Canvas<'a> {
    pub fn new(display: &'a mut dyn CharDisplay) -> Self {
        Self { display }
    }

    /// Write `text` as a full-width row
    pub fn write_row(&mut self, row: u8, text: &str) {
        self.display.set_cursor_position(0, row);
        self.display.write_text(&fit_row(text));
    }

    /// Write formatted text as a full-width row
    ///
    /// Output beyond the row buffer is dropped.
    pub fn write_row_fmt(&mut self, row: u8, args: fmt::Arguments<'_>) {
        let mut text = Row::new();
        let _ = text.write_fmt(args);
        self.write_row(row, &text);
    }

    /// Blank a row
    pub fn clear_row(&mut self, row: u8) {
        self.write_row(row, "");
    }

    /// Write a menu entry with its icon
    pub fn write_entry(&mut self, row: u8, label: &str, icon: char) {
        self.display.set_cursor_position(0, row);
        self.display.write_text(&entry_row(icon, label));
    }

    pub fn set_cursor(&mut self, column: u8, row: u8) {
        self.display.set_cursor_position(column, row);
    }

    /// Write a single glyph at the cursor
    pub fn write_glyph(&mut self, glyph: char) {
        let mut buf = [0u8; 4];
        self.display.write_text(glyph.encode_utf8(&mut buf));
    }
}
