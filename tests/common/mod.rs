#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use myrtio_lcd_menu::{Backlight, CharDisplay, ROW_COUNT, ROW_WIDTH};

const ROWS: usize = ROW_COUNT as usize;

/// Display that keeps a character grid, like the real panel does
pub struct MockDisplay {
    grid: [[char; ROW_WIDTH]; ROWS],
    column: usize,
    row: usize,
    pub contrast: Option<u8>,
    /// Every `write_text` call, in order
    pub writes: Vec<String>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            grid: [['.'; ROW_WIDTH]; ROWS],
            column: 0,
            row: 0,
            contrast: None,
            writes: Vec::new(),
        }
    }

    pub fn row(&self, row: usize) -> String {
        self.grid[row].iter().collect()
    }

    pub fn char_at(&self, column: usize, row: usize) -> char {
        self.grid[row][column]
    }
}

impl CharDisplay for MockDisplay {
    fn write_text(&mut self, text: &str) {
        self.writes.push(text.to_string());
        for ch in text.chars() {
            if self.row < ROWS && self.column < ROW_WIDTH {
                self.grid[self.row][self.column] = ch;
            }
            self.column += 1;
        }
    }

    fn set_cursor_position(&mut self, column: u8, row: u8) {
        self.column = usize::from(column);
        self.row = usize::from(row);
    }

    fn set_contrast(&mut self, level: u8) {
        self.contrast = Some(level);
    }
}

/// Backlight that records every color it receives
///
/// Clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingBacklight {
    calls: Rc<RefCell<Vec<(u8, u8, u8)>>>,
}

impl RecordingBacklight {
    pub fn last(&self) -> Option<(u8, u8, u8)> {
        self.calls.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Backlight for RecordingBacklight {
    fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.calls.borrow_mut().push((r, g, b));
    }
}

/// Pad `text` to a full display row
pub fn row(text: &str) -> String {
    format!("{:<width$}", text, width = ROW_WIDTH)
}
