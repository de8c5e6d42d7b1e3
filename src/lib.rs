#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bounds;
pub mod color;
pub mod command;
pub mod config;
#[cfg(feature = "std")]
pub mod error;
pub mod menu;
pub mod option;
pub mod renderer;

pub use command::Command;
pub use config::ConfigStore;
#[cfg(feature = "std")]
pub use error::ConfigError;
pub use menu::{Menu, MenuEntry, MenuTree, Mode};
pub use option::{ColorChannel, ColorOption, ContrastOption, MenuOption, OptionContext};
pub use renderer::{Canvas, ROW_COUNT, ROW_WIDTH, Row, SELECTION_GLYPH};

pub use color::{Hsv, Rgb};

/// Abstract character display trait
///
/// Implement this trait for the LCD controller in use.
/// The menu engine is generic over this trait.
pub trait CharDisplay {
    /// Write text starting at the current cursor position
    ///
    /// Text arrives as Unicode. Implementors map each `char` to one code of
    /// the controller's character ROM, so [`SELECTION_GLYPH`] (U+00FC) is
    /// written as the single byte 252 and a row stays [`ROW_WIDTH`] cells.
    fn write_text(&mut self, text: &str);

    /// Move the cursor to `column` on `row`
    fn set_cursor_position(&mut self, column: u8, row: u8);

    /// Set the panel contrast level
    fn set_contrast(&mut self, level: u8);
}

/// Abstract RGB backlight driver trait
pub trait Backlight {
    /// Set the backlight color, each channel 0-255
    fn set_rgb(&mut self, r: u8, g: u8, b: u8);
}
