//! Interactive menu options
//!
//! An option is a leaf of the menu tree with its own adjustable state.
//! While it is being adjusted the menu forwards every command to it.
//! Each option implements the `MenuOption` trait.

mod color;
mod contrast;

pub use color::{BACKLIGHT_SECTION, ColorChannel, ColorOption};
pub use contrast::{CONTRAST_KEY, ContrastOption, DEFAULT_CONTRAST, DISPLAY_SECTION};

use alloc::string::ToString;

use crate::CharDisplay;
use crate::bounds::WrappingRange;
use crate::config::ConfigStore;
use crate::renderer::Canvas;

/// Shared state handed to an option while it handles a command
pub struct OptionContext<'a> {
    /// Persisted settings
    pub config: &'a mut ConfigStore,
    /// Display driver, for options that tune the panel itself
    pub display: &'a mut dyn CharDisplay,
}

pub trait MenuOption {
    /// Load persisted state and push it to the hardware
    fn setup(&mut self, _ctx: &mut OptionContext<'_>) {}

    /// Step the edited channel up
    fn up(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        true
    }

    /// Step the edited channel down
    fn down(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        true
    }

    /// Returns false to leave adjust mode
    fn left(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        false
    }

    fn right(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        true
    }

    /// Returns true to leave adjust mode
    fn select(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        true
    }

    /// Render all three rows
    fn redraw(&self, canvas: &mut Canvas<'_>);
}

/// Read an integer setting, clamping out-of-range values and writing the
/// clamped value back
pub(crate) fn load_bounded(
    config: &mut ConfigStore,
    section: &str,
    key: &str,
    default: u8,
    range: WrappingRange,
) -> u8 {
    let raw = config.get_parsed_or_insert::<i64>(section, key, i64::from(default));
    if range.contains(raw) {
        return range.clamp(raw);
    }
    let clamped = range.clamp(raw);
    log::warn!("config value {}.{} = {} out of range, clamped to {}", section, key, raw, clamped);
    config.set(section, key, &clamped.to_string());
    clamped
}
