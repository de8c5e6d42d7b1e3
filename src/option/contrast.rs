//! Display contrast option
//!
//! A single wrapping level in `0..=63`, pushed to the panel on every step.

use alloc::string::ToString;

use super::{MenuOption, OptionContext, load_bounded};
use crate::bounds::CONTRAST;
use crate::renderer::Canvas;

/// Config section holding display settings
pub const DISPLAY_SECTION: &str = "Display";

pub const CONTRAST_KEY: &str = "contrast";

/// Contrast used when nothing is persisted yet
pub const DEFAULT_CONTRAST: u8 = 40;

#[derive(Debug, Clone)]
pub struct ContrastOption {
    title: &'static str,
    contrast: u8,
}

impl ContrastOption {
    pub const fn new() -> Self {
        Self {
            title: "Contrast",
            contrast: DEFAULT_CONTRAST,
        }
    }

    /// Replace the title shown on the first row
    #[must_use]
    pub const fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub const fn contrast(&self) -> u8 {
        self.contrast
    }

    fn apply(&self, ctx: &mut OptionContext<'_>) {
        ctx.config
            .set(DISPLAY_SECTION, CONTRAST_KEY, &self.contrast.to_string());
        ctx.display.set_contrast(self.contrast);
    }

    fn increment(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.contrast = CONTRAST.increment(self.contrast);
        self.apply(ctx);
        true
    }

    fn decrement(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.contrast = CONTRAST.decrement(self.contrast);
        self.apply(ctx);
        true
    }
}

impl Default for ContrastOption {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuOption for ContrastOption {
    fn setup(&mut self, ctx: &mut OptionContext<'_>) {
        self.contrast = load_bounded(
            ctx.config,
            DISPLAY_SECTION,
            CONTRAST_KEY,
            DEFAULT_CONTRAST,
            CONTRAST,
        );
        ctx.display.set_contrast(self.contrast);
    }

    fn up(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.increment(ctx)
    }

    fn down(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.decrement(ctx)
    }

    // Never leaves adjust mode; only select does.
    fn left(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.decrement(ctx)
    }

    fn right(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.increment(ctx)
    }

    fn redraw(&self, canvas: &mut Canvas<'_>) {
        canvas.write_row(0, self.title);
        canvas.write_row_fmt(1, format_args!("Value: {}", self.contrast));
        canvas.clear_row(2);
    }
}
