mod utils;

use smart_leds::RGB8;

pub use utils::{HUE_STEPS, hsv2rgb, hue_from_steps, hue_to_steps, rgb2hsv, rgb2hue};

pub type Rgb = RGB8;

/// HSV color as edited on the display
///
/// Hue lives on the unit circle `[0, 1)`, saturation and value are
/// percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: f64, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}
