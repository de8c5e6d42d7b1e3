//! Backlight color option
//!
//! Edits the backlight through six channels: hue, saturation and value,
//! then red, green and blue. Both representations are kept in sync:
//! editing an HSV channel recomputes RGB, editing an RGB channel
//! recomputes the hue only. Saturation and value are never derived from
//! RGB.

use alloc::string::ToString;

use super::{MenuOption, OptionContext, load_bounded};
use crate::Backlight;
use crate::bounds::{COLOR_CHANNEL, PERCENT, WrappingRange, wrap_unit};
use crate::color::{HUE_STEPS, Hsv, Rgb, hsv2rgb, hue_from_steps, hue_to_steps, rgb2hue};
use crate::config::ConfigStore;
use crate::renderer::{Canvas, SELECTION_GLYPH};

/// Config section holding backlight settings
pub const BACKLIGHT_SECTION: &str = "Backlight";

/// One hue step on the unit circle
const HUE_STEP: f64 = 1.0 / HUE_STEPS;

const DEFAULT_HSV: Hsv = Hsv::new(0.0, 0, 100);

/// Channel currently being edited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChannel {
    Hue,
    Saturation,
    Value,
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Channels in editing order
    pub const ALL: [Self; 6] = [
        Self::Hue,
        Self::Saturation,
        Self::Value,
        Self::Red,
        Self::Green,
        Self::Blue,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Hue => 0,
            Self::Saturation => 1,
            Self::Value => 2,
            Self::Red => 3,
            Self::Green => 4,
            Self::Blue => 5,
        }
    }

    /// Next channel, wrapping from blue to hue
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous channel, wrapping from hue to blue
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Config key the channel is persisted under
    pub const fn key(self) -> &'static str {
        match self {
            Self::Hue => "h",
            Self::Saturation => "s",
            Self::Value => "v",
            Self::Red => "r",
            Self::Green => "g",
            Self::Blue => "b",
        }
    }

    /// Display position `(column, row)` of the channel marker
    pub const fn cursor(self) -> (u8, u8) {
        match self {
            Self::Hue => (4, 1),
            Self::Saturation => (8, 1),
            Self::Value => (12, 1),
            Self::Red => (4, 2),
            Self::Green => (8, 2),
            Self::Blue => (12, 2),
        }
    }

    pub const fn is_hsv(self) -> bool {
        matches!(self, Self::Hue | Self::Saturation | Self::Value)
    }
}

/// Backlight color option
pub struct ColorOption<B: Backlight> {
    backlight: B,
    title: &'static str,
    hsv: Hsv,
    rgb: Rgb,
    channel: ColorChannel,
}

impl<B: Backlight> ColorOption<B> {
    /// Create the option, starting at full-value white
    pub fn new(backlight: B) -> Self {
        Self {
            backlight,
            title: "Backlight",
            hsv: DEFAULT_HSV,
            rgb: hsv2rgb(DEFAULT_HSV),
            channel: ColorChannel::Hue,
        }
    }

    /// Replace the title shown on the first row
    #[must_use]
    pub fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub const fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub const fn channel(&self) -> ColorChannel {
        self.channel
    }

    pub fn set_channel(&mut self, channel: ColorChannel) {
        self.channel = channel;
    }

    pub const fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Step the edited channel by one unit and resync both representations
    fn step(&mut self, config: &mut ConfigStore, forward: bool) {
        let step_u8 = |value: u8, range: WrappingRange| {
            if forward {
                range.increment(value)
            } else {
                range.decrement(value)
            }
        };

        match self.channel {
            ColorChannel::Hue => {
                let delta = if forward { HUE_STEP } else { -HUE_STEP };
                self.hsv.hue = wrap_unit(self.hsv.hue + delta);
            }
            ColorChannel::Saturation => self.hsv.sat = step_u8(self.hsv.sat, PERCENT),
            ColorChannel::Value => self.hsv.val = step_u8(self.hsv.val, PERCENT),
            ColorChannel::Red => self.rgb.r = step_u8(self.rgb.r, COLOR_CHANNEL),
            ColorChannel::Green => self.rgb.g = step_u8(self.rgb.g, COLOR_CHANNEL),
            ColorChannel::Blue => self.rgb.b = step_u8(self.rgb.b, COLOR_CHANNEL),
        }

        if self.channel.is_hsv() {
            self.rgb = hsv2rgb(self.hsv);
        } else {
            self.hsv.hue = rgb2hue(self.rgb);
        }

        self.persist(config);
        self.push_backlight();
    }

    fn persist(&self, config: &mut ConfigStore) {
        let values = [
            (ColorChannel::Red, u16::from(self.rgb.r)),
            (ColorChannel::Green, u16::from(self.rgb.g)),
            (ColorChannel::Blue, u16::from(self.rgb.b)),
            (ColorChannel::Hue, hue_to_steps(self.hsv.hue)),
            (ColorChannel::Saturation, u16::from(self.hsv.sat)),
            (ColorChannel::Value, u16::from(self.hsv.val)),
        ];
        for (channel, value) in values {
            config.set(BACKLIGHT_SECTION, channel.key(), &value.to_string());
        }
    }

    fn push_backlight(&mut self) {
        self.backlight.set_rgb(self.rgb.r, self.rgb.g, self.rgb.b);
    }
}

impl<B: Backlight> MenuOption for ColorOption<B> {
    fn setup(&mut self, ctx: &mut OptionContext<'_>) {
        let config = &mut *ctx.config;
        let load_channel = |config: &mut ConfigStore, channel: ColorChannel| {
            load_bounded(config, BACKLIGHT_SECTION, channel.key(), 255, COLOR_CHANNEL)
        };
        self.rgb = Rgb {
            r: load_channel(config, ColorChannel::Red),
            g: load_channel(config, ColorChannel::Green),
            b: load_channel(config, ColorChannel::Blue),
        };

        let mut hue_steps =
            config.get_parsed_or_insert::<f64>(BACKLIGHT_SECTION, ColorChannel::Hue.key(), 0.0);
        if !hue_steps.is_finite() {
            log::warn!("config value {}.h is not finite, reset to 0", BACKLIGHT_SECTION);
            config.set(BACKLIGHT_SECTION, ColorChannel::Hue.key(), "0");
            hue_steps = 0.0;
        }
        self.hsv = Hsv {
            hue: hue_from_steps(hue_steps),
            sat: load_bounded(
                config,
                BACKLIGHT_SECTION,
                ColorChannel::Saturation.key(),
                DEFAULT_HSV.sat,
                PERCENT,
            ),
            val: load_bounded(
                config,
                BACKLIGHT_SECTION,
                ColorChannel::Value.key(),
                DEFAULT_HSV.val,
                PERCENT,
            ),
        };

        self.push_backlight();
    }

    fn up(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.step(ctx.config, true);
        true
    }

    fn down(&mut self, ctx: &mut OptionContext<'_>) -> bool {
        self.step(ctx.config, false);
        true
    }

    fn left(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        self.channel = self.channel.previous();
        true
    }

    fn right(&mut self, _ctx: &mut OptionContext<'_>) -> bool {
        self.channel = self.channel.next();
        true
    }

    fn redraw(&self, canvas: &mut Canvas<'_>) {
        canvas.write_row(0, self.title);
        canvas.write_row_fmt(
            1,
            format_args!(
                "HSV: {:03} {:03} {:03}",
                hue_to_steps(self.hsv.hue),
                self.hsv.sat,
                self.hsv.val
            ),
        );
        canvas.write_row_fmt(
            2,
            format_args!(
                "RGB: {:03} {:03} {:03}",
                self.rgb.r, self.rgb.g, self.rgb.b
            ),
        );

        let (column, row) = self.channel.cursor();
        canvas.set_cursor(column, row);
        canvas.write_glyph(SELECTION_GLYPH);
    }
}
