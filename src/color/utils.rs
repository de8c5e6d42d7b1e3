use crate::bounds::{COLOR_CHANNEL, PERCENT, wrap_unit};
use crate::color::{Hsv, Rgb};

/// Number of hue steps shown on the display (0-359 scale)
pub const HUE_STEPS: f64 = 359.0;

/// Convert HSV to RGB.
///
/// Channels are truncated, not rounded, so full value with zero
/// saturation maps to exactly 255.
#[allow(clippy::cast_possible_truncation)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let (r, g, b) = unit_hsv_to_rgb(
        hsv.hue,
        f64::from(hsv.sat) / 100.0,
        f64::from(hsv.val) / 100.0,
    );
    Rgb {
        r: unit_to_channel(r),
        g: unit_to_channel(g),
        b: unit_to_channel(b),
    }
}

/// Hue of an RGB color on the unit circle.
///
/// Grey colors (including black and white) have no hue and yield 0.
pub fn rgb2hue(rgb: Rgb) -> f64 {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = libm::fmax(libm::fmax(r, g), b);
    let min = libm::fmin(libm::fmin(r, g), b);
    let span = max - min;
    if span <= 0.0 {
        return 0.0;
    }

    let rc = (max - r) / span;
    let gc = (max - g) / span;
    let bc = (max - b) / span;

    let sector = if r >= max {
        bc - gc
    } else if g >= max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    wrap_unit(sector / 6.0)
}

/// Convert RGB to HSV, rounding saturation and value to whole percents
#[allow(clippy::cast_possible_truncation)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    let val = libm::round(f64::from(max) * 100.0 / 255.0) as i64;
    let sat = if max == 0 {
        0
    } else {
        libm::round(f64::from(max - min) * 100.0 / f64::from(max)) as i64
    };

    Hsv {
        hue: rgb2hue(rgb),
        sat: PERCENT.clamp(sat),
        val: PERCENT.clamp(val),
    }
}

/// Hue expressed on the 0-359 display scale
///
/// Rounded rather than truncated: a hue read back as `steps / 359` lands a
/// hair below the step, and truncating it would lose one step per reload.
#[allow(clippy::cast_possible_truncation)]
pub fn hue_to_steps(hue: f64) -> u16 {
    let steps = libm::round(hue * HUE_STEPS);
    if steps <= 0.0 { 0 } else { libm::fmin(steps, HUE_STEPS) as u16 }
}

/// Hue on the unit circle from a value on the 0-359 display scale
pub fn hue_from_steps(steps: f64) -> f64 {
    wrap_unit(steps / HUE_STEPS)
}

#[allow(clippy::cast_possible_truncation)]
fn unit_to_channel(value: f64) -> u8 {
    COLOR_CHANNEL.clamp(libm::floor(value * 255.0) as i64)
}

#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
fn unit_hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }
    let sector = libm::floor(h * 6.0);
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
