//! Color helpers: HSL lightness scaling, clamped blending and 24-bit packing.

use datlight_math::{Interval, Vec3};

/// Color type alias (RGB values 0-1)
pub type Color = Vec3;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;

/// Convert RGB to `(hue, saturation, lightness)`, all in [0, 1].
pub fn rgb_to_hsl(color: Color) -> (f32, f32, f32) {
    let max = color.max_element();
    let min = color.min_element();
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let delta = max - min;
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let rc = (max - color.x) / delta;
    let gc = (max - color.y) / delta;
    let bc = (max - color.z) / delta;

    let h = if color.x == max {
        bc - gc
    } else if color.y == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((h / 6.0).rem_euclid(1.0), s, l)
}

/// Convert `(hue, saturation, lightness)` back to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        return Color::splat(l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    Color::new(
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

fn hue_channel(m1: f32, m2: f32, hue: f32) -> f32 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// Darken (or lighten) a color by multiplying its HSL lightness.
pub fn scale_lightness(color: Color, factor: f32) -> Color {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb(h, s, Interval::UNIT.clamp(l * factor))
}

/// Add two colors, capping each channel at 1.0.
#[inline]
pub fn blend(a: Color, b: Color) -> Color {
    (a + b).min(WHITE)
}

/// Pack a color into `R * 65536 + G * 256 + B`, 8 bits per channel.
pub fn pack_rgb(color: Color) -> u32 {
    let channel = |c: f32| (Interval::UNIT.clamp(c) * 255.0) as u32;
    channel(color.x) * 65536 + channel(color.y) * 256 + channel(color.z)
}

/// Split a packed color back into 8-bit channels.
pub fn unpack_rgb(packed: u32) -> [u8; 3] {
    [
        ((packed >> 16) & 255) as u8,
        ((packed >> 8) & 255) as u8,
        (packed & 255) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Color, b: Color) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn test_hsl_primaries() {
        let (h, s, l) = rgb_to_hsl(Color::new(1.0, 0.0, 0.0));
        assert!(h.abs() < 1e-6);
        assert_eq!(s, 1.0);
        assert_eq!(l, 0.5);

        let (h, _, _) = rgb_to_hsl(Color::new(0.0, 1.0, 0.0));
        assert!((h - 1.0 / 3.0).abs() < 1e-6);

        let (h, _, _) = rgb_to_hsl(Color::new(0.0, 0.0, 1.0));
        assert!((h - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_hsl_round_trip() {
        let color = Color::new(0.8, 0.5, 0.7);
        let (h, s, l) = rgb_to_hsl(color);
        assert!(approx_eq(hsl_to_rgb(h, s, l), color));
    }

    #[test]
    fn test_scale_lightness_gray() {
        assert!(approx_eq(scale_lightness(WHITE, 0.2), Color::splat(0.2)));
        assert_eq!(scale_lightness(BLACK, 0.5), BLACK);
    }

    #[test]
    fn test_scale_lightness_keeps_hue() {
        let darker = scale_lightness(Color::new(1.0, 0.0, 0.0), 0.5);
        assert!(approx_eq(darker, Color::new(0.5, 0.0, 0.0)));

        let pink = Color::new(0.8, 0.5, 0.7);
        let shadowed = scale_lightness(pink, 0.1);
        let (h0, _, l0) = rgb_to_hsl(pink);
        let (h1, _, l1) = rgb_to_hsl(shadowed);
        assert!((h0 - h1).abs() < 1e-3);
        assert!((l1 - l0 * 0.1).abs() < 1e-4);
    }

    #[test]
    fn test_blend_clamps() {
        let samples = [
            (WHITE, WHITE),
            (Color::new(0.9, 0.1, 0.5), Color::new(0.3, 0.2, 0.6)),
            (BLACK, Color::new(0.25, 1.0, 0.0)),
        ];

        for (a, b) in samples {
            let c = blend(a, b);
            assert!(c.max_element() <= 1.0, "{:?} + {:?} = {:?}", a, b, c);
        }
        assert!(approx_eq(
            blend(Color::new(0.9, 0.1, 0.5), Color::new(0.3, 0.2, 0.6)),
            Color::new(1.0, 0.3, 1.0)
        ));
    }

    #[test]
    fn test_pack_rgb() {
        assert_eq!(pack_rgb(WHITE), 0xFF_FF_FF);
        assert_eq!(pack_rgb(BLACK), 0);
        assert_eq!(pack_rgb(Color::new(1.0, 0.0, 0.0)), 255 * 65536);
        assert_eq!(pack_rgb(Color::new(0.0, 0.5, 0.0)), 127 * 256);
        // Out of range channels are clamped
        assert_eq!(pack_rgb(Color::new(2.0, -1.0, 0.0)), 255 * 65536);
    }

    #[test]
    fn test_unpack_rgb() {
        assert_eq!(unpack_rgb(0x12_34_56), [0x12, 0x34, 0x56]);
        assert_eq!(unpack_rgb(pack_rgb(Color::new(0.8, 0.5, 0.7))), [204, 127, 178]);
    }
}
