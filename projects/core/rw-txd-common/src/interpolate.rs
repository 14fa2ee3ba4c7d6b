//! # Colour Table Construction
//!
//! DXT1 and DXT3 blocks store two [`Color565`] endpoints and derive two more
//! colours from them. Which two depends on the raw numeric order of the endpoints:
//!
//! | Condition            | entry 2           | entry 3               |
//! |----------------------|-------------------|-----------------------|
//! | `color0 > color1`    | lerp at `t=0.33`  | lerp at `t=0.67`      |
//! | `color0 <= color1`   | lerp at `t=0.5`   | transparent `(0,0,0,0)` |
//!
//! Interpolated channels are rounded half-up, so for example a midpoint between
//! `0` and `255` becomes `128`.

use crate::color_565::Color565;
use crate::color_8888::Color8888;

/// Weight of the first derived colour in opaque mode.
pub const ONE_THIRD: f64 = 0.33;
/// Weight of the second derived colour in opaque mode.
pub const TWO_THIRDS: f64 = 0.67;
/// Weight of the derived colour in transparent mode.
pub const HALF: f64 = 0.5;

/// Linear interpolation of a single channel, rounding ties up.
///
/// `t = 0` yields `start`, `t = 1` yields `end`.
#[inline]
pub fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let value = start as f64 + t * (end as f64 - start as f64);
    // The value lies between `start` and `end`, so it is never negative and
    // truncation acts as `floor`.
    (value + 0.5) as u8
}

/// Interpolates every channel (alpha included) of two colours.
#[inline]
pub fn lerp_color(start: Color8888, end: Color8888, t: f64) -> Color8888 {
    Color8888::new(
        lerp_channel(start.r, end.r, t),
        lerp_channel(start.g, end.g, t),
        lerp_channel(start.b, end.b, t),
        lerp_channel(start.a, end.a, t),
    )
}

/// Builds the 4-entry colour table of a DXT1/DXT3 colour block.
///
/// Entries 0 and 1 are the expanded endpoints with alpha 255. Entries 2 and 3
/// follow the table in the module documentation.
///
/// # Examples
///
/// ```
/// use rw_txd_common::color_565::Color565;
/// use rw_txd_common::color_8888::Color8888;
/// use rw_txd_common::interpolate::interpolate_565;
///
/// // Pure blue <= pure red, so this is a transparent-mode block.
/// let table = interpolate_565(Color565::from_raw(0x001F), Color565::from_raw(0xF800));
/// assert_eq!(table[3], Color8888::TRANSPARENT);
/// ```
pub fn interpolate_565(color0: Color565, color1: Color565) -> [Color8888; 4] {
    let c0 = color0.to_color_8888();
    let c1 = color1.to_color_8888();

    if color0.greater_than(&color1) {
        [
            c0,
            c1,
            lerp_color(c0, c1, ONE_THIRD),
            lerp_color(c0, c1, TWO_THIRDS),
        ]
    } else {
        [c0, c1, lerp_color(c0, c1, HALF), Color8888::TRANSPARENT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 255, 0.0, 0)]
    #[case(0, 255, 1.0, 255)]
    #[case(0, 255, HALF, 128)]
    #[case(255, 0, HALF, 128)]
    #[case(255, 0, ONE_THIRD, 171)] // 170.85
    #[case(255, 0, TWO_THIRDS, 84)] // 84.15
    #[case(0, 255, ONE_THIRD, 84)] // 84.15
    #[case(0, 255, TWO_THIRDS, 171)] // 170.85
    #[case(100, 100, TWO_THIRDS, 100)]
    fn lerp_channel_rounds_half_up(
        #[case] start: u8,
        #[case] end: u8,
        #[case] t: f64,
        #[case] expected: u8,
    ) {
        assert_eq!(lerp_channel(start, end, t), expected);
    }

    #[test]
    fn opaque_mode_uses_thirds() {
        let red = Color565::from_raw(0xF800);
        let blue = Color565::from_raw(0x001F);
        let table = interpolate_565(red, blue);

        assert_eq!(table[0], Color8888::new(255, 0, 0, 255));
        assert_eq!(table[1], Color8888::new(0, 0, 255, 255));
        assert_eq!(table[2], Color8888::new(171, 0, 84, 255));
        assert_eq!(table[3], Color8888::new(84, 0, 171, 255));
    }

    #[test]
    fn transparent_mode_uses_midpoint_and_transparent_black() {
        let blue = Color565::from_raw(0x001F);
        let red = Color565::from_raw(0xF800);
        let table = interpolate_565(blue, red);

        assert_eq!(table[0], Color8888::new(0, 0, 255, 255));
        assert_eq!(table[1], Color8888::new(255, 0, 0, 255));
        assert_eq!(table[2], Color8888::new(128, 0, 128, 255));
        assert_eq!(table[3], Color8888::new(0, 0, 0, 0));
    }

    #[test]
    fn equal_endpoints_select_transparent_mode() {
        let c = Color565::from_raw(0x1234);
        let table = interpolate_565(c, c);
        assert_eq!(table[2], c.to_color_8888());
        assert_eq!(table[3], Color8888::TRANSPARENT);
    }

    #[test]
    fn derived_entries_lie_between_endpoints() {
        // Sparse sweep over endpoint pairs; exhaustive would be 2^32 tables.
        for c0 in (0..=u16::MAX).step_by(251) {
            for c1 in (0..=u16::MAX).step_by(257) {
                let color0 = Color565::from_raw(c0);
                let color1 = Color565::from_raw(c1);
                let table = interpolate_565(color0, color1);

                assert_eq!(table[0], color0.to_color_8888());
                assert_eq!(table[1], color1.to_color_8888());

                let derived: &[Color8888] = if c0 > c1 { &table[2..4] } else { &table[2..3] };
                for entry in derived {
                    assert!(within(entry.r, table[0].r, table[1].r));
                    assert!(within(entry.g, table[0].g, table[1].g));
                    assert!(within(entry.b, table[0].b, table[1].b));
                    assert_eq!(entry.a, 255);
                }
                if c0 <= c1 {
                    assert_eq!(table[3], Color8888::TRANSPARENT);
                }
            }
        }
    }

    fn within(value: u8, a: u8, b: u8) -> bool {
        value >= a.min(b) && value <= a.max(b)
    }
}
