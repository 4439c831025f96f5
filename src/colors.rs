// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The palette.  Escape counts are turned into colors by walking
//! around the hue wheel, starting at blue, a few degrees per
//! iteration.  The whole table is built once, before any rendering
//! starts, and shared read-only after that.

use num::clamp;
use std::ops::Index;

/// An 8-bit-per-channel color, in R, G, B, A order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

/// Points that never escape are painted solid black.  No palette entry
/// can be black, since every fully saturated, full-value hue has at
/// least one channel at its maximum.
pub const BOUNDED: Rgba = Rgba([0, 0, 0, 255]);

/// The hue every palette starts from.
const START_HUE: f64 = 240.0;

impl Rgba {
    /// Converts floating-point channels in `[0, 1]` to an opaque
    /// 8-bit color.  Rounds rather than truncates; truncating would bias
    /// every channel toward the dark end.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Rgba {
        Rgba([quantize(r), quantize(g), quantize(b), 255])
    }

    /// The color without its alpha channel.
    pub fn rgb(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

#[inline]
fn quantize(v: f64) -> u8 {
    (clamp(v, 0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Converts a hue in degrees, a saturation in `[0, 1]` and a value in
/// `[0, 1]` to red, green, and blue in `[0, 1]`.  Hues outside
/// `[0, 360)` wrap around.
pub fn hsv(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
    let hp = hue.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let m = value - c;

    // A tiny negative hue wraps to exactly 360, which is red again.
    let (r, g, b) = match hp as u32 {
        0 | 6 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        5 => (c, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    (m + r, m + g, m + b)
}

/// One color per possible escape count.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTable {
    colors: Vec<Rgba>,
}

impl ColorTable {
    /// Builds `max_iterations` entries.  Entry `i` sits at
    /// `floor(i * speed + 240) mod 360` degrees on the hue wheel, fully
    /// saturated and at full value.
    pub fn new(max_iterations: usize, speed: f64) -> ColorTable {
        let colors = (0..max_iterations)
            .map(|i| {
                let angle = (i as f64 * speed + START_HUE).floor().rem_euclid(360.0);
                let (r, g, b) = hsv(angle, 1.0, 1.0);
                Rgba::from_unit(r, g, b)
            })
            .collect();
        ColorTable { colors }
    }

    /// The number of entries, which is the iteration cap it was built for.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when built for an iteration cap of zero.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color for an escape result: the table entry for an escape
    /// count, or `BOUNDED` for a point that never escaped.
    #[inline]
    pub fn color(&self, escape: Option<usize>) -> Rgba {
        match escape {
            Some(i) => self.colors[i],
            None => BOUNDED,
        }
    }

    /// Walks the entries in escape-count order.
    pub fn iter(&self) -> ::std::slice::Iter<Rgba> {
        self.colors.iter()
    }
}

impl Index<usize> for ColorTable {
    type Output = Rgba;

    fn index(&self, i: usize) -> &Rgba {
        &self.colors[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsv(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hsv(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(hsv(360.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn hues_just_below_zero_wrap_to_red() {
        assert_eq!((-1e-20f64).rem_euclid(360.0), 360.0);
        assert_eq!(hsv(-1e-20, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsv(-120.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn hsv_secondaries_and_greys() {
        assert_eq!(hsv(60.0, 1.0, 1.0), (1.0, 1.0, 0.0));
        assert_eq!(hsv(180.0, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_eq!(hsv(300.0, 1.0, 1.0), (1.0, 0.0, 1.0));
        assert_eq!(hsv(90.0, 0.0, 0.5), (0.5, 0.5, 0.5));
    }

    #[test]
    fn quantizing_rounds_to_nearest() {
        assert_eq!(Rgba::from_unit(0.5, 1.0, 0.0), Rgba([128, 255, 0, 255]));
        assert_eq!(Rgba::from_unit(0.499 / 255.0, 1.5, -0.2), Rgba([0, 255, 0, 255]));
        assert_eq!(Rgba::from_unit(0.51 / 255.0, 0.0, 0.0), Rgba([1, 0, 0, 255]));
    }

    #[test]
    fn table_has_one_entry_per_iteration() {
        assert_eq!(ColorTable::new(500, 3.0).len(), 500);
        assert!(ColorTable::new(0, 3.0).is_empty());
    }

    #[test]
    fn first_entry_is_blue_at_any_speed() {
        for speed in &[0.0, 1.0, 3.0, 7.5, -2.0] {
            assert_eq!(ColorTable::new(10, *speed)[0], Rgba([0, 0, 255, 255]));
        }
    }

    #[test]
    fn table_walks_the_hue_wheel() {
        let table = ColorTable::new(50, 3.0);
        // 240 + 20 * 3 = 300 degrees, magenta.
        assert_eq!(table[20], Rgba([255, 0, 255, 255]));
        // 240 + 40 * 3 = 360, which wraps back to red.
        assert_eq!(table[40], Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn negative_speeds_wrap_the_other_way() {
        let table = ColorTable::new(3, -120.0);
        assert_eq!(table[1], Rgba([0, 255, 0, 255]));
        assert_eq!(table[2], Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn bounded_never_appears_in_the_table() {
        let table = ColorTable::new(1000, 3.7);
        assert!(table.iter().all(|c| *c != BOUNDED && c.0[3] == 255));
        assert_eq!(table.color(None), BOUNDED);
        assert_eq!(table.color(Some(7)), table[7]);
    }
}
