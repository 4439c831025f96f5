// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The finished image: a row-major grid of colors, and the byte
//! layouts an encoder wants.

use colors::{Rgba, BOUNDED};
use itertools::iproduct;
use std::slice::ChunksMut;

/// A `width` by `height` grid of colors.  Row `y` occupies the
/// `width` entries starting at `y * width`.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// A buffer with every pixel set to the bounded color.  Both
    /// dimensions must be non-zero; panics otherwise.
    pub fn new(width: u32, height: u32) -> PixelBuffer {
        assert!(
            width > 0 && height > 0,
            "a pixel buffer can't be {}x{}",
            width,
            height
        );
        PixelBuffer {
            width,
            height,
            pixels: vec![BOUNDED; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside a {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// The color at column `x`, row `y`.  Panics outside the buffer.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.offset(x, y)]
    }

    /// Sets the color at column `x`, row `y`.  Panics outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    /// One row of the image, left to right.
    pub fn row(&self, y: u32) -> &[Rgba] {
        let start = self.offset(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Splits the buffer into disjoint, mutable rows, top to bottom.
    /// This is how rows get handed to workers: each slice can only
    /// have one owner.
    pub fn rows_mut(&mut self) -> ChunksMut<Rgba> {
        self.pixels.chunks_mut(self.width as usize)
    }

    /// Every pixel with its coordinates, in row-major order.
    pub fn enumerate_pixels<'a>(&'a self) -> impl Iterator<Item = (u32, u32, Rgba)> + 'a {
        iproduct!(0..self.height, 0..self.width).map(move |(y, x)| (x, y, self.get(x, y)))
    }

    /// The image as packed R, G, B, A bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.0.iter().cloned()).collect()
    }

    /// The image as packed R, G, B bytes, alpha dropped.  Most lossy
    /// encoders don't take an alpha channel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.extend_from_slice(&p.rgb());
        }
        bytes
    }
}
