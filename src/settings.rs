// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs for a single render.  Once a renderer has been built
//! from these they don't change.

use errors::RenderError;

/// The parameters of one render: which rectangle of the complex plane
/// to look at, how many pixels to spread it across, how hard to try
/// before calling a point bounded, and how fast the palette cycles.
///
/// The plane bounds are interpolated, not clamped, so a `min` larger
/// than its `max` is legal and flips that axis in the output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// The real component at the left edge.
    pub plane_min_x: f64,
    /// The real component at the right edge.
    pub plane_max_x: f64,
    /// The imaginary component at the top row.
    pub plane_min_y: f64,
    /// The imaginary component at the bottom edge.
    pub plane_max_y: f64,
    /// Width of the output in pixels.
    pub pixel_width: u32,
    /// Height of the output in pixels.
    pub pixel_height: u32,
    /// How many degrees of hue each iteration advances the palette.
    pub color_speed: f64,
    /// The number of iterations after which a point is called bounded.
    pub max_iterations: usize,
}

impl Default for RenderSettings {
    /// A deep zoom into a filament near -0.075 - 0.83i.
    fn default() -> Self {
        RenderSettings {
            plane_min_x: -0.08,
            plane_max_x: -0.07,
            plane_min_y: -0.825,
            plane_max_y: -0.835,
            pixel_width: 4000,
            pixel_height: 4000,
            color_speed: 3.0,
            max_iterations: 500,
        }
    }
}

impl RenderSettings {
    /// Settings for a `width` by `height` raster over the given plane,
    /// with the default palette speed and iteration cap.
    pub fn new(width: u32, height: u32, x: (f64, f64), y: (f64, f64)) -> Self {
        RenderSettings {
            plane_min_x: x.0,
            plane_max_x: x.1,
            plane_min_y: y.0,
            plane_max_y: y.1,
            pixel_width: width,
            pixel_height: height,
            ..Default::default()
        }
    }

    /// Replaces the iteration cap.
    pub fn with_iterations(self, max_iterations: usize) -> Self {
        RenderSettings {
            max_iterations,
            ..self
        }
    }

    /// Replaces the palette speed.
    pub fn with_color_speed(self, color_speed: f64) -> Self {
        RenderSettings {
            color_speed,
            ..self
        }
    }

    /// Checks that these settings describe something renderable.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(RenderError::EmptyRaster {
                width: self.pixel_width as usize,
                height: self.pixel_height as usize,
            });
        }
        check_interval('x', self.plane_min_x, self.plane_max_x)?;
        check_interval('y', self.plane_min_y, self.plane_max_y)?;
        if !self.color_speed.is_finite() {
            return Err(RenderError::NonFiniteColorSpeed);
        }
        Ok(())
    }
}

fn check_interval(axis: char, min: f64, max: f64) -> Result<(), RenderError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RenderError::NonFiniteBound { axis });
    }
    if min == max {
        return Err(RenderError::DegenerateInterval { axis, bound: min });
    }
    Ok(())
}
