// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners.  Unlike a clamp, the mapping is a straight linear
//! interpolation, so the corners may come in either order; a "min"
//! larger than its "max" simply flips that axis.

use complex::Complex;
use errors::RenderError;
use settings::RenderSettings;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Takes a value between a range of numbers and maps it to the
/// same relative position inside a new range.  15 in 10..20 becomes
/// 50 in 0..100.
///
/// Any ordering of the bounds works.  If `in_min == in_max` there is
/// no range to map from and the result is whatever IEEE-754 says about
/// dividing by zero: an infinity, or NaN when the numerator is zero
/// too.  Callers are expected to hand in a real range.
#[inline]
pub fn normalize(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + ((value - in_min) * (out_max - out_min)) / (in_max - in_min)
}

/// Maps pixels on the integral plane to points on the complex plane.
/// Every column and row coordinate is computed exactly once, when the
/// mapper is built; after that a lookup is two vector reads.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-lower hand corner of the integral cartesian plane.
    /// The origin is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane and two
    /// corners of the complex plane, and precomputes the coordinate
    /// grid between them.  Fails if either plane has no extent.
    pub fn new(
        width: usize,
        height: usize,
        min: Complex,
        max: Complex,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyRaster { width, height });
        }
        if min.re == max.re {
            return Err(RenderError::DegenerateInterval {
                axis: 'x',
                bound: min.re,
            });
        }
        if min.im == max.im {
            return Err(RenderError::DegenerateInterval {
                axis: 'y',
                bound: min.im,
            });
        }

        let xs = (0..width)
            .map(|x| normalize(x as f64, 0.0, width as f64, min.re, max.re))
            .collect();
        let ys = (0..height)
            .map(|y| normalize(y as f64, 0.0, height as f64, min.im, max.im))
            .collect();

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            xs,
            ys,
        })
    }

    /// Builds the mapper for a set of render settings.
    pub fn from_settings(settings: &RenderSettings) -> Result<PlaneMapper, RenderError> {
        PlaneMapper::new(
            settings.pixel_width as usize,
            settings.pixel_height as usize,
            Complex::new(settings.plane_min_x, settings.plane_min_y),
            Complex::new(settings.plane_max_x, settings.plane_max_y),
        )
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The real component shared by every pixel in column `x`.
    #[inline]
    pub fn column(&self, x: usize) -> f64 {
        self.xs[x]
    }

    /// The imaginary component shared by every pixel in row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> f64 {
        self.ys[y]
    }

    /// All precomputed column coordinates, left to right.
    pub fn columns(&self) -> &[f64] {
        &self.xs
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// point on the complex plane it stands for.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        Complex::new(self.xs[pixel.0], self.ys[pixel.1])
    }
}
