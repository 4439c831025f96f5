// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render.  All but the last are problems
//! with the settings, and all of those are caught before a single
//! worker is started.  There's no "ran too long" error: the escape
//! loop is bounded by the iteration cap, so it always finishes.

/// Reasons a render can't produce a buffer.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The raster has no pixels in at least one direction.
    #[fail(display = "image size must be non-zero, got {}x{}", width, height)]
    EmptyRaster {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// Both ends of a plane axis are the same value, so there's no
    /// interval to spread the pixels across.
    #[fail(display = "the {} range of the plane is empty (both ends are {})", axis, bound)]
    DegenerateInterval {
        /// `'x'` for the real axis, `'y'` for the imaginary one.
        axis: char,
        /// The value both ends share.
        bound: f64,
    },

    /// A plane bound is NaN or infinite.
    #[fail(display = "the {} range of the plane must be finite", axis)]
    NonFiniteBound {
        /// `'x'` for the real axis, `'y'` for the imaginary one.
        axis: char,
    },

    /// The color speed is NaN or infinite.
    #[fail(display = "color speed must be a finite number")]
    NonFiniteColorSpeed,

    /// Asked to render with no threads at all.
    #[fail(display = "at least one worker thread is required")]
    NoWorkers,

    /// A worker thread panicked; whatever it was writing is lost.
    #[fail(display = "a render worker panicked")]
    WorkerPanicked,
}
