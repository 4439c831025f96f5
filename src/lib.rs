#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the collection of points `c` on the complex
//! plane for which repeatedly squaring and adding, `z = z² + c`
//! starting from zero, never runs off to infinity.  Points outside
//! the set do run away, and how many steps it takes them to get past
//! radius 2 (their "escape time") is what gives the picture its
//! color.  Points that are still inside radius 2 when we give up are
//! painted black.
//!
//! Rendering is: map every pixel to a point on the plane, run the
//! escape-time test on it, and look the count up in a palette.  The
//! pixel-to-plane mapping and the palette are computed once up front,
//! and then the rows of the image are filled in parallel, each row by
//! exactly one worker.  The result doesn't depend on how many workers
//! there are or in what order they finish.
//!
//! This crate doesn't do any I/O; encoding and writing the image is
//! up to the caller (see the `mandelbrot` binary).

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod colors;
pub mod complex;
pub mod errors;
pub mod escape;
pub mod pixels;
pub mod planes;
pub mod renderer;
pub mod settings;

pub use colors::{ColorTable, Rgba, BOUNDED};
pub use complex::Complex;
pub use errors::RenderError;
pub use escape::escape_time;
pub use pixels::PixelBuffer;
pub use planes::{normalize, PlaneMapper};
pub use renderer::MandelbrotRenderer;
pub use settings::RenderSettings;

/// Renders the image described by `settings`, with one worker thread
/// per logical CPU.
pub fn render(settings: &RenderSettings) -> Result<PixelBuffer, RenderError> {
    render_with_threads(settings, num_cpus::get())
}

/// Renders the image described by `settings` with exactly `threads`
/// worker threads.  Settings are checked before any thread starts.
pub fn render_with_threads(
    settings: &RenderSettings,
    threads: usize,
) -> Result<PixelBuffer, RenderError> {
    MandelbrotRenderer::new(settings)?.render(threads)
}
