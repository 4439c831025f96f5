// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The MandelbrotRenderer fills a pixel buffer one row at a time.
//! All of the expensive setup (the coordinate grid and the palette)
//! happens once, in the constructor; after that every row is an
//! independent job that reads shared, immutable state and writes only
//! to its own slice of the buffer.  That independence is what lets
//! the threaded version hand rows out in any order and still produce
//! exactly the same image as the single-threaded one.

extern crate crossbeam;

use colors::{ColorTable, Rgba};
use complex::Complex;
use errors::RenderError;
use escape::escape_time;
use pixels::PixelBuffer;
use planes::PlaneMapper;
use settings::RenderSettings;
use std::iter::Enumerate;
use std::slice::ChunksMut;
use std::sync::{Arc, Mutex, PoisonError};

type RowQueue<'a> = Arc<Mutex<Enumerate<ChunksMut<'a, Rgba>>>>;

/// Holds everything a row job needs to read.  Once built, this object
/// is never mutated, so it can be shared freely between threads.
pub struct MandelbrotRenderer {
    plane: PlaneMapper,
    colors: ColorTable,
    limit: usize,
}

impl MandelbrotRenderer {
    /// Validates the settings and precomputes the coordinate grid and
    /// the color table.  Nothing is rendered yet.
    pub fn new(settings: &RenderSettings) -> Result<Self, RenderError> {
        settings.validate()?;
        let plane = PlaneMapper::from_settings(settings)?;
        let colors = ColorTable::new(settings.max_iterations, settings.color_speed);
        Ok(MandelbrotRenderer {
            plane,
            colors,
            limit: settings.max_iterations,
        })
    }

    /// The coordinate grid this renderer samples.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The palette this renderer paints with.
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn new_buffer(&self) -> PixelBuffer {
        PixelBuffer::new(
            self.plane.integral_plane.0 as u32,
            self.plane.integral_plane.1 as u32,
        )
    }

    /// Computes row `y` into `row`, which must be exactly one image
    /// width long.
    pub fn fill_row(&self, y: usize, row: &mut [Rgba]) {
        debug_assert_eq!(row.len(), self.plane.integral_plane.0);
        let im = self.plane.row(y);
        for (pixel, re) in row.iter_mut().zip(self.plane.columns()) {
            let c = Complex::new(*re, im);
            *pixel = self.colors.color(escape_time(c, self.limit));
        }
        trace!("row {} done", y);
    }

    /// The main function for single-threaded rendering.  Rows are
    /// filled top to bottom on the calling thread.
    pub fn render_single(&self) -> PixelBuffer {
        let mut buffer = self.new_buffer();
        for (y, row) in buffer.rows_mut().enumerate() {
            self.fill_row(y, row);
        }
        buffer
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.  The rows of the buffer go into a single queue;
    /// each worker pulls the next row, fills it, and comes back for
    /// more until the queue is dry.  The queue hands out every row
    /// exactly once, so no two workers ever touch the same pixels.
    pub fn render(&self, threads: usize) -> Result<PixelBuffer, RenderError> {
        if threads == 0 {
            return Err(RenderError::NoWorkers);
        }
        debug!(
            "rendering {}x{} with {} iterations on {} threads",
            self.plane.integral_plane.0, self.plane.integral_plane.1, self.limit, threads
        );

        let mut buffer = self.new_buffer();
        crossbeam::scope(|spawner| {
            let rows: RowQueue = Arc::new(Mutex::new(buffer.rows_mut().enumerate()));
            for _ in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| loop {
                    // A poisoned lock means another worker panicked;
                    // the scope reports that once everyone's joined.
                    let next = { rows.lock().unwrap_or_else(PoisonError::into_inner).next() };
                    match next {
                        Some((y, row)) => self.fill_row(y, row),
                        None => {
                            break;
                        }
                    }
                });
            }
        })
        .map_err(|_| RenderError::WorkerPanicked)?;

        debug!("render complete");
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::BOUNDED;

    fn classic(width: u32, height: u32, iterations: usize) -> RenderSettings {
        RenderSettings::new(width, height, (-2.0, 1.0), (-1.5, 1.5)).with_iterations(iterations)
    }

    #[test]
    fn rejects_bad_settings_before_rendering() {
        let settings = RenderSettings {
            pixel_width: 0,
            ..classic(4, 4, 50)
        };
        assert!(MandelbrotRenderer::new(&settings).is_err());
    }

    #[test]
    fn rejects_zero_threads() {
        let renderer = MandelbrotRenderer::new(&classic(4, 4, 50)).unwrap();
        assert_eq!(renderer.render(0).unwrap_err(), RenderError::NoWorkers);
    }

    #[test]
    fn palette_matches_the_settings() {
        let renderer = MandelbrotRenderer::new(&classic(4, 4, 77)).unwrap();
        assert_eq!(renderer.colors().len(), 77);
        assert_eq!(renderer.plane().len(), 16);
    }

    #[test]
    fn fill_row_paints_escapes_and_members() {
        let renderer = MandelbrotRenderer::new(&classic(4, 4, 50)).unwrap();
        let mut row = vec![Rgba([1, 2, 3, 4]); 4];
        // Row 2 is the real axis: -2, -1.25, -0.5, 0.25.
        renderer.fill_row(2, &mut row);
        assert!(row.iter().all(|p| *p == BOUNDED));

        // Row 0 is im = -1.5; -2 - 1.5i is outside radius 2 at once.
        renderer.fill_row(0, &mut row);
        assert_eq!(row[0], renderer.colors()[0]);
    }

    #[test]
    fn single_and_threaded_agree() {
        let renderer = MandelbrotRenderer::new(&classic(37, 23, 100)).unwrap();
        let single = renderer.render_single();
        for threads in 1..6 {
            assert_eq!(renderer.render(threads).unwrap(), single);
        }
    }

    #[test]
    fn more_threads_than_rows_is_fine() {
        let renderer = MandelbrotRenderer::new(&classic(5, 2, 20)).unwrap();
        assert_eq!(renderer.render(16).unwrap(), renderer.render_single());
    }
}
