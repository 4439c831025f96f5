// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test itself.

use complex::Complex;

/// Once |z| passes 2 the orbit is guaranteed to run off to infinity.
/// We compare squares so we never take a root.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// This is our classic iterator function, which either returns the
/// number of iterations it took to escape the Mandelbrot set, or
/// it returns nothing at all.
///
/// Starting from z = 0, each step tests z and then computes
/// z = z² + c, so only the iterates z_0 through z_(max - 1) are ever
/// looked at.  `Some(i)` means z_(i + 1) was the first one outside
/// radius 2: a point far enough out escapes at 0, and the origin never
/// escapes at all.  The loop is bounded by `max_iterations`, so this
/// always returns.
#[inline]
pub fn escape_time(c: Complex, max_iterations: usize) -> Option<usize> {
    let mut z = Complex::new(0.0, 0.0);
    for i in 0..max_iterations {
        // z_0 is the origin, so this can't fire while i is 0.
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            return Some(i - 1);
        }
        z *= z;
        z += c;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_never_escapes() {
        for limit in &[0, 1, 2, 50, 10_000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), *limit), None);
        }
    }

    #[test]
    fn far_points_escape_immediately() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 50), Some(0));
        assert_eq!(escape_time(Complex::new(-2.0, 1.5), 50), Some(0));
    }

    #[test]
    fn the_threshold_is_strict() {
        // z1 = 2 sits exactly on the circle; z2 = 6 is well outside.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 50), Some(1));
        // -2 is on the real-axis tip of the set: 2, 2, 2, ...
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 1000), None);
    }

    #[test]
    fn known_members_stay_bounded() {
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), 1000), None);
        assert_eq!(escape_time(Complex::new(-0.5, 0.0), 1000), None);
        assert_eq!(escape_time(Complex::new(0.0, 1.0), 1000), None);
        assert_eq!(escape_time(Complex::new(0.25, 0.0), 1000), None);
    }

    #[test]
    fn escape_count_depends_on_the_cap() {
        // 1 + 0i runs 0, 1, 2, 5, ...: z_3 is the first one outside.
        let c = Complex::new(1.0, 0.0);
        assert_eq!(escape_time(c, 4), Some(2));
        assert_eq!(escape_time(c, 3), None);
        assert_eq!(escape_time(c, 2), None);
    }

    #[test]
    fn the_last_iterate_is_never_tested() {
        // 3 + 0i leaves on z_1, but a cap of 1 only ever looks at z_0.
        let c = Complex::new(3.0, 0.0);
        assert_eq!(escape_time(c, 1), None);
        assert_eq!(escape_time(c, 2), Some(0));
        // 2 + 0i sits on the circle at z_1 and leaves at z_2.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 2), None);
        assert_eq!(escape_time(Complex::new(2.0, 0.0), 3), Some(1));
    }

    #[test]
    fn matches_a_plain_test_then_update_loop() {
        fn reference(c: Complex, limit: usize) -> Option<usize> {
            let mut z = Complex::new(0.0, 0.0);
            let mut i = 0;
            while i < limit {
                if z.norm_sqr() > 4.0 {
                    return Some(i);
                }
                z = z * z + c;
                i += 1;
            }
            None
        }
        for re in -8..4 {
            for im in -6..6 {
                let c = Complex::new(f64::from(re) * 0.3, f64::from(im) * 0.3);
                for limit in &[1, 2, 3, 5, 20] {
                    assert_eq!(
                        escape_time(c, *limit),
                        reference(c, *limit).map(|i| i - 1),
                        "c = {:?}, cap {}",
                        c,
                        limit
                    );
                }
            }
        }
    }

    #[test]
    fn zero_iterations_means_bounded() {
        assert_eq!(escape_time(Complex::new(100.0, 100.0), 0), None);
    }
}
