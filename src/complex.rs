// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A deliberately small complex number.  The escape loop only ever
//! needs to square, add, and measure, so that's most of what lives
//! here.  The operator-assign forms exist so the hot loop can update
//! its running value without building a new one every iteration;
//! they compute exactly the same expressions as the plain operators,
//! so either form gives the same bits.

use num;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A point on the complex plane, treating `re` as the x-component
/// and `im` as the y-component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real part.
    pub re: f64,
    /// The imaginary part.
    pub im: f64,
}

impl Complex {
    /// Constructor.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// The square of the distance from the origin.  Comparing this
    /// against the square of a radius saves a square root per test.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The distance from the origin.
    pub fn norm(&self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// The complex conjugate.
    pub fn conj(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Mul for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        // Both parts read the old value of self.
        let re = self.re * rhs.re - self.im * rhs.im;
        let im = self.re * rhs.im + self.im * rhs.re;
        self.re = re;
        self.im = im;
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(c: num::Complex<f64>) -> Complex {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(c: Complex) -> num::Complex<f64> {
        num::Complex::new(c.re, c.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_matches_the_textbook_formula() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a * b, Complex::new(5.0, 5.0));
    }

    #[test]
    fn multiply_in_place_squares_correctly() {
        let mut z = Complex::new(1.5, -0.5);
        z *= z;
        assert_eq!(z, Complex::new(2.0, -1.5));
    }

    #[test]
    fn add_and_subtract_are_componentwise() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(0.5, -4.0);
        assert_eq!(a + b, Complex::new(1.5, -2.0));
        assert_eq!(a - b, Complex::new(0.5, 6.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
    }

    #[test]
    fn conjugate_flips_the_imaginary_part() {
        let z = Complex::new(-0.25, 0.75);
        assert_eq!(z.conj(), Complex::new(-0.25, -0.75));
        assert_eq!((z * z.conj()).im, 0.0);
    }

    #[test]
    fn norms() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.norm_sqr(), 25.0);
        assert_eq!(z.norm(), 5.0);
    }

    #[test]
    fn agrees_with_num_complex() {
        let a = Complex::new(-0.7435, 0.1314);
        let b = Complex::new(0.25, -1.125);
        let na: num::Complex<f64> = a.into();
        let nb: num::Complex<f64> = b.into();
        assert_eq!(Complex::from(na * nb + na), a * b + a);
        assert_eq!(na.norm_sqr(), a.norm_sqr());
    }
}
