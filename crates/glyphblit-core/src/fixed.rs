//! 26.6 fixed-point arithmetic
//!
//! Font engines report metrics with 6 fractional bits: 64 units make one
//! pixel. Layout accumulates in this format and only converts to whole
//! pixels at well-defined points, using the round-up rule in
//! [`F26Dot6::pixel`]. Arithmetic saturates, so an absurdly long run pins
//! at the extremes instead of wrapping.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 26.6 fixed-point value
///
/// ```rust
/// use glyphblit_core::fixed::F26Dot6;
///
/// let x = F26Dot6::from_int(5);      // Exactly 5.0
/// let y = F26Dot6::from_float(5.5); // 5 + 32/64 = 5.5
/// assert_eq!(y.pixel(), 6);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct F26Dot6(i32);

impl F26Dot6 {
    pub const FRAC_BITS: u32 = 6;

    pub const FRAC_MASK: i32 = (1 << Self::FRAC_BITS) - 1;

    pub const ONE: F26Dot6 = F26Dot6(1 << Self::FRAC_BITS);

    pub const ZERO: F26Dot6 = F26Dot6(0);

    #[inline]
    pub const fn from_int(x: i32) -> Self {
        F26Dot6(x << Self::FRAC_BITS)
    }

    /// Converts a pixel value, rounding to the nearest 1/64
    #[inline]
    pub fn from_float(x: f32) -> Self {
        F26Dot6((x * 64.0).round() as i32)
    }

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        F26Dot6(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Floor to whole pixels (arithmetic shift)
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> Self::FRAC_BITS
    }

    /// Round up to the next whole pixel: `((v + 63) & -64) >> 6`
    ///
    /// Never rounds down, so a glyph cell sized with it always holds the
    /// fractional extent.
    #[inline]
    pub const fn pixel(self) -> i32 {
        ((self.0 + Self::FRAC_MASK) & !Self::FRAC_MASK) >> Self::FRAC_BITS
    }

    #[inline]
    pub fn to_float(self) -> f32 {
        self.0 as f32 / 64.0
    }

    #[inline]
    pub const fn abs(self) -> F26Dot6 {
        F26Dot6(self.0.abs())
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn floor(self) -> F26Dot6 {
        F26Dot6(self.0 & !Self::FRAC_MASK)
    }

    #[inline]
    pub const fn ceil(self) -> F26Dot6 {
        F26Dot6((self.0 + Self::FRAC_MASK) & !Self::FRAC_MASK)
    }

    /// Round to the nearest whole pixel, halves toward positive infinity
    #[inline]
    pub const fn round(self) -> F26Dot6 {
        F26Dot6(self.0.saturating_add(32) & !Self::FRAC_MASK)
    }

    /// `self * num / den` with the quotient rounded half away from zero
    ///
    /// The product is taken in 64 bits; a zero `den` yields zero.
    pub fn mul_div(self, num: i32, den: i32) -> F26Dot6 {
        if den == 0 {
            return F26Dot6::ZERO;
        }
        let product = i64::from(self.0) * i64::from(num);
        let den = i64::from(den);
        let magnitude = (product.abs() + den.abs() / 2) / den.abs();
        let quotient = if (product < 0) != (den < 0) {
            -magnitude
        } else {
            magnitude
        };
        F26Dot6(quotient.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

impl Add for F26Dot6 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        F26Dot6(self.0.saturating_add(other.0))
    }
}

impl AddAssign for F26Dot6 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for F26Dot6 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        F26Dot6(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for F26Dot6 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for F26Dot6 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        F26Dot6(self.0.saturating_neg())
    }
}

impl From<i32> for F26Dot6 {
    #[inline]
    fn from(x: i32) -> Self {
        Self::from_int(x)
    }
}

impl From<F26Dot6> for f32 {
    #[inline]
    fn from(x: F26Dot6) -> f32 {
        x.to_float()
    }
}
