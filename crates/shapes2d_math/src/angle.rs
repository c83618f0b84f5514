//! Degree-based trigonometry and validated interior angles
//!
//! Angles throughout the crate are measured in degrees. The trig helpers
//! reduce the argument by whole quarter turns before touching radians, so
//! multiples of 90° map to exact values (`sin(180°) == 0.0`, not `1.2e-16`).

use serde::{Serialize, Deserialize};

/// Sine and cosine of an angle given in degrees
///
/// Returns `(sin, cos)`. Non-finite input yields `(NaN, NaN)`.
pub fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    if !degrees.is_finite() {
        return (f64::NAN, f64::NAN);
    }

    // Reduce into [0, 360) then split into quadrant + remainder in [0, 90)
    let mut r = degrees % 360.0;
    if r < 0.0 {
        r += 360.0;
    }
    let quadrant = (r / 90.0).floor();
    let rem = r - quadrant * 90.0;

    let (s, c) = if rem == 0.0 {
        (0.0, 1.0)
    } else {
        rem.to_radians().sin_cos()
    };

    // r + 360 can round up to exactly 360 for tiny negative inputs
    match quadrant as i64 % 4 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// Sine of an angle given in degrees
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin_cos_deg(degrees).0
}

/// Cosine of an angle given in degrees
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    sin_cos_deg(degrees).1
}

/// An angle in degrees with an upper bound of 180°
///
/// Only the upper bound is checked: zero, negative values, and values below
/// -180° are all accepted. Shapes store their edge directions as
/// `InternalAngle`s even though they are used as absolute headings.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct InternalAngle {
    value: f64,
}

impl InternalAngle {
    /// Largest accepted value, in degrees
    pub const MAX_DEGREES: f64 = 180.0;

    /// Create an angle, or `None` if `value` exceeds 180°
    #[inline]
    pub fn new(value: f64) -> Option<Self> {
        if value > Self::MAX_DEGREES {
            return None;
        }
        Some(Self { value })
    }

    /// Build angles from a list of degree literals, dropping any that are invalid
    pub fn from_literals(values: &[f64]) -> Vec<Self> {
        values.iter().copied().filter_map(Self::new).collect()
    }

    /// The angle in degrees
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// `(sin, cos)` of this angle
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        sin_cos_deg(self.value)
    }
}

impl<'de> Deserialize<'de> for InternalAngle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        InternalAngle::new(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "angle {} exceeds {} degrees",
                value,
                InternalAngle::MAX_DEGREES
            ))
        })
    }
}
