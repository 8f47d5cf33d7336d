use core::fmt;
use std::hash::{Hash, Hasher};

/// A JSON number.
///
/// Integers built through the `From` conversions are normalised: every non-negative integer is
/// stored as [`Number::PositiveInteger`] regardless of its source type. Comparison is by numeric
/// value, so an integral float equals the integer with the same value.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    PositiveInteger(u64),
    NegativeInteger(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as `u64` if it is an integer that fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::PositiveInteger(n) => Some(n),
            Number::NegativeInteger(n) => u64::try_from(n).ok(),
            Number::Float(_) => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::PositiveInteger(n) => i64::try_from(n).ok(),
            Number::NegativeInteger(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// Returns the value as `f64`, possibly losing precision for large integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PositiveInteger(n) => n as f64,
            Number::NegativeInteger(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The exact integral value of this number, if it has one within the `i64`/`u64` range.
    #[allow(clippy::cast_possible_truncation)]
    fn exact_integer(&self) -> Option<i128> {
        // 2^64 and -2^63 are exactly representable as `f64`.
        const UPPER: f64 = 18_446_744_073_709_551_616.0;
        const LOWER: f64 = -9_223_372_036_854_775_808.0;
        match *self {
            Number::PositiveInteger(n) => Some(i128::from(n)),
            Number::NegativeInteger(n) => Some(i128::from(n)),
            Number::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && (LOWER..UPPER).contains(&f) {
                    Some(f as i128)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::PositiveInteger(n) => write!(f, "{n}"),
            Number::NegativeInteger(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self.exact_integer(), other.exact_integer()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (Number::Float(a), Number::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
                _ => false,
            },
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        if let Some(n) = self.exact_integer() {
            n.hash(h);
        } else if let Number::Float(f) = *self {
            if f.is_nan() {
                f64::NAN.to_bits().hash(h);
            } else {
                f.to_bits().hash(h);
            }
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::PositiveInteger(u64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    if value < 0 {
                        Number::NegativeInteger(i64::from(value))
                    } else {
                        Number::PositiveInteger(u64::from(value.unsigned_abs()))
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

// Pointer-sized integers are at most 64 bits wide on every supported target.
impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::PositiveInteger(value as u64)
    }
}

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        if value < 0 {
            Number::NegativeInteger(value as i64)
        } else {
            Number::PositiveInteger(value.unsigned_abs() as u64)
        }
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}
