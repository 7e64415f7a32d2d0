//! Native floating point domains.
//!
//! `f64` and `f32` also drive the non-generic multiplication fast path in
//! `densa-linalg`; here they only need the scalar contract.

use crate::traits::Scalar;

macro_rules! impl_primitive_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn from_i64(value: i64) -> Self {
                value as $t
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            #[inline]
            fn sqrt(&self) -> Self {
                <$t>::sqrt(*self)
            }

            #[inline]
            fn norm(&self) -> f64 {
                f64::from(self.abs())
            }

            #[inline]
            fn to_f64(&self) -> f64 {
                f64::from(*self)
            }

            #[inline]
            fn epsilon() -> f64 {
                f64::from(<$t>::EPSILON)
            }
        }
    };
}

impl_primitive_scalar!(f64);
impl_primitive_scalar!(f32);
