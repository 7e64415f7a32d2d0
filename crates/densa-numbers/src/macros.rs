//! Operator forwarding for the dashu newtypes.

/// Implements a binary operator for a single-field newtype, with both an
/// owned and a borrowed right-hand side, by applying it to the wrapped
/// dashu values.
macro_rules! forward_binop {
    ($ty:ident, $op:ident, $method:ident) => {
        impl std::ops::$op for $ty {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(std::ops::$op::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$op<&$ty> for $ty {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: &$ty) -> Self {
                Self(std::ops::$op::$method(self.0, &rhs.0))
            }
        }
    };
}

/// Implements `Neg` by negating the wrapped value.
macro_rules! forward_neg {
    ($ty:ident) => {
        impl std::ops::Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}
