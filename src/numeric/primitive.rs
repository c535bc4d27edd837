//! Overflow-free helpers for the primitive number types.

use num_traits::Num;

/// Primitive numbers accepted by [`median`](super::median) and
/// [`sequence`](super::sequence).
///
/// Implemented for every primitive integer and float. The helpers never
/// overflow, so results stay correct at the edges of the type's range.
pub trait Primitive: Copy + PartialOrd + Num {
    /// Returns the mean of `self` and `other` as if computed in a wider
    /// type. Integers truncate toward zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::numeric::Primitive;
    ///
    /// assert_eq!(Primitive::midpoint(200_u8, 100), 150);
    /// assert_eq!(Primitive::midpoint(-4_i32, -1), -2);
    /// assert_eq!(Primitive::midpoint(12.3_f64, 4.5), 8.4);
    /// ```
    fn midpoint(self, other: Self) -> Self;

    /// Returns `self + step`, or `None` if the sum is not representable.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_primitive_integer {
    ($($type:ty),*) => {
        $(
            impl Primitive for $type {
                #[inline]
                fn midpoint(self, other: Self) -> Self {
                    <$type>::midpoint(self, other)
                }

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! impl_primitive_float {
    ($($type:ty),*) => {
        $(
            impl Primitive for $type {
                #[inline]
                fn midpoint(self, other: Self) -> Self {
                    <$type>::midpoint(self, other)
                }

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

impl_primitive_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_primitive_float!(f32, f64);
