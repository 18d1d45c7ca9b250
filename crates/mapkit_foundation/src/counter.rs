//! Integer values that can be counted up by one.

/// Value a first `increment` stores, for reference.
///
/// `increment` seeds with [`Counter::ONE`] of the map's own value type; this
/// constant only records that the seed is one.
pub const DEFAULT_INCREMENT_SEED: i64 = 1;

/// An integer type usable as a tally in a map.
pub trait Counter: Copy {
    /// The value `1` of this type.
    const ONE: Self;

    /// Adds one, saturating at the type's maximum.
    #[must_use]
    fn bump(self) -> Self;
}

macro_rules! impl_counter {
    ($($t:ty),* $(,)?) => {
        $(
            impl Counter for $t {
                const ONE: Self = 1;

                fn bump(self) -> Self {
                    self.saturating_add(1)
                }
            }
        )*
    };
}

impl_counter!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
