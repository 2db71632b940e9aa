//! Explicit two's-complement mapping between signed values and their
//! unsigned wire patterns.
//!
//! Encoding maps `v >= 0` to `v` and `v < 0` to `2^width + v`. Decoding
//! subtracts `2^width` unconditionally in modular arithmetic, so every bit
//! pattern of every width maps back the same way, with no sign-bit test.

macro_rules! twos_complement {
    ($encode:ident, $decode:ident, $signed:ty, $unsigned:ty) => {
        #[doc = concat!("Encodes an `", stringify!($signed), "` as its `", stringify!($unsigned), "` wire pattern.")]
        #[inline]
        pub const fn $encode(v: $signed) -> $unsigned {
            if v >= 0 {
                v as $unsigned
            } else {
                // all-ones + v + 1; unsigned_abs() of MIN still fits
                <$unsigned>::MAX - v.unsigned_abs() + 1
            }
        }

        #[doc = concat!("Decodes an `", stringify!($unsigned), "` wire pattern as `", stringify!($signed), "`.")]
        #[inline]
        pub const fn $decode(bits: $unsigned) -> $signed {
            bits.wrapping_sub(<$unsigned>::MAX).wrapping_sub(1) as $signed
        }
    };
}

twos_complement!(encode_i8, decode_i8, i8, u8);
twos_complement!(encode_i16, decode_i16, i16, u16);
twos_complement!(encode_i32, decode_i32, i32, u32);
twos_complement!(encode_i64, decode_i64, i64, u64);
