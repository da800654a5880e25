mod sim_hash;
mod sim_hasher;

pub use self::sim_hash::{SimHash, TextSimHash};
pub use self::sim_hasher::{
    Fnv1aHasher64, SimHasher, SimSipHasher64, Xxh3Hasher128, Xxh3Hasher64, FNV_OFFSET_BASIS,
    FNV_PRIME,
};

use core::mem;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Not, Shl, Shr, ShrAssign};

use num_traits::{One, Zero};

/// Fixed-width bit container a signature is collapsed into.
pub trait SimHashBits:
    Sized
    + Clone
    + Copy
    + Zero
    + One
    + Debug
    + PartialEq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitOrAssign
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + ShrAssign<usize>
    + Hash
    + Eq
    + Send
    + Sync
{
    fn count_ones(self) -> u32;

    fn hamming_distance(&self, rhs: &Self) -> u32;

    fn bit_length() -> usize;
}

macro_rules! prim_int_impl {
    ($T:ty) => {
        impl SimHashBits for $T {
            #[inline]
            fn count_ones(self) -> u32 {
                <$T>::count_ones(self)
            }

            #[inline]
            fn hamming_distance(&self, rhs: &Self) -> u32 {
                (self ^ rhs).count_ones()
            }

            #[inline]
            fn bit_length() -> usize {
                mem::size_of::<$T>() * 8
            }
        }
    };
}

prim_int_impl!(u64);
prim_int_impl!(u128);
