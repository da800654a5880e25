use std::hash::Hasher;

use siphasher::sip::SipHasher13;
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

use super::SimHashBits;

pub const FNV_OFFSET_BASIS: u64 = 14695981039346656037;
pub const FNV_PRIME: u64 = 1099511628211;

/// Hashes one token's raw bytes to the signature width.
pub trait SimHasher: Send + Sync {
    type T: SimHashBits;

    fn hash(&self, token: &[u8]) -> Self::T;
}

/// 64-bit FNV-1a. This is the token hash behind every stored fingerprint;
/// changing it changes every fingerprint.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1aHasher64;

impl Fnv1aHasher64 {
    pub fn new() -> Self {
        Fnv1aHasher64
    }
}

impl SimHasher for Fnv1aHasher64 {
    type T = u64;

    #[inline]
    fn hash(&self, token: &[u8]) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for &byte in token {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash
    }
}

/// Keyed SipHash-1-3.
#[derive(Debug, Clone, Copy)]
pub struct SimSipHasher64 {
    key1: u64,
    key2: u64,
}

impl SimSipHasher64 {
    pub fn new(key1: u64, key2: u64) -> Self {
        SimSipHasher64 { key1, key2 }
    }
}

impl SimHasher for SimSipHasher64 {
    type T = u64;

    #[inline]
    fn hash(&self, token: &[u8]) -> u64 {
        let mut sip = SipHasher13::new_with_keys(self.key1, self.key2);
        sip.write(token);
        sip.finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher64;

impl Xxh3Hasher64 {
    pub fn new() -> Self {
        Xxh3Hasher64
    }
}

impl SimHasher for Xxh3Hasher64 {
    type T = u64;

    #[inline]
    fn hash(&self, token: &[u8]) -> u64 {
        xxh3_64(token)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Xxh3Hasher128;

impl Xxh3Hasher128 {
    pub fn new() -> Self {
        Xxh3Hasher128
    }
}

impl SimHasher for Xxh3Hasher128 {
    type T = u128;

    #[inline]
    fn hash(&self, token: &[u8]) -> u128 {
        xxh3_128(token)
    }
}
