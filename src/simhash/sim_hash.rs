use super::SimHashBits;
use super::sim_hasher::{Fnv1aHasher64, SimHasher};
use crate::text::whitespace_split;
use rayon::prelude::*;
use std::marker::PhantomData;

/// FNV-1a tokens folded into a 64-bit signature: the fingerprint every
/// top-level function produces.
pub type TextSimHash = SimHash<Fnv1aHasher64, u64, 64>;

pub struct SimHash<H, S, const L: usize>
where
    H: SimHasher<T = S>,
    S: SimHashBits,
{
    hasher: H,
    marker: PhantomData<S>,
}

impl<H, S, const L: usize> SimHash<H, S, L>
where
    H: SimHasher<T = S>,
    S: SimHashBits,
{
    pub fn new(hasher: H) -> Self {
        assert!(L <= S::bit_length(), "signature length too large for container");
        SimHash {
            hasher,
            marker: PhantomData,
        }
    }

    /// Fingerprint of `text`, tokenized on space, `\n`, `\t` and `\r`.
    pub fn fingerprint(&self, text: &[u8]) -> S {
        self.create_signature(whitespace_split(text))
    }

    /// Sequential signature over pre-split tokens.
    pub fn create_signature<T, U>(&self, iter: T) -> S
    where
        T: IntoIterator<Item = U>,
        U: AsRef<[u8]>,
    {
        let mut counts = [0i64; L];
        for token in iter {
            self.accumulate(&mut counts, token.as_ref());
        }
        Self::collapse(&counts)
    }

    /// Same signature as [`create_signature`](Self::create_signature), with
    /// tokens spread over the rayon pool. Each worker folds whole tokens into
    /// its own counts; partial counts are summed at the end.
    pub fn create_signature_par<U>(&self, tokens: &[U]) -> S
    where
        U: AsRef<[u8]> + Sync,
    {
        let counts = tokens
            .par_iter()
            .fold(
                || [0i64; L],
                |mut counts, token| {
                    self.accumulate(&mut counts, token.as_ref());
                    counts
                },
            )
            .reduce(
                || [0i64; L],
                |mut lhs, rhs| {
                    for (l, r) in lhs.iter_mut().zip(rhs.iter()) {
                        *l += r;
                    }
                    lhs
                },
            );
        Self::collapse(&counts)
    }

    #[inline]
    fn accumulate(&self, counts: &mut [i64; L], token: &[u8]) {
        let mut hash = self.hasher.hash(token);
        for count in counts.iter_mut() {
            if hash & S::one() == S::one() {
                *count += 1;
            } else {
                *count -= 1;
            }
            hash >>= 1;
        }
    }

    /// Ties (count == 0) collapse to 0.
    #[inline]
    fn collapse(counts: &[i64; L]) -> S {
        let mut result = S::zero();
        for (i, &count) in counts.iter().enumerate() {
            if count > 0 {
                result |= S::one() << i;
            }
        }
        result
    }
}

impl Default for TextSimHash {
    fn default() -> Self {
        SimHash::new(Fnv1aHasher64)
    }
}

#[cfg(test)]
mod tests {
    use super::super::sim_hasher::{SimSipHasher64, Xxh3Hasher128, Xxh3Hasher64};
    use super::*;
    use crate::text::whitespace_split;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    static S1: &str = "SimHash is a technique used for detecting near-duplicates or for locality sensitive hashing. It was developed by Moses Charikar and is often used in large-scale applications to reduce the dimensionality of high-dimensional data, making it easier to process";
    static S2: &str = "SimHash is a technique used for detecting near-duplicates or for locality sensitive hashing. It was developed by Moses Charikar and is often utilized in large-scale applications to reduce the dimensionality of high-dimensional data, making it easier to analyze";

    #[test]
    fn single_token_fingerprint_is_its_hash() {
        let sim_hash = TextSimHash::default();
        assert_eq!(sim_hash.fingerprint(b"hello"), Fnv1aHasher64.hash(b"hello"));
        assert_eq!(sim_hash.fingerprint(b"  test\n"), 0xF9E6_E6EF_197C_2B25);
    }

    #[test]
    fn two_tokens_keep_only_agreeing_bits() {
        // +1 +1 => bit set; +1 -1 ties at zero => bit clear
        let sim_hash = TextSimHash::default();
        let expected = Fnv1aHasher64.hash(b"hello") & Fnv1aHasher64.hash(b"world");
        assert_eq!(sim_hash.fingerprint(b"hello world"), expected);
        assert_eq!(expected, 0x0410_D846_0008_8803);
    }

    #[test]
    fn repeated_token_is_its_hash() {
        let sim_hash = TextSimHash::default();
        assert_eq!(sim_hash.fingerprint(b"a a"), Fnv1aHasher64.hash(b"a"));
    }

    #[test]
    fn empty_and_delimiter_only_are_zero() {
        let sim_hash = TextSimHash::default();
        assert_eq!(sim_hash.fingerprint(b""), 0);
        assert_eq!(sim_hash.fingerprint(b"   "), 0);
        assert_eq!(sim_hash.fingerprint(b" \t\r\n "), 0);
    }

    #[test]
    fn token_order_does_not_matter() {
        let sim_hash = TextSimHash::default();
        assert_eq!(
            sim_hash.fingerprint(b"the quick brown fox"),
            sim_hash.fingerprint(b"fox brown\tquick\nthe")
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(42);
        let tokens: Vec<Vec<u8>> = (0..20_000)
            .map(|_| {
                let len = rng.gen_range(1..12);
                (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
            })
            .collect();
        let sim_hash = TextSimHash::default();
        assert_eq!(
            sim_hash.create_signature(&tokens),
            sim_hash.create_signature_par(&tokens)
        );
    }

    #[test]
    fn similar_texts_are_close() {
        let sim_hash = TextSimHash::default();
        let s1 = sim_hash.fingerprint(S1.as_bytes());
        let s2 = sim_hash.fingerprint(S2.as_bytes());
        assert!(s1.hamming_distance(&s2) < 20);
    }

    #[test]
    fn alternate_hashers() {
        let s1: Vec<&[u8]> = whitespace_split(S1.as_bytes()).collect();
        let s2: Vec<&[u8]> = whitespace_split(S2.as_bytes()).collect();

        let sip = SimHash::<SimSipHasher64, u64, 64>::new(SimSipHasher64::new(1, 2));
        assert!(sip.create_signature(&s1).hamming_distance(&sip.create_signature(&s2)) < 20);

        let xxh = SimHash::<Xxh3Hasher64, u64, 64>::new(Xxh3Hasher64::new());
        assert!(xxh.create_signature(&s1).hamming_distance(&xxh.create_signature(&s2)) < 20);

        let xxh128 = SimHash::<Xxh3Hasher128, u128, 128>::new(Xxh3Hasher128::new());
        let d = xxh128
            .create_signature(&s1)
            .hamming_distance(&xxh128.create_signature(&s2));
        assert!(d < 40);
    }

    #[test]
    #[should_panic(expected = "signature length too large")]
    fn rejects_oversized_signature() {
        let _ = SimHash::<Fnv1aHasher64, u64, 128>::new(Fnv1aHasher64);
    }
}
