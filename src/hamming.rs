//! Hamming distance between fingerprints, one pair at a time or in bulk.
//!
//! The batch path picks a kernel at runtime:
//! - x86_64 with AVX2: four pairs per 256-bit register, nibble-table popcount
//!   and `vpsadbw` lane sums.
//! - aarch64: NEON, two pairs per register, `vcnt` and pairwise widening adds.
//! - everything else, and every tail: [`hamming_distance`].
//!
//! Every kernel must agree bit-for-bit with the scalar path.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::simhash::SimHashBits;

/// Number of differing bits between `a` and `b`, in `[0, 64]`.
#[inline]
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    a.hamming_distance(&b)
}

/// Population count by repeatedly clearing the lowest set bit.
/// Reference for the hardware and SIMD paths.
pub fn popcount_kernighan(mut x: u64) -> u32 {
    let mut count = 0;
    while x != 0 {
        x &= x - 1;
        count += 1;
    }
    count
}

/// Name of the kernel [`batch_distance`] dispatches to on this machine.
#[allow(unreachable_code)]
pub fn simd_level() -> &'static str {
    #[cfg(all(target_arch = "x86_64", not(feature = "simd-disabled")))]
    {
        if is_x86_feature_detected!("avx2") {
            return "avx2";
        }
    }

    #[cfg(all(target_arch = "aarch64", not(feature = "simd-disabled")))]
    {
        return "neon";
    }

    "scalar"
}

/// Call at startup to record the batch kernel in the log.
pub fn log_simd_support() {
    match simd_level() {
        "avx2" => log::info!("batch hamming distance: AVX2 kernel"),
        "neon" => log::info!("batch hamming distance: NEON kernel"),
        _ => log::info!("batch hamming distance: scalar kernel"),
    }
}

/// `result[i] == hamming_distance(a[i], b[i])`.
///
/// Fails with [`Error::InvalidArgument`] if the slices differ in length.
pub fn batch_distance(a: &[u64], b: &[u64]) -> Result<Vec<u32>> {
    check_len(a.len(), b.len(), "batch_distance")?;
    let mut out = vec![0u32; a.len()];
    distance_kernel(a, b, &mut out);
    Ok(out)
}

/// [`batch_distance`] into a caller-owned buffer. All three lengths must
/// match; nothing is written on error.
pub fn batch_distance_into(a: &[u64], b: &[u64], out: &mut [u32]) -> Result<()> {
    check_len(a.len(), b.len(), "batch_distance")?;
    check_len(a.len(), out.len(), "output buffer")?;
    distance_kernel(a, b, out);
    Ok(())
}

/// Like [`batch_distance`], but splits the index range into disjoint chunks
/// on the rayon pool once there are at least `parallel_min` pairs.
pub fn batch_distance_par(a: &[u64], b: &[u64], parallel_min: usize) -> Result<Vec<u32>> {
    check_len(a.len(), b.len(), "batch_distance")?;
    let mut out = vec![0u32; a.len()];
    if a.len() < parallel_min.max(PAR_CHUNK) {
        distance_kernel(a, b, &mut out);
        return Ok(out);
    }

    log::debug!("batch distance over {} pairs on the rayon pool", a.len());
    out.par_chunks_mut(PAR_CHUNK)
        .zip(a.par_chunks(PAR_CHUNK))
        .zip(b.par_chunks(PAR_CHUNK))
        .for_each(|((out, a), b)| distance_kernel(a, b, out));
    Ok(out)
}

/// Pairs handed to one rayon task.
const PAR_CHUNK: usize = 8192;

fn check_len(left: usize, right: usize, what: &str) -> Result<()> {
    if left != right {
        return Err(Error::InvalidArgument(format!(
            "{what}: length mismatch ({left} vs {right})"
        )));
    }
    Ok(())
}

#[allow(unreachable_code)]
fn distance_kernel(a: &[u64], b: &[u64], out: &mut [u32]) {
    debug_assert!(a.len() == b.len() && a.len() == out.len());

    #[cfg(all(target_arch = "x86_64", not(feature = "simd-disabled")))]
    {
        if is_x86_feature_detected!("avx2") {
            // SAFETY: avx2 was detected above.
            unsafe { distance_avx2(a, b, out) };
            return;
        }
    }

    #[cfg(all(target_arch = "aarch64", not(feature = "simd-disabled")))]
    {
        // SAFETY: NEON is mandatory on aarch64.
        unsafe { distance_neon(a, b, out) };
        return;
    }

    distance_scalar(a, b, out, 0);
}

#[inline]
fn distance_scalar(a: &[u64], b: &[u64], out: &mut [u32], from: usize) {
    for i in from..out.len() {
        out[i] = hamming_distance(a[i], b[i]);
    }
}

#[cfg(all(target_arch = "x86_64", not(feature = "simd-disabled")))]
#[target_feature(enable = "avx2")]
unsafe fn distance_avx2(a: &[u64], b: &[u64], out: &mut [u32]) {
    use std::arch::x86_64::*;

    let n = out.len();
    let mut i = 0;
    unsafe {
        // popcount of each nibble value 0..=15, repeated per 128-bit lane
        let lookup = _mm256_setr_epi8(
            0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4, //
            0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4,
        );
        let low_mask = _mm256_set1_epi8(0x0f);
        let zero = _mm256_setzero_si256();
        let mut lanes = [0u64; 4];

        while i + 4 <= n {
            let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
            let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
            let x = _mm256_xor_si256(va, vb);

            let lo = _mm256_and_si256(x, low_mask);
            let hi = _mm256_and_si256(_mm256_srli_epi16(x, 4), low_mask);
            let per_byte = _mm256_add_epi8(
                _mm256_shuffle_epi8(lookup, lo),
                _mm256_shuffle_epi8(lookup, hi),
            );
            // horizontal byte sums, one per 64-bit lane
            let sums = _mm256_sad_epu8(per_byte, zero);
            _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, sums);

            out[i] = lanes[0] as u32;
            out[i + 1] = lanes[1] as u32;
            out[i + 2] = lanes[2] as u32;
            out[i + 3] = lanes[3] as u32;
            i += 4;
        }
    }
    distance_scalar(a, b, out, i);
}

#[cfg(all(target_arch = "aarch64", not(feature = "simd-disabled")))]
#[target_feature(enable = "neon")]
unsafe fn distance_neon(a: &[u64], b: &[u64], out: &mut [u32]) {
    use std::arch::aarch64::*;

    let n = out.len();
    let mut i = 0;
    unsafe {
        while i + 2 <= n {
            let va = vld1q_u64(a.as_ptr().add(i));
            let vb = vld1q_u64(b.as_ptr().add(i));
            let bytes = vcntq_u8(vreinterpretq_u8_u64(veorq_u64(va, vb)));
            let sums = vpaddlq_u32(vpaddlq_u16(vpaddlq_u8(bytes)));

            out[i] = vgetq_lane_u64::<0>(sums) as u32;
            out[i + 1] = vgetq_lane_u64::<1>(sums) as u32;
            i += 2;
        }
    }
    distance_scalar(a, b, out, i);
}
