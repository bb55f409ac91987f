
use crate::gnss::constants::{CODE_LENGTH, LANES, PADDED_CODE_LENGTH, PADDED_WINDOW_LENGTH};
use crate::gnss::gps_l1_ca::signal_modulation::PrnSequence;
use crate::types::ChipSequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
	Portable,
	Avx2,
}

/// Mask-and-accumulate correlator.  The window holds the captured period twice followed by zeros,
/// so reading PADDED_CODE_LENGTH samples from any offset never wraps, and the zero tail of the
/// replica keeps the extra samples out of the sum.
pub struct Correlator {
	window: Box<[i16; PADDED_WINDOW_LENGTH]>,
	total: i32,
	backend: Backend,
}

impl Correlator {

	pub fn new(chips:&ChipSequence) -> Self {
		Self::with_backend(chips, detect_backend())
	}

	pub fn with_backend(chips:&ChipSequence, backend:Backend) -> Self {
		let mut window:Box<[i16; PADDED_WINDOW_LENGTH]> = Box::new([0; PADDED_WINDOW_LENGTH]);
		window[..CODE_LENGTH].copy_from_slice(chips.samples());
		window[CODE_LENGTH..2*CODE_LENGTH].copy_from_slice(chips.samples());

		// Nothing without the CPU feature
		let backend = if backend == Backend::Avx2 && detect_backend() != Backend::Avx2 { Backend::Portable } else { backend };

		Self{ window, total: chips.sum(), backend }
	}

	pub fn backend(&self) -> Backend { self.backend }

	/// Sum of the chips where the replica bit is 1
	pub fn masked_sum(&self, masks:&[i16; PADDED_CODE_LENGTH], offset:usize) -> i32 {
		let chips = &self.window[offset..offset + PADDED_CODE_LENGTH];
		match self.backend {
			Backend::Portable => masked_sum_portable(chips, masks),
			Backend::Avx2     => avx2_or_portable(chips, masks),
		}
	}

}

impl super::Correlator for Correlator {
	type Replica = [i16; PADDED_CODE_LENGTH];

	fn replica(&self, prn:&PrnSequence) -> [i16; PADDED_CODE_LENGTH] { prn.masks() }

	fn sum_at(&self, replica:&[i16; PADDED_CODE_LENGTH], offset:usize) -> i32 {
		// sum(c * (2b - 1)) = 2 * sum(c where b) - sum(c), and sum(c) is the same at every circular offset
		2 * self.masked_sum(replica, offset) - self.total
	}
}

fn detect_backend() -> Backend {
	#[cfg(target_arch = "x86_64")]
	{
		if is_x86_feature_detected!("avx2") { return Backend::Avx2; }
	}
	Backend::Portable
}

fn masked_sum_portable(chips:&[i16], masks:&[i16; PADDED_CODE_LENGTH]) -> i32 {
	let mut acc:[i32; LANES] = [0; LANES];
	for (c, m) in chips.chunks_exact(LANES).zip(masks.chunks_exact(LANES)) {
		for lane in 0..LANES {
			acc[lane] += (c[lane] & m[lane]) as i32;
		}
	}
	acc.iter().sum()
}

#[cfg(target_arch = "x86_64")]
fn avx2_or_portable(chips:&[i16], masks:&[i16; PADDED_CODE_LENGTH]) -> i32 {
	// Backend::Avx2 is only ever stored after the feature check passed
	unsafe { masked_sum_avx2(chips, masks) }
}

#[cfg(not(target_arch = "x86_64"))]
fn avx2_or_portable(chips:&[i16], masks:&[i16; PADDED_CODE_LENGTH]) -> i32 {
	masked_sum_portable(chips, masks)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn masked_sum_avx2(chips:&[i16], masks:&[i16; PADDED_CODE_LENGTH]) -> i32 {
	use std::arch::x86_64::*;

	assert!(chips.len() >= PADDED_CODE_LENGTH);

	let ones = _mm256_set1_epi16(1);
	let mut acc = _mm256_setzero_si256();

	for i in (0..PADDED_CODE_LENGTH).step_by(LANES) {
		let a = _mm256_loadu_si256(chips.as_ptr().add(i) as *const __m256i);
		let b = _mm256_loadu_si256(masks.as_ptr().add(i) as *const __m256i);

		// madd against ones widens adjacent pairs into i32 lanes, so the accumulator never saturates
		acc = _mm256_add_epi32(acc, _mm256_madd_epi16(_mm256_and_si256(a, b), ones));
	}

	let mut lanes:[i32; 8] = [0; 8];
	_mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, acc);
	lanes.iter().sum()
}
