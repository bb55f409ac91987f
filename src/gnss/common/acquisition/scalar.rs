
use crate::gnss::constants::CODE_LENGTH;
use crate::gnss::gps_l1_ca::signal_modulation::PrnSequence;
use crate::types::ChipSequence;

/// Reference correlator; direct modulo-indexed multiply-accumulate
pub struct Correlator {
	chips: [i16; CODE_LENGTH],
}

impl Correlator {

	pub fn new(chips:&ChipSequence) -> Self {
		Self{ chips: *chips.samples() }
	}

}

impl super::Correlator for Correlator {
	type Replica = [i8; CODE_LENGTH];

	fn replica(&self, prn:&PrnSequence) -> [i8; CODE_LENGTH] { prn.bipolar() }

	fn sum_at(&self, replica:&[i8; CODE_LENGTH], offset:usize) -> i32 {
		let mut sum:i32 = 0;
		for i in 0..CODE_LENGTH {
			let idx = (offset + i) % CODE_LENGTH;
			sum += (self.chips[idx] as i32) * (replica[i] as i32);
		}
		sum
	}
}
