
use std::convert::TryFrom;
use std::fmt;

use crate::DecodeErr;
use crate::gnss::constants::CODE_LENGTH;

/// One captured code period of chip amplitudes
#[derive(Clone, PartialEq, Eq)]
pub struct ChipSequence {
	samples: [i16; CODE_LENGTH],
}

impl ChipSequence {

	pub fn new(samples:[i16; CODE_LENGTH]) -> Self {
		Self{ samples }
	}

	pub fn from_slice(x:&[i16]) -> Result<Self, DecodeErr> {
		if x.len() < CODE_LENGTH {
			Err(DecodeErr::InputTooShort(x.len()))
		} else if x.len() > CODE_LENGTH {
			Err(DecodeErr::InputTooLarge)
		} else {
			let mut samples:[i16; CODE_LENGTH] = [0; CODE_LENGTH];
			samples.copy_from_slice(x);
			Ok(Self{ samples })
		}
	}

	pub fn samples(&self) -> &[i16; CODE_LENGTH] { &self.samples }

	/// Sum over the whole period; the same for every circular offset
	pub fn sum(&self) -> i32 { self.samples.iter().map(|c| *c as i32).sum() }

	/// Circular rotation such that `rotated(k).samples()[(k + i) % CODE_LENGTH] == samples()[i]`
	pub fn rotated(&self, offset:usize) -> Self {
		let mut samples:[i16; CODE_LENGTH] = [0; CODE_LENGTH];
		for (idx, c) in self.samples.iter().enumerate() {
			samples[(idx + offset) % CODE_LENGTH] = *c;
		}
		Self{ samples }
	}

}

impl TryFrom<Vec<i16>> for ChipSequence {
	type Error = DecodeErr;

	fn try_from(x:Vec<i16>) -> Result<Self, DecodeErr> { Self::from_slice(&x) }
}

// Prints the whole window, e.g. "[1, -2, 3, ]"
impl fmt::Display for ChipSequence {

	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		write!(f, "[")?;
		for c in self.samples.iter() {
			write!(f, "{}, ", c)?;
		}
		write!(f, "]")
	}

}

impl fmt::Debug for ChipSequence {

	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		write!(f, "ChipSequence(sum={}, first={:?})", self.sum(), &self.samples[..8])
	}

}
