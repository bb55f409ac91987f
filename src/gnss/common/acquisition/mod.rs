
use serde::Serialize;

use crate::gnss::constants::CODE_LENGTH;
use crate::gnss::gps_l1_ca::signal_modulation::PrnSequence;

pub mod scalar;
pub mod vectorized;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
	pub offset: usize,
	pub bit: u8,
	pub correlation: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
	Scalar,
	Vector,
}

impl std::str::FromStr for Strategy {
	type Err = &'static str;

	fn from_str(s:&str) -> Result<Self, Self::Err> {
		match s {
			"scalar" => Ok(Strategy::Scalar),
			"vector" => Ok(Strategy::Vector),
			_        => Err("Strategy must be 'scalar' or 'vector'"),
		}
	}
}

// A Correlator owns one captured window and can slide any PRN code across it.  Implementations
// only differ in how they evaluate the sum at a single offset; the search policy lives here
pub trait Correlator: Send + Sync {
	type Replica;

	/// Encode the code the way sum_at wants it; called once per satellite
	fn replica(&self, prn:&PrnSequence) -> Self::Replica;

	/// Bipolar correlation sum, sum over i of chip[(offset + i) % CODE_LENGTH] * (+1 or -1)
	fn sum_at(&self, replica:&Self::Replica, offset:usize) -> i32;

	/// Scans offsets upwards from zero and stops at the first one whose magnitude exceeds the threshold
	fn correlate(&self, prn:&PrnSequence, threshold:i32) -> Option<Detection> {
		let replica = self.replica(prn);

		for offset in 0..CODE_LENGTH {
			let correlation = self.sum_at(&replica, offset);
			if correlation.abs() > threshold {
				let bit:u8 = if correlation > 0 { 1 } else { 0 };
				return Some(Detection{ offset, bit, correlation });
			}
		}

		None
	}

	/// Every offset's sum, mostly useful for diagnostics and tests
	fn correlation_sums(&self, prn:&PrnSequence) -> Vec<i32> {
		let replica = self.replica(prn);
		(0..CODE_LENGTH).map(|offset| self.sum_at(&replica, offset)).collect()
	}
}
