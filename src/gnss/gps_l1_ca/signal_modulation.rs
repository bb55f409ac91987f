
use serde::Serialize;

use crate::DecodeErr;
use crate::gnss::constants::{CODE_LENGTH, DEFAULT_SATELLITE_COUNT, GPS_L1_CA_TAPS, PADDED_CODE_LENGTH};

const REGISTER_INIT:u16 = 0x3ff;

/// The two G2 stages combined with the G1 output for one satellite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TapPair {
	tap1: u8,
	tap2: u8,
}

impl TapPair {

	pub fn new(tap1:u8, tap2:u8) -> Result<Self, DecodeErr> {
		for t in [tap1, tap2].iter() {
			if *t < 1 || *t > 10 { return Err(DecodeErr::InvalidTap(*t)); }
		}
		Ok(Self{ tap1, tap2 })
	}

	pub fn tap1(&self) -> u8 { self.tap1 }
	pub fn tap2(&self) -> u8 { self.tap2 }

}

/// Ordered list of tap pairs; position i is reported as satellite i+1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapTable {
	entries: Vec<TapPair>,
}

impl TapTable {

	pub fn new(entries:Vec<TapPair>) -> Self { Self{ entries } }

	/// The 24 satellites scanned by default
	pub fn gps_l1_ca() -> Self { Self::from_constants(DEFAULT_SATELLITE_COUNT) }

	/// All 32 PRNs of IS-GPS-200
	pub fn gps_l1_ca_extended() -> Self { Self::from_constants(GPS_L1_CA_TAPS.len()) }

	fn from_constants(n:usize) -> Self {
		let entries = GPS_L1_CA_TAPS.iter().take(n).map(|(a, b)| TapPair{ tap1: *a, tap2: *b }).collect();
		Self{ entries }
	}

	pub fn len(&self) -> usize { self.entries.len() }
	pub fn is_empty(&self) -> bool { self.entries.is_empty() }
	pub fn get(&self, idx:usize) -> Option<TapPair> { self.entries.get(idx).copied() }
	pub fn iter(&self) -> impl Iterator<Item = &TapPair> { self.entries.iter() }

}

/// One full period of a satellite's code, as logical bits
#[derive(Clone, PartialEq, Eq)]
pub struct PrnSequence {
	bits: [bool; CODE_LENGTH],
}

impl PrnSequence {

	pub fn as_bools(&self) -> &[bool; CODE_LENGTH] { &self.bits }

	/// 0/1 encoding for multiply-based correlation
	pub fn bits(&self) -> [u8; CODE_LENGTH] {
		let mut ans:[u8; CODE_LENGTH] = [0; CODE_LENGTH];
		for (a, b) in ans.iter_mut().zip(self.bits.iter()) { *a = *b as u8; }
		ans
	}

	/// Bipolar encoding, 1 => +1 and 0 => -1
	pub fn bipolar(&self) -> [i8; CODE_LENGTH] {
		let mut ans:[i8; CODE_LENGTH] = [0; CODE_LENGTH];
		for (a, b) in ans.iter_mut().zip(self.bits.iter()) { *a = if *b { 1 } else { -1 }; }
		ans
	}

	/// AND masks (1 => all ones, 0 => zero); the padded tail is zero so it never contributes
	pub fn masks(&self) -> [i16; PADDED_CODE_LENGTH] {
		let mut ans:[i16; PADDED_CODE_LENGTH] = [0; PADDED_CODE_LENGTH];
		for (a, b) in ans.iter_mut().zip(self.bits.iter()) { *a = if *b { -1 } else { 0 }; }
		ans
	}

	/// Chip amplitudes a transmitter sending bit 1 would produce: +amplitude for 1, -amplitude for 0
	pub fn to_chips(&self, amplitude:i16) -> [i16; CODE_LENGTH] {
		let mut ans:[i16; CODE_LENGTH] = [0; CODE_LENGTH];
		for (a, b) in ans.iter_mut().zip(self.bits.iter()) { *a = if *b { amplitude } else { -amplitude }; }
		ans
	}

}

impl std::fmt::Debug for PrnSequence {

	fn fmt(&self, f:&mut std::fmt::Formatter) -> std::fmt::Result {
		let head:String = self.bits.iter().take(10).map(|b| if *b { '1' } else { '0' }).collect();
		write!(f, "PrnSequence({}...)", head)
	}

}

/// Runs the G1 and G2 registers for one full period, starting from the all-ones state
pub fn prn_code(taps:TapPair) -> PrnSequence {
	let mut reg1:u16 = REGISTER_INIT;
	let mut reg2:u16 = REGISTER_INIT;

	let s1 = 10 - taps.tap1 as u16;
	let s2 = 10 - taps.tap2 as u16;

	let mut bits:[bool; CODE_LENGTH] = [false; CODE_LENGTH];
	for b in bits.iter_mut() {
		*b = ((reg1 ^ (reg2 >> s1) ^ (reg2 >> s2)) & 1) == 1;

		// G1: x^10 + x^3 + 1
		let f1 = (reg1 ^ (reg1 >> 7)) & 1;
		reg1 = (reg1 >> 1) | (f1 << 9);

		// G2: x^10 + x^9 + x^8 + x^6 + x^3 + x^2 + 1
		let f2 = (reg2 ^ (reg2 >> 1) ^ (reg2 >> 2) ^ (reg2 >> 4) ^ (reg2 >> 7) ^ (reg2 >> 8)) & 1;
		reg2 = (reg2 >> 1) | (f2 << 9);
	}

	PrnSequence{ bits }
}

/// Code for a 1-based PRN from the IS-GPS-200 table
pub fn prn_code_for(prn:usize) -> Option<PrnSequence> {
	if prn >= 1 && prn <= GPS_L1_CA_TAPS.len() {
		let (a, b) = GPS_L1_CA_TAPS[prn - 1];
		Some(prn_code(TapPair{ tap1: a, tap2: b }))
	} else {
		None
	}
}
