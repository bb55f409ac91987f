
use std::fmt;

pub mod gnss;
pub mod io;
pub mod types;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DecodeErr {
	FileAccess(String),
	InputTooShort(usize),
	InputTooLarge,
	InvalidValue(String),
	InvalidTap(u8),
	InvalidArgument(String),
	Worker(String),
}

impl fmt::Display for DecodeErr {

	fn fmt(&self, f:&mut fmt::Formatter) -> fmt::Result {
		match self {
			DecodeErr::FileAccess(msg)   => write!(f, "unable to read input file: {}", msg),
			DecodeErr::InputTooShort(n)  => write!(f, "input too short ({} out of {} chips)", n, gnss::constants::CODE_LENGTH),
			DecodeErr::InputTooLarge     => write!(f, "input too large"),
			DecodeErr::InvalidValue(tok) => write!(f, "invalid chip value '{}'", tok),
			DecodeErr::InvalidTap(t)     => write!(f, "tap index {} outside 1..=10", t),
			DecodeErr::InvalidArgument(a) => write!(f, "invalid argument: {}", a),
			DecodeErr::Worker(msg)       => write!(f, "scan worker failed: {}", msg),
		}
	}

}

impl std::error::Error for DecodeErr {}
