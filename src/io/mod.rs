use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::DecodeErr;
use crate::gnss::constants::CODE_LENGTH;
use crate::types::ChipSequence;

/// Parses exactly CODE_LENGTH whitespace-separated integers
pub fn parse_chip_sequence(text:&str) -> Result<ChipSequence, DecodeErr> {
	let mut samples:[i16; CODE_LENGTH] = [0; CODE_LENGTH];
	let mut count:usize = 0;

	for token in text.split_whitespace() {
		// Reject as soon as there's one value too many, without looking at the rest
		if count == CODE_LENGTH { return Err(DecodeErr::InputTooLarge); }

		samples[count] = token.parse::<i16>().map_err(|_| DecodeErr::InvalidValue(token.to_string()))?;
		count += 1;
	}

	if count < CODE_LENGTH { Err(DecodeErr::InputTooShort(count)) }
	else { Ok(ChipSequence::new(samples)) }
}

pub fn read_chip_sequence<S: Read>(mut src:S) -> Result<ChipSequence, DecodeErr> {
	let mut text = String::new();
	src.read_to_string(&mut text).map_err(|e| DecodeErr::FileAccess(format!("{}", e)))?;
	parse_chip_sequence(&text)
}

pub fn load_chip_file<P: AsRef<Path>>(path:P) -> Result<ChipSequence, DecodeErr> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| DecodeErr::FileAccess(format!("{}: {}", path.display(), e)))?;
	read_chip_sequence(file)
}
