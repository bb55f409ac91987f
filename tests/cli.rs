
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use gps_bit_decode::gnss::constants::CODE_LENGTH;
use gps_bit_decode::gnss::gps_l1_ca::signal_modulation::prn_code_for;
use gps_bit_decode::types::ChipSequence;

fn write_input(name:&str, values:&[i16]) -> PathBuf {
	let mut path = std::env::temp_dir();
	path.push(format!("l1_ca_bit_decode_{}_{}.txt", std::process::id(), name));
	let text:Vec<String> = values.iter().map(|v| format!("{}", v)).collect();
	fs::write(&path, text.join(" ")).unwrap();
	path
}

fn run(path:&PathBuf, extra:&[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_l1_ca_bit_decode"))
		.arg(path)
		.args(extra)
		.output()
		.unwrap()
}

fn stdout_lines(out:&Output) -> Vec<String> {
	String::from_utf8_lossy(&out.stdout).lines().map(|s| s.to_string()).collect()
}

#[test]
fn satellite_one_at_zero_offset() {
	let chips = prn_code_for(1).unwrap().to_chips(50);
	let path = write_input("literal", &chips);
	let out = run(&path, &[]);

	assert_eq!(out.status.code(), Some(0));
	assert_eq!(stdout_lines(&out)[0], "Satellite  1 has sent bit 1 (delta = 0)");
	assert!(String::from_utf8_lossy(&out.stderr).contains("time taken"));
	fs::remove_file(path).unwrap();
}

#[test]
fn single_clean_satellite() {
	let chips = ChipSequence::new(prn_code_for(5).unwrap().to_chips(-2)).rotated(100);
	let path = write_input("clean", chips.samples());

	for extra in [vec![], vec!["--strategy", "scalar"], vec!["--concurrent"]].iter() {
		let out = run(&path, extra);
		assert_eq!(out.status.code(), Some(0));
		assert_eq!(stdout_lines(&out), vec![String::from("Satellite  5 has sent bit 0 (delta = 100)")]);
	}
	fs::remove_file(path).unwrap();
}

#[test]
fn wrong_sizes_exit_with_status_one() {
	for (n, msg) in [(CODE_LENGTH - 1, "input too short"), (CODE_LENGTH + 1, "input too large")].iter() {
		let path = write_input(&format!("size_{}", n), &vec![1; *n]);
		let out = run(&path, &[]);

		assert_eq!(out.status.code(), Some(1));
		assert!(out.stdout.is_empty());
		assert!(String::from_utf8_lossy(&out.stderr).contains(msg));
		fs::remove_file(path).unwrap();
	}
}

#[test]
fn missing_file_exits_with_status_one() {
	let out = run(&PathBuf::from("/nonexistent/l1_ca_chips.txt"), &[]);
	assert_eq!(out.status.code(), Some(1));
	assert!(out.stdout.is_empty());
}

#[test]
fn arbitrary_small_values_complete() {
	let mut rng = StdRng::seed_from_u64(42);
	let values:Vec<i16> = (0..CODE_LENGTH).map(|_| rng.gen_range(-3, 4)).collect();
	let path = write_input("random", &values);
	let out = run(&path, &[]);

	assert_eq!(out.status.code(), Some(0));
	fs::remove_file(path).unwrap();
}

#[test]
fn json_lists_every_satellite() {
	let chips = ChipSequence::new(prn_code_for(20).unwrap().to_chips(1)).rotated(7);
	let path = write_input("json", chips.samples());
	let out = run(&path, &["--json", "--all-prns"]);

	assert_eq!(out.status.code(), Some(0));
	let parsed:serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
	let entries = parsed.as_array().unwrap();
	assert_eq!(entries.len(), 32);
	assert_eq!(entries[19]["detection"]["offset"], 7);
	assert_eq!(entries[19]["detection"]["bit"], 1);
	assert!(entries[0]["detection"].is_null());
	fs::remove_file(path).unwrap();
}
