
extern crate clap;
extern crate colored;
extern crate gps_bit_decode;
extern crate serde_json;

use std::time::Instant;

use clap::{Arg, App};
use colored::*;
use gps_bit_decode::{io, DecodeErr};
use gps_bit_decode::gnss::common::acquisition::Strategy;
use gps_bit_decode::gnss::gps_l1_ca::signal_modulation::TapTable;
use gps_bit_decode::gnss::scanner::{self, ScanConfig, SatelliteResult};

fn run() -> Result<(), DecodeErr> {

	let matches = App::new("GPS L1 CA Bit Decoder")
		.version("0.1.0")
		.about("Takes one period of C/A chips and reports which satellites are present and the bit each one is sending")
		.arg(Arg::with_name("filename")
			.help("Text file with 1023 whitespace-separated chip amplitudes")
			.required(true).index(1))
		.arg(Arg::with_name("threshold")
			.short("t").long("threshold")
			.help("Correlation magnitude that must be exceeded to report a satellite, default 200")
			.takes_value(true))
		.arg(Arg::with_name("strategy")
			.short("s").long("strategy")
			.takes_value(true)
			.possible_values(&["scalar", "vector"])
			.default_value("vector"))
		.arg(Arg::with_name("concurrent")
			.short("c").long("concurrent")
			.help("Scan satellites on a worker pool"))
		.arg(Arg::with_name("all_prns")
			.long("all-prns")
			.help("Scan all 32 PRNs instead of the first 24"))
		.arg(Arg::with_name("json")
			.long("json")
			.help("Print every satellite's result as JSON"))
		.arg(Arg::with_name("verbose")
			.short("v").long("verbose"))
		.arg(Arg::with_name("dump")
			.long("dump")
			.help("Print the captured chip sequence to stderr"))
		.get_matches();

	let fname:&str = matches.value_of("filename").unwrap_or("");
	let threshold:i32 = match matches.value_of("threshold") {
		Some(s) => s.parse().map_err(|_| DecodeErr::InvalidArgument(format!("threshold '{}'", s)))?,
		None    => ScanConfig::default().threshold,
	};
	let strategy:Strategy = matches.value_of("strategy").unwrap_or("vector").parse()
		.map_err(|e:&str| DecodeErr::InvalidArgument(e.to_string()))?;
	let taps = if matches.is_present("all_prns") { TapTable::gps_l1_ca_extended() } else { TapTable::gps_l1_ca() };
	let config = ScanConfig{ threshold, strategy };

	let chips = io::load_chip_file(fname)?;

	if matches.is_present("dump") { eprintln!("{}", chips); }
	if matches.is_present("verbose") {
		eprintln!("Scanning {} satellites in {}, {:?} strategy, threshold {}", taps.len(), &fname, strategy, threshold);
	}

	let time = Instant::now();

	let results:Vec<SatelliteResult> = if matches.is_present("concurrent") {
		let mut rt = tokio::runtime::Runtime::new().map_err(|e| DecodeErr::Worker(format!("{}", e)))?;
		rt.block_on(scanner::scan_concurrent(&chips, taps, config))?
	} else {
		scanner::scan(&chips, taps, config)
	};

	let elapsed = time.elapsed();

	if matches.is_present("verbose") {
		for r in results.iter() {
			let taps_str = format!("({}, {})", r.taps.tap1(), r.taps.tap2());
			match r.detection {
				Some(d) => eprintln!("{}", format!("PRN {:02} {:8} offset {:4}, correlation {:7}", r.satellite, taps_str, d.offset, d.correlation).green()),
				None    => eprintln!("{}", format!("PRN {:02} {:8} no detection", r.satellite, taps_str).yellow()),
			}
		}
	}

	if matches.is_present("json") {
		match serde_json::to_string_pretty(&results) {
			Ok(json) => println!("{}", json),
			Err(e)   => eprintln!("{}", format!("Unable to serialize results: {}", e).red()),
		}
	} else {
		for line in results.iter().filter_map(|r| r.report_line()) {
			println!("{}", line);
		}
	}

	eprintln!("time taken: {:.6}s", elapsed.as_secs_f64());

	Ok(())
}

fn main() {
	if let Err(e) = run() {
		eprintln!("{}", format!("error: {}", e).red());
		std::process::exit(1);
	}
}
