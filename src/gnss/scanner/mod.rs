
use std::sync::Arc;

use serde::Serialize;
use tokio::task::{self, JoinHandle};

use crate::DecodeErr;
use crate::gnss::common::acquisition::{scalar, vectorized, Correlator, Detection, Strategy};
use crate::gnss::constants::DETECTION_THRESHOLD;
use crate::gnss::gps_l1_ca::signal_modulation::{prn_code, TapPair, TapTable};
use crate::types::ChipSequence;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
	pub threshold: i32,
	pub strategy: Strategy,
}

impl Default for ScanConfig {
	fn default() -> Self { Self{ threshold: DETECTION_THRESHOLD, strategy: Strategy::Vector } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SatelliteResult {
	pub satellite: usize,
	pub taps: TapPair,
	pub detection: Option<Detection>,
}

impl SatelliteResult {

	pub fn is_detected(&self) -> bool { self.detection.is_some() }

	pub fn report_line(&self) -> Option<String> {
		self.detection.map(|d| format!("Satellite {:2} has sent bit {} (delta = {})", self.satellite, d.bit, d.offset))
	}

}

pub struct SatelliteScanner<C: Correlator> {
	correlator: Arc<C>,
	taps: TapTable,
	threshold: i32,
}

impl<C: Correlator> SatelliteScanner<C> {

	pub fn new(correlator:C, taps:TapTable, threshold:i32) -> Self {
		Self{ correlator: Arc::new(correlator), taps, threshold }
	}

	pub fn taps(&self) -> &TapTable { &self.taps }

	/// One result per table entry, in table order
	pub fn scan(&self) -> Vec<SatelliteResult> {
		self.taps.iter().enumerate()
			.map(|(idx, taps)| scan_one(&*self.correlator, idx + 1, *taps, self.threshold))
			.collect()
	}

	/// 1-based satellite number
	pub fn scan_satellite(&self, satellite:usize) -> Option<SatelliteResult> {
		if satellite == 0 { return None; }
		self.taps.get(satellite - 1).map(|taps| scan_one(&*self.correlator, satellite, taps, self.threshold))
	}

}

impl<C: 'static + Correlator> SatelliteScanner<C> {

	/// Same results as scan(), with each satellite on the blocking pool.  Handles are awaited in
	/// table order so the output order doesn't depend on which worker finishes first
	pub async fn scan_concurrent(&self) -> Result<Vec<SatelliteResult>, DecodeErr> {
		let handles:Vec<JoinHandle<SatelliteResult>> = self.taps.iter().enumerate().map(|(idx, taps)| {
			let correlator = Arc::clone(&self.correlator);
			let taps = *taps;
			let threshold = self.threshold;
			task::spawn_blocking(move || scan_one(&*correlator, idx + 1, taps, threshold))
		}).collect();

		let mut results:Vec<SatelliteResult> = Vec::with_capacity(handles.len());
		for handle in handles {
			results.push(handle.await.map_err(|e| DecodeErr::Worker(format!("{}", e)))?);
		}

		Ok(results)
	}

}

fn scan_one<C: Correlator>(correlator:&C, satellite:usize, taps:TapPair, threshold:i32) -> SatelliteResult {
	let code = prn_code(taps);
	SatelliteResult{ satellite, taps, detection: correlator.correlate(&code, threshold) }
}

pub fn scan(chips:&ChipSequence, taps:TapTable, config:ScanConfig) -> Vec<SatelliteResult> {
	match config.strategy {
		Strategy::Scalar => SatelliteScanner::new(scalar::Correlator::new(chips), taps, config.threshold).scan(),
		Strategy::Vector => SatelliteScanner::new(vectorized::Correlator::new(chips), taps, config.threshold).scan(),
	}
}

pub async fn scan_concurrent(chips:&ChipSequence, taps:TapTable, config:ScanConfig) -> Result<Vec<SatelliteResult>, DecodeErr> {
	match config.strategy {
		Strategy::Scalar => SatelliteScanner::new(scalar::Correlator::new(chips), taps, config.threshold).scan_concurrent().await,
		Strategy::Vector => SatelliteScanner::new(vectorized::Correlator::new(chips), taps, config.threshold).scan_concurrent().await,
	}
}

pub fn detections(results:&[SatelliteResult]) -> Vec<SatelliteResult> {
	results.iter().filter(|r| r.is_detected()).cloned().collect()
}
