
pub mod constants;

/// Functionality shared by every signal: sliding a local code replica across a captured window
pub mod common;

pub mod gps_l1_ca;

/// Runs the correlator for each satellite in a tap table
pub mod scanner;
