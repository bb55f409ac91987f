
/// Chips in one period of the L1 C/A code (2^10 - 1)
pub const CODE_LENGTH:usize = 1023;

/// Minimum correlation magnitude that counts as a detection
pub const DETECTION_THRESHOLD:i32 = 200;

// Lane count of the vectorized correlator; sixteen i16 lanes fill a 256-bit register
pub const LANES:usize = 16;

/// CODE_LENGTH rounded up to a whole number of lanes
pub const PADDED_CODE_LENGTH:usize = ((CODE_LENGTH + LANES - 1) / LANES) * LANES;

/// Length of the duplicated chip window; every offset in [0, CODE_LENGTH) can read PADDED_CODE_LENGTH samples
pub const PADDED_WINDOW_LENGTH:usize = 2 * PADDED_CODE_LENGTH;

// Given in IS-GPS-200K, Table 3-Ia (G2 phase selection for PRN 1 through 32)
pub const GPS_L1_CA_TAPS:[(u8, u8); 32] = [
	(2, 6),  (3, 7), (4, 8), (5, 9),  (1, 9), (2, 10), (1, 8), (2, 9),
	(3, 10), (2, 3), (3, 4), (5, 6),  (6, 7), (7, 8),  (8, 9), (9, 10),
	(1, 4),  (2, 5), (3, 6), (4, 7),  (5, 8), (6, 9),  (1, 3), (4, 6),
	(5, 7),  (6, 8), (7, 9), (8, 10), (1, 6), (2, 7),  (3, 8), (4, 9),
];

/// Satellites scanned by default
pub const DEFAULT_SATELLITE_COUNT:usize = 24;
