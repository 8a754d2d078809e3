//! Constants shared by the Fibonacci methods and the driver.

/// The golden ratio, (1 + sqrt 5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Largest index for which the golden-ratio method is expected to match
/// the exact value in IEEE-754 double precision.
///
/// Past this point `phi^n / sqrt 5` carries more rounding error than the
/// truncation can absorb and the two methods start to disagree.
pub const GOLDEN_EXACT_LIMIT: u32 = 70;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u32 = 93;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// Used as the reference the methods are checked against and to predict
/// the number of recursive calls without running the recursion.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O failure while writing the report).
    pub const ERROR_GENERIC: i32 = 1;
    /// Wrong number of arguments; usage was printed.
    pub const ERROR_USAGE: i32 = 2;
    /// The index or method name was rejected.
    pub const ERROR_INVALID_INPUT: i32 = 4;
}
