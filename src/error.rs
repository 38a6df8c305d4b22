use thiserror::Error;

/// Errors reported by the SMA and crossover computations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// A moving-average period of zero was requested
    #[error("moving average period must be greater than 0")]
    InvalidPeriod,

    /// The two SMA series handed to the detector have different lengths
    #[error("SMA series length mismatch: short has {short}, long has {long}")]
    LengthMismatch { short: usize, long: usize },
}
