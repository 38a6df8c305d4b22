use crate::error::SignalError;
use crate::indicators::moving_average;

/// Buy and sell crossover positions, each an index into the original price series
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossoverSignals {
    /// Indices where the short SMA crossed above the long SMA, ascending
    pub buys: Vec<usize>,
    /// Indices where the short SMA crossed below the long SMA, ascending
    pub sells: Vec<usize>,
}

impl CrossoverSignals {
    /// Total number of signals of either kind
    pub fn len(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    /// Check if no crossover occurred
    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }
}

/// Detect crossovers between a short-period and a long-period SMA series.
///
/// Both series must have the same length and cover the same underlying
/// prices. Evaluation starts at `max(short_period, long_period) - 1`, the
/// first position where both averages exist. A position where the short SMA
/// is strictly greater than the long SMA counts as "above"; equality does
/// not. Each not-above to above flip between consecutive positions emits a
/// buy at the later index, and each above to not-above flip a sell. A window
/// with fewer than two comparable positions yields empty lists.
pub fn detect_crossovers(
    short_sma: &[f64],
    long_sma: &[f64],
    short_period: usize,
    long_period: usize,
) -> Result<CrossoverSignals, SignalError> {
    if short_period == 0 || long_period == 0 {
        return Err(SignalError::InvalidPeriod);
    }

    if short_sma.len() != long_sma.len() {
        return Err(SignalError::LengthMismatch {
            short: short_sma.len(),
            long: long_sma.len(),
        });
    }

    let n = short_sma.len();
    let start = short_period.max(long_period) - 1;

    let mut signals = CrossoverSignals::default();
    if start + 1 >= n {
        return Ok(signals);
    }

    let mut prev_above = short_sma[start] > long_sma[start];

    for i in start + 1..n {
        let above = short_sma[i] > long_sma[i];

        if above != prev_above {
            if above {
                signals.buys.push(i);
            } else {
                signals.sells.push(i);
            }
        }

        prev_above = above;
    }

    Ok(signals)
}

/// Compute both SMA series over `closes` and detect their crossovers.
pub fn moving_average_crossover(
    closes: &[f64],
    short_period: usize,
    long_period: usize,
) -> Result<CrossoverSignals, SignalError> {
    let short_sma = moving_average(closes, short_period)?;
    let long_sma = moving_average(closes, long_period)?;

    detect_crossovers(&short_sma, &long_sma, short_period, long_period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rising_series_already_above() {
        // Short SMA exceeds the long one at the first comparable position and
        // stays there, so the window contains no transition at all.
        let closes: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let signals = moving_average_crossover(&closes, 2, 4).unwrap();

        assert!(signals.buys.is_empty());
        assert!(signals.sells.is_empty());
    }

    #[test]
    fn test_recovery_emits_single_buy() {
        let closes = vec![5.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let signals = moving_average_crossover(&closes, 2, 3).unwrap();

        assert_eq!(signals.buys, vec![6]);
        assert!(signals.sells.is_empty());
    }

    #[test]
    fn test_peak_then_recovery() {
        let closes = vec![
            1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0,
        ];
        let signals = moving_average_crossover(&closes, 2, 3).unwrap();

        assert_eq!(signals.sells, vec![6]);
        assert_eq!(signals.buys, vec![10]);
    }

    #[test]
    fn test_signals_ascending_and_disjoint() {
        // Oscillating series producing several crossings in each direction
        let closes = vec![
            10.0, 12.0, 14.0, 12.0, 10.0, 8.0, 10.0, 12.0, 14.0, 12.0, 10.0,
            8.0, 10.0, 12.0, 14.0,
        ];
        let signals = moving_average_crossover(&closes, 2, 4).unwrap();

        assert!(!signals.is_empty());
        assert!(signals.buys.windows(2).all(|w| w[0] < w[1]));
        assert!(signals.sells.windows(2).all(|w| w[0] < w[1]));
        assert!(signals.buys.iter().all(|i| !signals.sells.contains(i)));
    }

    #[test]
    fn test_tie_is_not_above() {
        // Averages stay exactly equal until the last price lifts the short one
        let closes = vec![2.0, 2.0, 2.0, 2.0, 3.0];
        let signals = moving_average_crossover(&closes, 2, 3).unwrap();

        assert_eq!(signals.buys, vec![4]);
        assert!(signals.sells.is_empty());

        // A flat series never leaves the tie, so nothing fires
        let flat = vec![2.0; 8];
        let signals = moving_average_crossover(&flat, 2, 3).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_drop_into_tie_emits_sell() {
        // Period-1 short SMA equals the raw prices: above at index 2, exactly
        // equal to the long SMA at index 3. Leaving "above" through a tie
        // still counts as a downward crossing.
        let closes = vec![4.0, 2.0, 3.0, 3.0];
        let signals = moving_average_crossover(&closes, 1, 2).unwrap();

        assert_eq!(signals.buys, vec![2]);
        assert_eq!(signals.sells, vec![3]);
    }

    #[test]
    fn test_period_equal_to_length_no_signals() {
        let closes = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let signals = moving_average_crossover(&closes, 2, 5).unwrap();
        assert!(signals.is_empty());

        let signals = moving_average_crossover(&closes, 5, 5).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_period_beyond_length_no_signals() {
        let closes = vec![1.0, 2.0, 3.0];
        let signals = moving_average_crossover(&closes, 2, 7).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_single_price() {
        let closes = vec![42.0];
        let signals = moving_average_crossover(&closes, 1, 1).unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let short_sma = vec![1.0, 2.0, 3.0];
        let long_sma = vec![1.0, 2.0];

        let result = detect_crossovers(&short_sma, &long_sma, 1, 2);
        assert_eq!(
            result,
            Err(SignalError::LengthMismatch { short: 3, long: 2 })
        );
    }

    #[test]
    fn test_zero_period_rejected() {
        let sma = vec![1.0, 2.0, 3.0];

        assert_eq!(
            detect_crossovers(&sma, &sma, 0, 2),
            Err(SignalError::InvalidPeriod)
        );
        assert_eq!(
            detect_crossovers(&sma, &sma, 2, 0),
            Err(SignalError::InvalidPeriod)
        );
        assert_eq!(
            moving_average_crossover(&sma, 0, 2),
            Err(SignalError::InvalidPeriod)
        );
    }
}
