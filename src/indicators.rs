use crate::error::SignalError;

/// Calculates the Simple Moving Average (SMA) for a given data slice and period.
///
/// # Arguments
///
/// * `data` - A slice of f64 values.
/// * `period` - The window size for the moving average.
///
/// # Returns
///
/// A Vec<f64> the same length as `data`. Position `i` holds the mean of the
/// trailing `period` values ending at `i`; the first `period - 1` positions
/// are NaN. A period larger than the data length yields an all-NaN series.
pub fn moving_average(data: &[f64], period: usize) -> Result<Vec<f64>, SignalError> {
    if period == 0 {
        return Err(SignalError::InvalidPeriod);
    }

    if period > data.len() {
        return Ok(vec![f64::NAN; data.len()]);
    }

    let mut sma = Vec::with_capacity(data.len());

    // Pad with NaN for the initial period where we don't have enough data
    for _ in 0..period - 1 {
        sma.push(f64::NAN);
    }

    // Seed the window sum, then slide it one element at a time
    let mut sum: f64 = data.iter().take(period).sum();
    sma.push(sum / period as f64);

    for i in period..data.len() {
        sum += data[i] - data[i - period];
        sma.push(sum / period as f64);
    }

    Ok(sma)
}
