use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Closing prices and their parallel timestamps
#[derive(Debug, Clone)]
pub struct MarketData {
    pub timestamps: Vec<String>,
    pub closes: Vec<f64>,
}

impl MarketData {
    /// Get the number of bars
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

/// Read a CSV market file with `timestamp` and `close` columns.
///
/// Column positions are resolved from the header line; any other columns are
/// ignored. Timestamps are kept verbatim as strings, closes are parsed as
/// f64. Non-finite close values are accepted and flow into the computation
/// unchanged.
pub fn read_close_file<P: AsRef<Path>>(filename: P) -> Result<MarketData, String> {
    let file = File::open(filename.as_ref())
        .map_err(|e| format!("Cannot open market history file: {}", e))?;

    let reader = BufReader::new(file);
    let mut lines = reader.lines().enumerate();

    let (_, header_result) = lines
        .next()
        .ok_or_else(|| "No valid data found in file".to_string())?;
    let header = header_result.map_err(|e| format!("Error reading header: {}", e))?;

    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let timestamp_col = columns
        .iter()
        .position(|c| *c == "timestamp")
        .ok_or_else(|| "Missing 'timestamp' column in header".to_string())?;
    let close_col = columns
        .iter()
        .position(|c| *c == "close")
        .ok_or_else(|| "Missing 'close' column in header".to_string())?;

    let mut timestamps = Vec::new();
    let mut closes = Vec::new();

    for (line_num, line_result) in lines {
        let line = line_result
            .map_err(|e| format!("Error reading line {}: {}", line_num + 1, e))?;

        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.len() <= timestamp_col.max(close_col) {
            return Err(format!("Too few columns on line {}", line_num + 1));
        }

        let close = fields[close_col]
            .parse::<f64>()
            .map_err(|_| format!("Invalid close price on line {}", line_num + 1))?;

        timestamps.push(fields[timestamp_col].to_string());
        closes.push(close);
    }

    if closes.is_empty() {
        return Err("No valid data found in file".to_string());
    }

    Ok(MarketData { timestamps, closes })
}
