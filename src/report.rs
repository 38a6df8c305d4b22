use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::data::MarketData;
use crate::signals::CrossoverSignals;

/// Write the detected signals to a results file
pub fn write_results<P: AsRef<Path>>(
    path: P,
    config: &Config,
    data: &MarketData,
    signals: &CrossoverSignals,
) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path.as_ref())?;

    writeln!(file, "MA_CROSSOVER - Moving Average Crossover Signal Detection")?;
    writeln!(file, "{}", "=".repeat(60))?;
    writeln!(file)?;

    writeln!(file, "Configuration:")?;
    writeln!(file, "  Data file: {}", config.data_file)?;
    writeln!(file, "  Short period: {}", config.short_period)?;
    writeln!(file, "  Long period: {}", config.long_period)?;
    writeln!(file, "  Prices read: {}", data.len())?;
    writeln!(file)?;

    writeln!(file, "Buy Signals ({}):", signals.buys.len())?;
    for &i in &signals.buys {
        writeln!(file, "  Buy at {}, Price: {}", data.timestamps[i], data.closes[i])?;
    }
    writeln!(file)?;

    writeln!(file, "Sell Signals ({}):", signals.sells.len())?;
    for &i in &signals.sells {
        writeln!(file, "  Sell at {}, Price: {}", data.timestamps[i], data.closes[i])?;
    }

    println!("\nResults written to {}", path.as_ref().display());
    Ok(())
}
