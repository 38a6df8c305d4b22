use anyhow::Result;
use clap::Parser;
use ma_crossover::*;

fn main() -> Result<()> {
    println!("MA_CROSSOVER - Moving Average Crossover Signal Detection\n");

    // Load configuration
    let config = Config::parse();
    config.validate()?;

    // Load market data
    println!("Loading market data...");
    let data = read_close_file(std::path::Path::new(&config.data_file))
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Prices read: {}", data.len());

    // Detect crossovers, timing the computation only
    let start_time = std::time::Instant::now();
    let signals =
        moving_average_crossover(&data.closes, config.short_period, config.long_period)?;
    let elapsed = start_time.elapsed();

    println!("\nBuy Signals:");
    for &i in &signals.buys {
        println!("Buy at {}, Price: {}", data.timestamps[i], data.closes[i]);
    }

    println!("\nSell Signals:");
    for &i in &signals.sells {
        println!("Sell at {}, Price: {}", data.timestamps[i], data.closes[i]);
    }

    // Print summary
    println!("\n{}", "=".repeat(60));
    println!("Summary");
    println!("{}", "=".repeat(60));
    println!(
        "  Periods: short={} long={}",
        config.short_period, config.long_period
    );
    println!("  Buy signals: {}", signals.buys.len());
    println!("  Sell signals: {}", signals.sells.len());
    println!("  Execution Time: {:.6} seconds", elapsed.as_secs_f64());

    // Write results file if requested
    if let Some(path) = &config.output_file {
        write_results(path, &config, &data, &signals)?;
    }

    Ok(())
}
