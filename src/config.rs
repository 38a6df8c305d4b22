use anyhow::Result;
use clap::Parser;
use serde::Deserialize;

/// Configuration for moving-average crossover detection
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "ma_crossover")]
#[command(about = "Moving Average Crossover Signal Detection")]
pub struct Config {
    /// Path to market data file (CSV with timestamp and close columns)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: String,

    /// Short-term moving average period
    #[arg(long, default_value_t = 5)]
    pub short_period: usize,

    /// Long-term moving average period
    #[arg(long, default_value_t = 10)]
    pub long_period: usize,

    /// Path to write a results file (console only if omitted)
    #[arg(long)]
    pub output_file: Option<String>,
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.short_period == 0 {
            anyhow::bail!("short_period must be greater than 0");
        }

        if self.long_period == 0 {
            anyhow::bail!("long_period must be greater than 0");
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
