pub mod config;
pub mod data;
pub mod error;
pub mod indicators;
pub mod report;
pub mod signals;

pub use config::Config;
pub use data::{MarketData, read_close_file};
pub use error::SignalError;
pub use indicators::moving_average;
pub use report::write_results;
pub use signals::{CrossoverSignals, detect_crossovers, moving_average_crossover};
