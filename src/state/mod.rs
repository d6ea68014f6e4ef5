mod config;

pub use config::Configuration;
