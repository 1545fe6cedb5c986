use log::{info, warn};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub struct Config {
    pub bind_address: String,
    pub data_dir: PathBuf,
    pub workers: usize,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_address: try_load("BIND_ADDRESS", "127.0.0.1:8080".to_string()),
            data_dir: PathBuf::from(try_load("DATA_DIR", "data".to_string())),
            workers: try_load("WORKERS", num_cpus::get()).max(1),
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
